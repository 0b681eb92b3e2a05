pub mod vote_pricing;

pub use vote_pricing::*;
