pub mod address;
pub mod constants;
pub mod events;

pub use address::*;
