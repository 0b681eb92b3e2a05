pub mod admin;
pub mod dao;
pub mod fee_account;
pub mod membership;
pub mod proposal;
pub mod user_proposal_votes;

pub use admin::*;
pub use dao::*;
pub use fee_account::*;
pub use membership::*;
pub use proposal::*;
pub use user_proposal_votes::*;
