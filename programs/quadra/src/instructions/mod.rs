pub mod create_dao;
pub mod create_proposal;
pub mod execute_proposal;
pub mod initialize_fee_account;
pub mod join_dao;
pub mod vote_on_proposal;

pub use create_dao::*;
pub use create_proposal::*;
pub use execute_proposal::*;
pub use initialize_fee_account::*;
pub use join_dao::*;
pub use vote_on_proposal::*;

#[cfg(test)]
mod instruction_tests;
