#![allow(unexpected_cfgs)]
//! Quadratic-voting DAO governance.
//!
//! Members stake a governance token to join a DAO, open funded proposals and
//! buy vote-weight priced on a convex curve. Closed proposals settle with a
//! single treasury transfer or burn. Handlers run against an explicit
//! [`GovernanceContext`] and move funds only through the [`TokenLedger`] seam.
use anchor_lang::prelude::*;

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use config::EngineConfig;
pub use context::{GovernanceContext, Invocation};
pub use error::{GovernanceError, LedgerError};
pub use ledger::{InMemoryLedger, TokenLedger};

declare_id!("25Kw1yUstwo9dBugYc3GNY1cniMMwZjatXQWuBfLV2Da");
