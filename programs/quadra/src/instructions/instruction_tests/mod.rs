//! End-to-end tests driving the handlers through a `GovernanceContext` backed
//! by the in-memory ledger.
//!
//! - `helpers`: a harness with the fee singleton, a funded creator and one DAO.
//! - `addressing`: derived addresses match the published seed scheme.
//! - `dao_lifecycle`: fee singleton and DAO creation.
//! - `membership`: joining, staking and duplicate joins.
//! - `proposal_lifecycle`: creation, sequencing and status.
//! - `voting`: pricing, custody routing and rejection paths.
//! - `execution`: pass rule, settlement and single-shot execution.
//! - `scenarios`: complete governance flows with exact balances.
//! - `concurrency`: a context shared across threads behind a mutex.
//! - `property_tests`: accounting invariants under random vote sequences.

pub mod dao_lifecycle;
