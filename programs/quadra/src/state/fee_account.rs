use crate::error::GovernanceError;
use anchor_lang::prelude::*;

/// Protocol-level fee singleton living at the `fee` seed.
///
/// Independent of any one DAO: every fee-paying instruction adds what it
/// charged to `accrued_fees`. The DAO creation fee is snapshotted from the
/// engine configuration when the singleton is created so later config edits
/// cannot retroactively reprice DAO creation.
#[account(zero_copy)]
#[derive(Debug, PartialEq)]
pub struct FeeAccount {
    /// Signer that initialized the singleton.
    pub authority: Pubkey,

    /// Lamports charged to every DAO creator.
    pub dao_creation_fee: u64,

    /// Running total of every fee amount paid through the engine.
    pub accrued_fees: u64,

    pub daos_created: u64,

    pub bump: u8,
    pub _padding: [u8; 7],
}

impl FeeAccount {
    pub const LEN: usize = std::mem::size_of::<FeeAccount>();

    pub fn new(authority: Pubkey, dao_creation_fee: u64, bump: u8) -> Self {
        Self {
            authority,
            dao_creation_fee,
            accrued_fees: 0,
            daos_created: 0,
            bump,
            _padding: [0; 7],
        }
    }

    /// Adds a paid fee to the running total.
    pub fn accrue(&mut self, amount: u64) -> Result<()> {
        self.accrued_fees = self
            .accrued_fees
            .checked_add(amount)
            .ok_or(GovernanceError::Overflow)?;
        Ok(())
    }

    pub fn record_dao_created(&mut self) -> Result<()> {
        self.daos_created = self
            .daos_created
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;
        Ok(())
    }
}
