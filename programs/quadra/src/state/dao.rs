use crate::error::GovernanceError;
use crate::utils::constants::{MAX_IMAGE_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use anchor_lang::prelude::*;

/// Per-organization configuration and counters.
///
/// # Sequence Allocation
///
/// `total_proposals` doubles as the next proposal sequence number. It is only
/// advanced through [`Dao::allocate_sequence`], which hands out the current
/// value and increments in the same call, so sequences are dense from zero
/// and never reused.
///
/// # Stake Accounting
///
/// `total_staked` is the sum of every membership's stake. Vote payments are not
/// stake and never touch it.
#[account]
#[derive(Debug, PartialEq, InitSpace)]
pub struct Dao {
    pub creator: Pubkey,
    #[max_len(50)]
    pub name: String,
    #[max_len(500)]
    pub image: String,
    pub token_mint: Pubkey,
    pub treasury_vault: Pubkey,
    pub burn_vault: Pubkey,
    pub total_proposals: u64,
    pub min_yes_votes: u64, // minimum yes votes required for a proposal to pass
    pub proposal_creation_fee: u64,
    pub membership_fee: u64,
    pub total_staked: u64,
    pub member_count: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl Dao {
    /// Validates name and image lengths in chars.
    pub fn check_length(name: &str, image: &str) -> Result<()> {
        let name_len = name.chars().count();

        require!(name_len >= MIN_NAME_LENGTH, GovernanceError::NameTooShort);
        require!(name_len <= MAX_NAME_LENGTH, GovernanceError::NameTooLong);
        require!(
            image.chars().count() <= MAX_IMAGE_LENGTH,
            GovernanceError::ImageTooLong
        );

        Ok(())
    }

    /// Returns the sequence for the next proposal and advances the counter.
    pub fn allocate_sequence(&mut self) -> Result<u64> {
        let sequence = self.total_proposals;
        self.total_proposals = sequence
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;
        Ok(sequence)
    }

    /// Books a new member's stake.
    pub fn record_member(&mut self, stake: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(stake)
            .ok_or(GovernanceError::Overflow)?;
        self.member_count = self
            .member_count
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;
        Ok(())
    }
}
