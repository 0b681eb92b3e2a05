use crate::error::GovernanceError;
use crate::utils::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_TITLE_LENGTH};
use anchor_lang::prelude::*;

/// Funded action a proposal settles when it passes.
///
/// Only a transfer names a beneficiary, so a burn proposal cannot carry a
/// stray recipient that execution would have to ignore.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ProposalAction {
    /// Burn `token_amount` from the treasury vault.
    Burn,
    /// Move `token_amount` from the treasury vault to the beneficiary's
    /// associated token account.
    Transfer { beneficiary: Pubkey },
}

impl ProposalAction {
    pub const BURN: u8 = 0;
    pub const TRANSFER: u8 = 1;

    /// Decodes the client-facing `action` discriminant together with the
    /// beneficiary account the client passed alongside it.
    pub fn from_wire(action: u8, beneficiary: Pubkey) -> Result<Self> {
        match action {
            Self::BURN => Ok(ProposalAction::Burn),
            Self::TRANSFER => {
                require!(
                    beneficiary != Pubkey::default(),
                    GovernanceError::InvalidBeneficiary
                );
                Ok(ProposalAction::Transfer { beneficiary })
            }
            _ => err!(GovernanceError::InvalidProposalAction),
        }
    }

    #[inline(always)]
    pub fn as_u8(&self) -> u8 {
        match self {
            ProposalAction::Burn => Self::BURN,
            ProposalAction::Transfer { .. } => Self::TRANSFER,
        }
    }

    #[inline(always)]
    pub fn beneficiary(&self) -> Option<Pubkey> {
        match self {
            ProposalAction::Burn => None,
            ProposalAction::Transfer { beneficiary } => Some(*beneficiary),
        }
    }
}

/// Lifecycle of a proposal. The only forward path is
/// `Pending -> Closed -> Executed`.
///
/// `Closed` is reached by the clock rather than by an instruction, so the
/// stored value may still read `Pending` after `end_date`. Callers resolve the
/// live state through [`Proposal::status_at`] instead of comparing timestamps
/// themselves.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ProposalStatus {
    Pending,
    Closed,
    Executed { passed: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum VoteSide {
    No = 0,
    Yes = 1,
}

impl VoteSide {
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for VoteSide {
    type Error = anchor_lang::error::Error;

    fn try_from(side: u8) -> Result<Self> {
        match side {
            0 => Ok(VoteSide::No),
            1 => Ok(VoteSide::Yes),
            _ => err!(GovernanceError::InvalidSide),
        }
    }
}

#[account]
#[derive(Debug, PartialEq, InitSpace)]
pub struct Proposal {
    pub dao: Pubkey,
    pub creator: Pubkey,
    pub sequence: u64,
    #[max_len(50)]
    pub title: String,
    #[max_len(500)]
    pub description: String,
    pub token_amount: u64,
    pub end_date: i64,
    pub action: ProposalAction,
    pub burn_on_vote: bool,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub status: ProposalStatus,
    pub created_at: i64,
    pub executed_at: i64,
    pub bump: u8,
}

impl Proposal {
    /// Validates title and description lengths in chars.
    pub fn check_length(title: &str, description: &str) -> Result<()> {
        let title_len = title.chars().count();

        require!(title_len >= MIN_TITLE_LENGTH, GovernanceError::TitleTooShort);
        require!(title_len <= MAX_TITLE_LENGTH, GovernanceError::TitleTooLong);
        require!(
            description.chars().count() <= MAX_DESCRIPTION_LENGTH,
            GovernanceError::DescriptionTooLong
        );

        Ok(())
    }

    /// Live status at `now`.
    pub fn status_at(&self, now: i64) -> ProposalStatus {
        match self.status {
            ProposalStatus::Executed { passed } => ProposalStatus::Executed { passed },
            _ if now >= self.end_date => ProposalStatus::Closed,
            _ => ProposalStatus::Pending,
        }
    }

    pub fn ensure_voting_open(&self, now: i64) -> Result<()> {
        match self.status_at(now) {
            ProposalStatus::Pending => Ok(()),
            _ => err!(GovernanceError::VotingClosed),
        }
    }

    pub fn ensure_executable(&self, now: i64) -> Result<()> {
        match self.status_at(now) {
            ProposalStatus::Closed => Ok(()),
            ProposalStatus::Executed { .. } => err!(GovernanceError::AlreadyExecuted),
            ProposalStatus::Pending => err!(GovernanceError::NotReady),
        }
    }

    /// Adds vote-weight to one side of the tally.
    pub fn record_vote(&mut self, side: VoteSide, weight: u64) -> Result<()> {
        let tally = match side {
            VoteSide::No => &mut self.no_votes,
            VoteSide::Yes => &mut self.yes_votes,
        };
        *tally = tally.checked_add(weight).ok_or(GovernanceError::Overflow)?;
        Ok(())
    }

    /// Passing requires the yes quorum and a strict yes majority; a tie fails.
    #[inline(always)]
    pub fn passes(&self, min_yes_votes: u64) -> bool {
        self.yes_votes >= min_yes_votes && self.yes_votes > self.no_votes
    }

    /// Terminal transition. Fails unless the proposal is `Closed` at `now`.
    pub fn mark_executed(&mut self, now: i64, passed: bool) -> Result<()> {
        self.ensure_executable(now)?;
        self.status = ProposalStatus::Executed { passed };
        self.executed_at = now;
        Ok(())
    }
}
