use crate::error::GovernanceError;
use crate::state::proposal::VoteSide;
use anchor_lang::prelude::*;

/// Whether a voter may spread weight across both sides of one proposal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VoteSidePolicy {
    /// Weight may be added to either side on every vote.
    #[default]
    Split,
    /// The first side a voter picks is the only side they may add to.
    SingleSide,
}

/// Per-(user, proposal) vote ledger.
///
/// Pricing always starts from `amount`, the cumulative weight already bought,
/// so incremental purchases can never be priced from a stale base.
/// `tokens_paid` is kept alongside to make the curve auditable.
#[account(zero_copy)]
#[derive(Debug, PartialEq)]
pub struct UserProposalVotes {
    pub user: Pubkey,
    pub proposal: Pubkey,

    /// Cumulative vote-weight bought on this proposal.
    pub amount: u64,

    /// Cumulative tokens paid for that weight.
    pub tokens_paid: u64,

    /// First side voted, or `NO_SIDE` before the first vote.
    pub side: u8,

    pub bump: u8,
    pub _padding: [u8; 6],
}

impl UserProposalVotes {
    pub const LEN: usize = std::mem::size_of::<UserProposalVotes>();
    pub const NO_SIDE: u8 = u8::MAX;

    pub fn new(user: Pubkey, proposal: Pubkey, bump: u8) -> Self {
        Self {
            user,
            proposal,
            amount: 0,
            tokens_paid: 0,
            side: Self::NO_SIDE,
            bump,
            _padding: [0; 6],
        }
    }

    pub fn side(&self) -> Option<VoteSide> {
        VoteSide::try_from(self.side).ok()
    }

    /// Cumulative weight after buying `additional` more.
    pub fn votes_after(&self, additional: u64) -> Result<u64> {
        self.amount
            .checked_add(additional)
            .ok_or_else(|| GovernanceError::Overflow.into())
    }

    /// Records a priced vote purchase.
    pub fn commit(&mut self, side: VoteSide, amount: u64, cost: u64, policy: VoteSidePolicy) -> Result<()> {
        match self.side() {
            Some(previous) if policy == VoteSidePolicy::SingleSide => {
                require!(previous == side, GovernanceError::ConflictingVoteSide);
            }
            Some(_) => {}
            None => self.side = side.as_u8(),
        }

        self.amount = self.votes_after(amount)?;
        self.tokens_paid = self
            .tokens_paid
            .checked_add(cost)
            .ok_or(GovernanceError::Overflow)?;
        Ok(())
    }
}
