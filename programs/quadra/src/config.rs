use crate::components::vote_pricing::VotePricing;
use crate::error::GovernanceError;
use crate::state::user_proposal_votes::VoteSidePolicy;
use crate::utils::constants::DEFAULT_DAO_CREATION_FEE;
use anchor_lang::prelude::*;

/// Engine-wide knobs fixed for the lifetime of a [`GovernanceContext`].
///
/// # Fee Authorities
///
/// An empty `fee_authorities` list leaves `initialize_fee_account` open to any
/// signer, which is how the singleton has always been bootstrapped. Listing
/// keys restricts initialization to those signers.
///
/// # Vote Pricing
///
/// `vote_pricing` and `vote_side_policy` apply to every DAO the context hosts.
/// Changing them mid-flight would reprice positions voters already hold, so
/// they are read-only once the context exists.
///
/// [`GovernanceContext`]: crate::context::GovernanceContext
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Program id every record address is derived under.
    pub program_id: Pubkey,

    pub fee_authorities: Vec<Pubkey>,

    /// Lamports charged per DAO, snapshotted into the fee singleton.
    pub dao_creation_fee: u64,

    pub vote_pricing: VotePricing,

    pub vote_side_policy: VoteSidePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program_id: crate::ID,
            fee_authorities: Vec::new(),
            dao_creation_fee: DEFAULT_DAO_CREATION_FEE,
            vote_pricing: VotePricing::default(),
            vote_side_policy: VoteSidePolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.program_id != Pubkey::default(),
            GovernanceError::InvalidParameters
        );
        self.vote_pricing.validate()?;
        Ok(())
    }

    #[inline(always)]
    pub fn is_fee_authority(&self, signer: &Pubkey) -> bool {
        self.fee_authorities.is_empty() || self.fee_authorities.contains(signer)
    }

    pub fn with_vote_pricing(mut self, vote_pricing: VotePricing) -> Self {
        self.vote_pricing = vote_pricing;
        self
    }

    pub fn with_vote_side_policy(mut self, policy: VoteSidePolicy) -> Self {
        self.vote_side_policy = policy;
        self
    }

    pub fn with_fee_authorities(mut self, authorities: Vec<Pubkey>) -> Self {
        self.fee_authorities = authorities;
        self
    }

    pub fn with_dao_creation_fee(mut self, lamports: u64) -> Self {
        self.dao_creation_fee = lamports;
        self
    }
}
