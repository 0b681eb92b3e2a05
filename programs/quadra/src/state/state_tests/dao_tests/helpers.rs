use crate::state::dao::Dao;
use crate::state::state_tests::helpers::deterministic_pubkey;

pub(crate) const FIXTURE_MIN_YES_VOTES: u64 = 10;
pub(crate) const FIXTURE_PROPOSAL_FEE: u64 = 5;
pub(crate) const FIXTURE_MEMBERSHIP_FEE: u64 = 100;

/// A freshly created DAO with no members and no proposals.
pub(crate) fn dao_fixture() -> Dao {
    Dao {
        creator: deterministic_pubkey(1),
        name: "Quadra Collective".to_string(),
        image: "https://example.org/logo.png".to_string(),
        token_mint: deterministic_pubkey(2),
        treasury_vault: deterministic_pubkey(3),
        burn_vault: deterministic_pubkey(4),
        total_proposals: 0,
        min_yes_votes: FIXTURE_MIN_YES_VOTES,
        proposal_creation_fee: FIXTURE_PROPOSAL_FEE,
        membership_fee: FIXTURE_MEMBERSHIP_FEE,
        total_staked: 0,
        member_count: 0,
        created_at: 1_700_000_000,
        bump: 254,
    }
}
