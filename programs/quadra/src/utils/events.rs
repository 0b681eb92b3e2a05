use anchor_lang::prelude::*;

#[event]
pub struct FeeAccountInitialized {
    pub fee_account: Pubkey,
    pub authority: Pubkey,
    pub dao_creation_fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct DaoCreated {
    pub dao: Pubkey,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub treasury_vault: Pubkey,
    pub burn_vault: Pubkey,
    pub min_yes_votes: u64,
    pub proposal_creation_fee: u64,
    pub membership_fee: u64,
    pub creation_fee_paid: u64,
    pub timestamp: i64,
}

#[event]
pub struct MemberJoined {
    pub dao: Pubkey,
    pub member: Pubkey,
    pub staked: u64,
    pub total_staked: u64,
    pub member_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProposalCreated {
    pub dao: Pubkey,
    pub proposal: Pubkey,
    pub creator: Pubkey,
    pub sequence: u64,
    pub token_amount: u64,
    pub end_date: i64,
    pub action: u8, // 0 = burn, 1 = transfer
    pub burn_on_vote: bool,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub dao: Pubkey,
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub side: u8,
    pub amount: u64,
    pub token_cost: u64,
    pub cumulative_votes: u64,
    pub burned: bool,
    pub timestamp: i64,
}

#[event]
pub struct ProposalExecuted {
    pub dao: Pubkey,
    pub proposal: Pubkey,
    pub executor: Pubkey,
    pub passed: bool,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub amount_settled: u64,
    pub timestamp: i64,
}
