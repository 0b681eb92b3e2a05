use crate::context::{GovernanceContext, Invocation};
use crate::error::{GovernanceError, LedgerError};
use crate::ledger::TokenLedger;
use crate::state::proposal::VoteSide;
use crate::state::user_proposal_votes::UserProposalVotes;
use crate::utils::events::VoteCast;
use crate::utils::RecordKey;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteArgs {
    /// Vote-weight to add.
    pub amount: u64,

    /// `0` = no, `1` = yes.
    pub side: u8,
}

/// What a successful vote bought and where the payment went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub user_proposal_votes: Pubkey,
    pub side: VoteSide,
    pub amount: u64,
    pub token_cost: u64,
    pub cumulative_votes: u64,
    pub cumulative_tokens_paid: u64,
    pub destination_vault: Pubkey,
}

/// Buys `amount` vote-weight on one side of a proposal.
///
/// # Pricing
///
/// The voter pays `f(before + amount) - f(before)` where `before` is the weight
/// already held on this proposal and `f` is the configured curve. Pricing reads
/// `before` from the voter's own record inside the same exclusive borrow that
/// writes it back, so two purchases can never be priced from the same base.
/// The curve is in whole tokens and is charged in base units of the
/// governance mint, scaled by `10^decimals`.
///
/// A zero `amount` buys nothing and is rejected with `InvalidParameters`.
///
/// # Custody
///
/// Payments go to the burn vault for `burn_on_vote` proposals and to the
/// treasury otherwise. Burn-vault tokens are never available to execution.
pub fn vote_on_proposal<L: TokenLedger>(
    ctx: &mut GovernanceContext<L>,
    invocation: &Invocation,
    dao_address: &Pubkey,
    proposal_address: &Pubkey,
    args: VoteArgs,
) -> Result<VoteReceipt> {
    let voter = invocation.signer;
    let timestamp_now = invocation.unix_timestamp;

    let (token_mint, treasury_vault, burn_vault) = {
        let dao = ctx
            .daos
            .get(dao_address)
            .ok_or(GovernanceError::UnknownDao)?;
        (dao.token_mint, dao.treasury_vault, dao.burn_vault)
    };
    let mut proposal = ctx
        .proposals
        .get(proposal_address)
        .cloned()
        .ok_or(GovernanceError::UnknownProposal)?;
    require_keys_eq!(proposal.dao, *dao_address, GovernanceError::InvalidProposal);

    let membership_address = ctx.membership_address(dao_address, &voter);
    ctx.memberships
        .get(&membership_address)
        .ok_or(GovernanceError::NotAMember)?
        .ensure_active()?;

    proposal.ensure_voting_open(timestamp_now)?;
    let side = VoteSide::try_from(args.side)?;
    require!(args.amount > 0, GovernanceError::InvalidParameters);

    let (record_address, bump) = RecordKey::UserProposalVotes {
        user: voter,
        proposal: *proposal_address,
    }
    .find_address(ctx.program_id());
    let mut record = ctx
        .vote_records
        .get(&record_address)
        .copied()
        .unwrap_or_else(|| UserProposalVotes::new(voter, *proposal_address, bump));

    let votes_before = record.amount;
    let votes_after = record.votes_after(args.amount)?;
    let decimals = ctx
        .ledger
        .mint_decimals(&token_mint)
        .ok_or(LedgerError::UnknownMint)?;
    let token_cost = ctx
        .config
        .vote_pricing
        .token_cost(votes_before, votes_after, decimals)?;

    record.commit(side, args.amount, token_cost, ctx.config.vote_side_policy)?;
    proposal.record_vote(side, args.amount)?;

    let voter_token_account = ctx.ledger.associated_account(&voter, &token_mint);
    let balance = ctx
        .ledger
        .balance_or_zero(&token_mint, &voter_token_account)?;
    require!(balance >= token_cost, GovernanceError::InsufficientBalance);

    let destination_vault = if proposal.burn_on_vote {
        burn_vault
    } else {
        treasury_vault
    };
    ctx.ledger
        .transfer(&token_mint, &voter_token_account, &destination_vault, token_cost)?;

    msg!(
        "{} bought {} votes on {} for {} tokens",
        voter,
        args.amount,
        proposal_address,
        token_cost
    );
    emit!(VoteCast {
        dao: *dao_address,
        proposal: *proposal_address,
        voter,
        side: side.as_u8(),
        amount: args.amount,
        token_cost,
        cumulative_votes: record.amount,
        burned: proposal.burn_on_vote,
        timestamp: timestamp_now,
    });

    let receipt = VoteReceipt {
        user_proposal_votes: record_address,
        side,
        amount: args.amount,
        token_cost,
        cumulative_votes: record.amount,
        cumulative_tokens_paid: record.tokens_paid,
        destination_vault,
    };

    ctx.proposals.insert(*proposal_address, proposal);
    ctx.vote_records.insert(record_address, record);

    Ok(receipt)
}
