use crate::context::{GovernanceContext, Invocation};
use crate::error::GovernanceError;
use crate::ledger::TokenLedger;
use crate::state::proposal::{Proposal, ProposalAction, ProposalStatus};
use crate::utils::events::ProposalCreated;
use crate::utils::RecordKey;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateProposalArgs {
    /// Tokens the action moves out of the treasury if the proposal passes.
    pub token_amount: u64,

    /// Unix seconds; voting is open strictly before this instant.
    pub end_date: i64,

    pub title: String,
    pub description: String,

    /// `0` burns, `1` transfers to `beneficiary`.
    pub action: u8,

    /// Route vote payments to the burn vault instead of the treasury.
    pub burn_on_vote: bool,

    /// Transfer recipient wallet. Ignored for burns.
    pub beneficiary: Pubkey,
}

/// Opens a proposal under the next sequence number of `dao`.
///
/// Sequence allocation, the address collision check and the counter bump all
/// happen on the staged DAO copy, and the copy is only written back after the
/// fee transfer succeeds. A rejected proposal therefore never consumes a
/// sequence number.
///
/// The treasury must already hold `token_amount` when the proposal opens, so
/// members never pay for a proposal that could not settle. Execution checks
/// again, since other proposals may drain the treasury in between. A zero
/// `token_amount` settles nothing and is rejected with `InvalidParameters`.
pub fn create_proposal<L: TokenLedger>(
    ctx: &mut GovernanceContext<L>,
    invocation: &Invocation,
    dao_address: &Pubkey,
    args: CreateProposalArgs,
) -> Result<Pubkey> {
    let creator = invocation.signer;
    let timestamp_now = invocation.unix_timestamp;

    let mut dao = ctx
        .daos
        .get(dao_address)
        .cloned()
        .ok_or(GovernanceError::UnknownDao)?;
    let mut fee_account = ctx
        .fee_account
        .ok_or(GovernanceError::FeeAccountNotInitialized)?;

    let membership_address = ctx.membership_address(dao_address, &creator);
    ctx.memberships
        .get(&membership_address)
        .ok_or(GovernanceError::NotAMember)?
        .ensure_active()?;

    require!(args.end_date > timestamp_now, GovernanceError::InvalidEndDate);
    let action = ProposalAction::from_wire(args.action, args.beneficiary)?;
    require!(args.token_amount > 0, GovernanceError::InvalidParameters);
    Proposal::check_length(&args.title, &args.description)?;

    let fee = dao.proposal_creation_fee;
    let creator_token_account = ctx.ledger.associated_account(&creator, &dao.token_mint);
    let balance = ctx
        .ledger
        .balance_or_zero(&dao.token_mint, &creator_token_account)?;
    require!(balance >= fee, GovernanceError::InsufficientBalance);

    let treasury_balance = ctx.ledger.balance_of(&dao.token_mint, &dao.treasury_vault)?;
    require!(
        treasury_balance >= args.token_amount,
        GovernanceError::InsufficientVaultBalance
    );

    let sequence = dao.allocate_sequence()?;
    let (proposal_address, bump) = RecordKey::Proposal {
        dao: *dao_address,
        sequence,
    }
    .find_address(ctx.program_id());
    require!(
        !ctx.address_in_use(&proposal_address),
        GovernanceError::AlreadyExists
    );

    fee_account.accrue(fee)?;

    let proposal = Proposal {
        dao: *dao_address,
        creator,
        sequence,
        title: args.title,
        description: args.description,
        token_amount: args.token_amount,
        end_date: args.end_date,
        action,
        burn_on_vote: args.burn_on_vote,
        yes_votes: 0,
        no_votes: 0,
        status: ProposalStatus::Pending,
        created_at: timestamp_now,
        executed_at: 0,
        bump,
    };

    ctx.ledger
        .transfer(&dao.token_mint, &creator_token_account, &dao.treasury_vault, fee)?;

    msg!(
        "Proposal #{} ({}) created in DAO {}",
        sequence,
        proposal_address,
        dao_address
    );
    emit!(ProposalCreated {
        dao: *dao_address,
        proposal: proposal_address,
        creator,
        sequence,
        token_amount: proposal.token_amount,
        end_date: proposal.end_date,
        action: action.as_u8(),
        burn_on_vote: proposal.burn_on_vote,
        timestamp: timestamp_now,
    });

    ctx.fee_account = Some(fee_account);
    ctx.daos.insert(*dao_address, dao);
    ctx.proposals.insert(proposal_address, proposal);

    Ok(proposal_address)
}
