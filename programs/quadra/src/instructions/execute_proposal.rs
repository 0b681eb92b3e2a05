use crate::context::{GovernanceContext, Invocation};
use crate::error::GovernanceError;
use crate::ledger::TokenLedger;
use crate::state::proposal::ProposalAction;
use crate::utils::events::ProposalExecuted;
use anchor_lang::prelude::*;

/// Result of settling a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub passed: bool,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub action: ProposalAction,

    /// Tokens transferred or burned; zero when the proposal failed.
    pub amount_settled: u64,

    /// Token account credited by a passing transfer.
    pub recipient_account: Option<Pubkey>,
}

/// Settles a closed proposal. Anyone may call it.
///
/// # Single Shot
///
/// The proposal becomes `Executed` whether or not it passed, so the fund
/// movement can happen at most once. A passing proposal whose treasury cannot
/// cover `token_amount` is rejected before anything changes and may be
/// executed again once the treasury is topped up.
pub fn execute_proposal<L: TokenLedger>(
    ctx: &mut GovernanceContext<L>,
    invocation: &Invocation,
    dao_address: &Pubkey,
    proposal_address: &Pubkey,
) -> Result<ExecutionOutcome> {
    let timestamp_now = invocation.unix_timestamp;

    let (token_mint, treasury_vault, min_yes_votes) = {
        let dao = ctx
            .daos
            .get(dao_address)
            .ok_or(GovernanceError::UnknownDao)?;
        (dao.token_mint, dao.treasury_vault, dao.min_yes_votes)
    };
    let mut proposal = ctx
        .proposals
        .get(proposal_address)
        .cloned()
        .ok_or(GovernanceError::UnknownProposal)?;
    require_keys_eq!(proposal.dao, *dao_address, GovernanceError::InvalidProposal);

    proposal.ensure_executable(timestamp_now)?;

    let passed = proposal.passes(min_yes_votes);
    let amount = proposal.token_amount;
    if passed {
        let vault_balance = ctx.ledger.balance_of(&token_mint, &treasury_vault)?;
        require!(
            vault_balance >= amount,
            GovernanceError::InsufficientVaultBalance
        );
    }

    proposal.mark_executed(timestamp_now, passed)?;

    let mut recipient_account = None;
    if passed {
        match proposal.action {
            ProposalAction::Transfer { beneficiary } => {
                let destination = ctx
                    .ledger
                    .get_or_create_associated_account(&beneficiary, &token_mint)?;
                ctx.ledger
                    .transfer(&token_mint, &treasury_vault, &destination, amount)?;
                recipient_account = Some(destination);
            }
            ProposalAction::Burn => {
                ctx.ledger.burn(&token_mint, &treasury_vault, amount)?;
            }
        }
    }

    let amount_settled = if passed { amount } else { 0 };

    msg!(
        "Proposal {} executed: passed={} yes={} no={}",
        proposal_address,
        passed,
        proposal.yes_votes,
        proposal.no_votes
    );
    emit!(ProposalExecuted {
        dao: *dao_address,
        proposal: *proposal_address,
        executor: invocation.signer,
        passed,
        yes_votes: proposal.yes_votes,
        no_votes: proposal.no_votes,
        amount_settled,
        timestamp: timestamp_now,
    });

    let outcome = ExecutionOutcome {
        passed,
        yes_votes: proposal.yes_votes,
        no_votes: proposal.no_votes,
        action: proposal.action,
        amount_settled,
        recipient_account,
    };

    ctx.proposals.insert(*proposal_address, proposal);

    Ok(outcome)
}
