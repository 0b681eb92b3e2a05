use crate::context::{GovernanceContext, Invocation};
use crate::error::GovernanceError;
use crate::ledger::TokenLedger;
use crate::state::membership::Membership;
use crate::utils::events::MemberJoined;
use crate::utils::RecordKey;
use anchor_lang::prelude::*;

/// Stakes the membership fee into the treasury and records the signer as a
/// member. Returns the membership address.
pub fn join_dao<L: TokenLedger>(
    ctx: &mut GovernanceContext<L>,
    invocation: &Invocation,
    dao_address: &Pubkey,
) -> Result<Pubkey> {
    let user = invocation.signer;
    let timestamp_now = invocation.unix_timestamp;

    let mut dao = ctx
        .daos
        .get(dao_address)
        .cloned()
        .ok_or(GovernanceError::UnknownDao)?;
    let mut fee_account = ctx
        .fee_account
        .ok_or(GovernanceError::FeeAccountNotInitialized)?;

    let (membership_address, bump) = RecordKey::Membership {
        dao: *dao_address,
        user,
    }
    .find_address(ctx.program_id());
    require!(
        !ctx.memberships.contains_key(&membership_address),
        GovernanceError::AlreadyMember
    );

    let stake = dao.membership_fee;
    let user_token_account = ctx.ledger.associated_account(&user, &dao.token_mint);
    let balance = ctx
        .ledger
        .balance_or_zero(&dao.token_mint, &user_token_account)?;
    require!(balance >= stake, GovernanceError::InsufficientBalance);

    dao.record_member(stake)?;
    fee_account.accrue(stake)?;
    let membership = Membership::new(*dao_address, user, stake, timestamp_now, bump);

    ctx.ledger
        .transfer(&dao.token_mint, &user_token_account, &dao.treasury_vault, stake)?;

    msg!("{} joined DAO {} staking {}", user, dao_address, stake);
    emit!(MemberJoined {
        dao: *dao_address,
        member: user,
        staked: stake,
        total_staked: dao.total_staked,
        member_count: dao.member_count,
        timestamp: timestamp_now,
    });

    ctx.fee_account = Some(fee_account);
    ctx.daos.insert(*dao_address, dao);
    ctx.memberships.insert(membership_address, membership);

    Ok(membership_address)
}
