use crate::context::{GovernanceContext, Invocation};
use crate::error::GovernanceError;
use crate::ledger::TokenLedger;
use crate::state::fee_account::FeeAccount;
use crate::utils::events::FeeAccountInitialized;
use crate::utils::RecordKey;
use anchor_lang::prelude::*;

/// Creates the protocol fee singleton. Runs once per context.
pub fn initialize_fee_account<L: TokenLedger>(
    ctx: &mut GovernanceContext<L>,
    invocation: &Invocation,
) -> Result<Pubkey> {
    require!(ctx.fee_account.is_none(), GovernanceError::AlreadyInitialized);
    require!(
        ctx.config.is_fee_authority(&invocation.signer),
        GovernanceError::Unauthorized
    );

    let (fee_account_address, bump) = RecordKey::FeeAccount.find_address(ctx.program_id());
    let fee_account = FeeAccount::new(invocation.signer, ctx.config.dao_creation_fee, bump);

    ctx.fee_account = Some(fee_account);

    msg!(
        "Fee account {} initialized, dao creation fee {} lamports",
        fee_account_address,
        fee_account.dao_creation_fee
    );
    emit!(FeeAccountInitialized {
        fee_account: fee_account_address,
        authority: invocation.signer,
        dao_creation_fee: fee_account.dao_creation_fee,
        timestamp: invocation.unix_timestamp,
    });

    Ok(fee_account_address)
}
