use crate::context::{GovernanceContext, Invocation};
use crate::error::GovernanceError;
use crate::ledger::TokenLedger;
use crate::state::admin::Admin;
use crate::state::dao::Dao;
use crate::utils::events::DaoCreated;
use crate::utils::RecordKey;
use anchor_lang::prelude::*;

/// Parameters of a new DAO.
///
/// The governance token is chosen by the creator and fixed for the DAO's
/// lifetime: stakes, vote payments and treasury payouts all use it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateDaoArgs {
    pub name: String,
    pub image: String,

    /// Yes-weight quorum a proposal needs on top of a strict majority.
    pub min_yes_votes: u64,

    /// Tokens a member pays into the treasury per proposal.
    pub proposal_creation_fee: u64,

    /// Tokens staked into the treasury on joining.
    pub membership_fee: u64,

    pub token_mint: Pubkey,
}

impl CreateDaoArgs {
    fn validate(&self) -> Result<()> {
        require!(self.min_yes_votes > 0, GovernanceError::InvalidParameters);
        require!(
            self.proposal_creation_fee >= 1,
            GovernanceError::InvalidParameters
        );
        require!(self.membership_fee >= 1, GovernanceError::InvalidParameters);
        Dao::check_length(&self.name, &self.image)
    }
}

/// Addresses of everything `create_dao` brings into existence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaoAddresses {
    pub dao: Pubkey,
    pub admin: Pubkey,
    pub treasury_vault: Pubkey,
    pub burn_vault: Pubkey,
}

/// Creates a DAO owned by the signer, its admin record and both vaults, and
/// charges the protocol creation fee in lamports.
///
/// Vault token accounts are their own authority; funds only leave them through
/// `execute_proposal`.
pub fn create_dao<L: TokenLedger>(
    ctx: &mut GovernanceContext<L>,
    invocation: &Invocation,
    args: CreateDaoArgs,
) -> Result<DaoAddresses> {
    let creator = invocation.signer;
    let timestamp_now = invocation.unix_timestamp;
    let program_id = *ctx.program_id();

    let mut fee_account = ctx
        .fee_account
        .ok_or(GovernanceError::FeeAccountNotInitialized)?;

    args.validate()?;
    require!(
        ctx.ledger.mint_decimals(&args.token_mint).is_some(),
        GovernanceError::InvalidTokenMint
    );

    let (dao_address, dao_bump) = RecordKey::Dao { creator }.find_address(&program_id);
    let (admin_address, admin_bump) = RecordKey::Admin {
        dao: dao_address,
        admin: creator,
    }
    .find_address(&program_id);
    let treasury_vault = RecordKey::TreasuryVault { dao: dao_address }.address(&program_id);
    let burn_vault = RecordKey::BurnVault { dao: dao_address }.address(&program_id);

    for address in [dao_address, admin_address, treasury_vault, burn_vault] {
        require!(!ctx.address_in_use(&address), GovernanceError::AlreadyExists);
    }

    let creation_fee = fee_account.dao_creation_fee;
    require!(
        ctx.ledger.lamports(&creator) >= creation_fee,
        GovernanceError::InsufficientBalance
    );

    fee_account.accrue(creation_fee)?;
    fee_account.record_dao_created()?;

    let dao = Dao {
        creator,
        name: args.name,
        image: args.image,
        token_mint: args.token_mint,
        treasury_vault,
        burn_vault,
        total_proposals: 0,
        min_yes_votes: args.min_yes_votes,
        proposal_creation_fee: args.proposal_creation_fee,
        membership_fee: args.membership_fee,
        total_staked: 0,
        member_count: 0,
        created_at: timestamp_now,
        bump: dao_bump,
    };
    let admin = Admin::new(dao_address, creator, admin_bump);

    ctx.ledger
        .create_token_account(treasury_vault, dao.token_mint, treasury_vault)?;
    ctx.ledger
        .create_token_account(burn_vault, dao.token_mint, burn_vault)?;
    if creation_fee > 0 {
        let fee_account_address = RecordKey::FeeAccount.address(&program_id);
        ctx.ledger
            .transfer_lamports(&creator, &fee_account_address, creation_fee)?;
    }

    msg!("DAO {} created by {}", dao_address, creator);
    emit!(DaoCreated {
        dao: dao_address,
        creator,
        token_mint: dao.token_mint,
        treasury_vault,
        burn_vault,
        min_yes_votes: dao.min_yes_votes,
        proposal_creation_fee: dao.proposal_creation_fee,
        membership_fee: dao.membership_fee,
        creation_fee_paid: creation_fee,
        timestamp: timestamp_now,
    });

    ctx.fee_account = Some(fee_account);
    ctx.daos.insert(dao_address, dao);
    ctx.admins.insert(admin_address, admin);

    Ok(DaoAddresses {
        dao: dao_address,
        admin: admin_address,
        treasury_vault,
        burn_vault,
    })
}
