use super::helpers::{
    at, bare_context, dao_args, Harness, CREATOR_SEED, MEMBERSHIP_FEE, MIN_YES_VOTES,
    PROPOSAL_FEE, START, STARTING_LAMPORTS,
};
use crate::components::vote_pricing::VotePricing;
use crate::config::EngineConfig;
use crate::context::GovernanceContext;
use crate::error::GovernanceError;
use crate::ledger::{InMemoryLedger, TokenLedger};
use crate::state::state_tests::helpers::{assert_governance_error, deterministic_pubkey};
use crate::utils::constants::DEFAULT_DAO_CREATION_FEE;

#[test]
fn fee_account_initializes_once() {
    let (mut ctx, _) = bare_context(EngineConfig::default());
    let signer = deterministic_pubkey(CREATOR_SEED);

    let address = ctx.initialize_fee_account(&at(signer, START)).unwrap();
    assert_eq!(address, ctx.fee_account_address());

    let fee_account = *ctx.fee_account().unwrap();
    assert_eq!(fee_account.accrued_fees, 0);
    assert_eq!(fee_account.authority, signer);
    assert_eq!(fee_account.dao_creation_fee, DEFAULT_DAO_CREATION_FEE);

    assert_governance_error(
        ctx.initialize_fee_account(&at(deterministic_pubkey(9), START)),
        GovernanceError::AlreadyInitialized,
    );
    assert_eq!(ctx.fee_account().unwrap().authority, signer);
}

#[test]
fn fee_authorities_restrict_initialization() {
    let authority = deterministic_pubkey(30);
    let (mut ctx, _) =
        bare_context(EngineConfig::default().with_fee_authorities(vec![authority]));

    assert_governance_error(
        ctx.initialize_fee_account(&at(deterministic_pubkey(31), START)),
        GovernanceError::Unauthorized,
    );
    assert!(ctx.fee_account().is_none());

    ctx.initialize_fee_account(&at(authority, START)).unwrap();
    assert!(ctx.fee_account().is_some());
}

#[test]
fn invalid_pricing_curve_is_rejected_at_construction() {
    let config = EngineConfig::default().with_vote_pricing(VotePricing {
        coefficient: 0,
        exponent: 2,
    });

    assert_governance_error(
        GovernanceContext::new(config, InMemoryLedger::new()),
        GovernanceError::InvalidPricingCurve,
    );
}

#[test]
fn create_dao_requires_fee_account() {
    let (mut ctx, mint) = bare_context(EngineConfig::default());
    let creator = deterministic_pubkey(CREATOR_SEED);
    ctx.ledger_mut().airdrop(&creator, STARTING_LAMPORTS).unwrap();

    assert_governance_error(
        ctx.create_dao(&at(creator, START), dao_args(mint)),
        GovernanceError::FeeAccountNotInitialized,
    );
}

#[test]
fn create_dao_records_match_arguments() {
    let harness = Harness::new();
    let ctx = &harness.ctx;
    let dao = ctx.dao(&harness.dao()).unwrap();
    let expected = dao_args(harness.mint);

    assert_eq!(harness.dao(), ctx.dao_address(&harness.creator));
    assert_eq!(dao.creator, harness.creator);
    assert_eq!(dao.name, expected.name);
    assert_eq!(dao.image, expected.image);
    assert_eq!(dao.token_mint, harness.mint);
    assert_eq!(dao.min_yes_votes, MIN_YES_VOTES);
    assert_eq!(dao.proposal_creation_fee, PROPOSAL_FEE);
    assert_eq!(dao.membership_fee, MEMBERSHIP_FEE);
    assert_eq!(dao.total_proposals, 0);
    assert_eq!(dao.total_staked, 0);
    assert_eq!(dao.member_count, 0);
    assert_eq!(dao.created_at, START);
    assert_eq!(dao.treasury_vault, harness.addresses.treasury_vault);
    assert_eq!(dao.burn_vault, harness.addresses.burn_vault);
}

#[test]
fn exactly_one_admin_equal_to_creator() {
    let harness = Harness::new();
    let ctx = &harness.ctx;

    assert_eq!(ctx.admin_count(&harness.dao()), 1);
    assert_eq!(
        harness.addresses.admin,
        ctx.admin_address(&harness.dao(), &harness.creator)
    );

    let admin = ctx.admin(&harness.addresses.admin).unwrap();
    assert_eq!(admin.admin, harness.creator);
    assert_eq!(admin.dao, harness.dao());
    assert!(admin.ensure_admin(&harness.creator).is_ok());
    assert_governance_error(
        admin.ensure_admin(&deterministic_pubkey(77)),
        GovernanceError::Unauthorized,
    );
}

#[test]
fn vaults_are_empty_self_owned_token_accounts() {
    let harness = Harness::new();
    let ledger = harness.ctx.ledger();

    for vault in [harness.addresses.treasury_vault, harness.addresses.burn_vault] {
        let account = ledger.token_account(&vault).unwrap();
        assert_eq!(account.mint, harness.mint);
        assert_eq!(account.authority, vault);
        assert_eq!(account.amount, 0);
    }
    assert_ne!(harness.addresses.treasury_vault, harness.addresses.burn_vault);
}

#[test]
fn creation_fee_moves_lamports_to_fee_account() {
    let harness = Harness::new();
    let ctx = &harness.ctx;
    let fee_address = ctx.fee_account_address();

    assert_eq!(
        ctx.ledger().lamports(&harness.creator),
        STARTING_LAMPORTS - DEFAULT_DAO_CREATION_FEE
    );
    assert_eq!(ctx.ledger().lamports(&fee_address), DEFAULT_DAO_CREATION_FEE);

    let fee_account = ctx.fee_account().unwrap();
    assert_eq!(fee_account.accrued_fees, DEFAULT_DAO_CREATION_FEE);
    assert_eq!(fee_account.daos_created, 1);
}

#[test]
fn second_dao_for_same_creator_is_rejected_without_side_effects() {
    let mut harness = Harness::new();
    let creator = harness.creator;
    let lamports_before = harness.ctx.ledger().lamports(&creator);
    let fee_before = *harness.ctx.fee_account().unwrap();

    assert_governance_error(
        harness
            .ctx
            .create_dao(&at(creator, START + 5), dao_args(harness.mint)),
        GovernanceError::AlreadyExists,
    );

    assert_eq!(harness.ctx.ledger().lamports(&creator), lamports_before);
    assert_eq!(*harness.ctx.fee_account().unwrap(), fee_before);
    assert_eq!(harness.ctx.dao(&harness.dao()).unwrap().created_at, START);
}

#[test]
fn create_dao_parameter_validation() {
    let mut harness = Harness::new();
    let other = deterministic_pubkey(40);
    harness.ctx.ledger_mut().airdrop(&other, STARTING_LAMPORTS).unwrap();
    let mint = harness.mint;

    let cases = [
        (
            {
                let mut args = dao_args(mint);
                args.min_yes_votes = 0;
                args
            },
            GovernanceError::InvalidParameters,
        ),
        (
            {
                let mut args = dao_args(mint);
                args.proposal_creation_fee = 0;
                args
            },
            GovernanceError::InvalidParameters,
        ),
        (
            {
                let mut args = dao_args(mint);
                args.membership_fee = 0;
                args
            },
            GovernanceError::InvalidParameters,
        ),
        (
            {
                let mut args = dao_args(mint);
                args.name = "Q".to_string();
                args
            },
            GovernanceError::NameTooShort,
        ),
        (
            {
                let mut args = dao_args(mint);
                args.image = "i".repeat(501);
                args
            },
            GovernanceError::ImageTooLong,
        ),
        (
            {
                let mut args = dao_args(mint);
                args.token_mint = deterministic_pubkey(41);
                args
            },
            GovernanceError::InvalidTokenMint,
        ),
    ];

    for (args, expected) in cases {
        assert_governance_error(harness.ctx.create_dao(&at(other, START), args), expected);
    }

    let dao_address = harness.ctx.dao_address(&other);
    assert!(harness.ctx.dao(&dao_address).is_none());
    assert_eq!(harness.ctx.ledger().lamports(&other), STARTING_LAMPORTS);
}

#[test]
fn creator_without_lamports_cannot_pay_creation_fee() {
    let mut harness = Harness::new();
    let poor = deterministic_pubkey(42);
    harness
        .ctx
        .ledger_mut()
        .airdrop(&poor, DEFAULT_DAO_CREATION_FEE - 1)
        .unwrap();

    assert_governance_error(
        harness.ctx.create_dao(&at(poor, START), dao_args(harness.mint)),
        GovernanceError::InsufficientBalance,
    );

    let vault = harness
        .ctx
        .treasury_vault_address(&harness.ctx.dao_address(&poor));
    assert!(!harness.ctx.ledger().account_exists(&vault));
    assert_eq!(harness.ctx.fee_account().unwrap().daos_created, 1);
}

#[test]
fn configured_creation_fee_is_snapshotted() {
    let harness = Harness::with_config(EngineConfig::default().with_dao_creation_fee(5_000));
    assert_eq!(harness.ctx.fee_account().unwrap().dao_creation_fee, 5_000);
    assert_eq!(
        harness.ctx.ledger().lamports(&harness.creator),
        STARTING_LAMPORTS - 5_000
    );
}
