use anchor_lang::prelude::*;

/// PDA seed constants
pub const FEE_SEED: &[u8] = b"fee";
pub const DAO_SEED: &[u8] = b"dao";
pub const ADMIN_SEED: &[u8] = b"admin";
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";
pub const BURN_SEED: &[u8] = b"burn";
pub const MEMBERSHIP_SEED: &[u8] = b"membership";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const USER_PROPOSAL_VOTES_SEED: &[u8] = b"user_proposal_votes";

/// Record field limits, counted in chars
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_IMAGE_LENGTH: usize = 500;
pub const MIN_TITLE_LENGTH: usize = 10;
pub const MAX_TITLE_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Protocol fee charged in lamports when a DAO is created (0.1 SOL).
pub const DEFAULT_DAO_CREATION_FEE: u64 = 100_000_000;

/// Vote pricing defaults: cost(v) = 1 * v^2
pub const DEFAULT_VOTE_COST_COEFFICIENT: u64 = 1;
pub const DEFAULT_VOTE_COST_EXPONENT: u32 = 2;
pub const MAX_VOTE_COST_EXPONENT: u32 = 4;

/// SPL program ids used to derive associated token account addresses.
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
