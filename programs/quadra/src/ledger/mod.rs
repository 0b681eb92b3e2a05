//! Token custody seam.
//!
//! The governance handlers never touch balances directly. Every token and
//! lamport movement goes through [`TokenLedger`], which the host implements on
//! top of whatever ledger it runs against. [`InMemoryLedger`] is the reference
//! implementation used by tests, benches and simulations.

pub mod memory;

pub use memory::*;

use crate::utils::constants::{ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID};
use anchor_lang::prelude::*;

/// Minimal fungible-token capability the settlement engine needs.
///
/// # Atomicity
///
/// Each mutating call either applies completely or fails without effect.
/// Handlers validate all governance preconditions before their first ledger
/// call, so a ledger failure never leaves records half-updated.
///
/// # Authority
///
/// Signature checks belong to the host. The ledger trusts that the caller of
/// `transfer`/`burn` has already been authorized to move funds out of `from`.
pub trait TokenLedger {
    /// `None` when the mint does not exist.
    fn mint_decimals(&self, mint: &Pubkey) -> Option<u8>;

    fn account_exists(&self, account: &Pubkey) -> bool;

    /// Balance of `account`, which must hold `mint`.
    fn balance_of(&self, mint: &Pubkey, account: &Pubkey) -> Result<u64>;

    /// Opens an empty token account at `address`.
    fn create_token_account(&mut self, address: Pubkey, mint: Pubkey, authority: Pubkey) -> Result<()>;

    fn transfer(&mut self, mint: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;

    /// Destroys `amount` held by `from` and shrinks the mint supply.
    fn burn(&mut self, mint: &Pubkey, from: &Pubkey, amount: u64) -> Result<()>;

    fn lamports(&self, wallet: &Pubkey) -> u64;

    fn transfer_lamports(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;

    /// Canonical associated token account of `owner` for `mint`.
    fn associated_account(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        associated_token_address(owner, mint)
    }

    /// A missing account reads as an empty one.
    fn balance_or_zero(&self, mint: &Pubkey, account: &Pubkey) -> Result<u64> {
        if !self.account_exists(account) {
            return Ok(0);
        }
        self.balance_of(mint, account)
    }

    /// Resolves the associated account, opening it when it does not exist yet.
    fn get_or_create_associated_account(&mut self, owner: &Pubkey, mint: &Pubkey) -> Result<Pubkey> {
        let address = self.associated_account(owner, mint);
        if !self.account_exists(&address) {
            self.create_token_account(address, *mint, *owner)?;
        }
        Ok(address)
    }
}

/// Same derivation the associated-token program uses:
/// seeds `[owner, token_program, mint]` under the associated-token program id.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[owner.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .0
}
