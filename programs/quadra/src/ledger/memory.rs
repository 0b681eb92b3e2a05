use super::TokenLedger;
use crate::error::LedgerError;
use anchor_lang::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintInfo {
    pub decimals: u8,
    pub supply: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccount {
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
}

/// Hash-map backed [`TokenLedger`].
///
/// Supply is conserved: `mint_to` and `burn` are the only operations that
/// change a mint's supply, and every transfer debits exactly what it credits.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    mints: HashMap<Pubkey, MintInfo>,
    accounts: HashMap<Pubkey, TokenAccount>,
    lamports: HashMap<Pubkey, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_mint(&mut self, mint: Pubkey, decimals: u8) -> Result<()> {
        require!(!self.mints.contains_key(&mint), LedgerError::AccountAlreadyExists);
        self.mints.insert(mint, MintInfo { decimals, supply: 0 });
        Ok(())
    }

    /// Mints into `owner`'s associated account, opening it if needed.
    pub fn mint_to(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Result<Pubkey> {
        let info = self.mints.get(mint).copied().ok_or(LedgerError::UnknownMint)?;
        let supply = info
            .supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;

        let address = self.get_or_create_associated_account(owner, mint)?;
        let account = self
            .accounts
            .get_mut(&address)
            .ok_or(LedgerError::AccountNotFound)?;
        // supply bounds every balance, so this cannot overflow once supply did not
        account.amount += amount;

        if let Some(info) = self.mints.get_mut(mint) {
            info.supply = supply;
        }
        Ok(address)
    }

    pub fn airdrop(&mut self, wallet: &Pubkey, lamports: u64) -> Result<()> {
        let balance = self.lamports.entry(*wallet).or_insert(0);
        *balance = balance
            .checked_add(lamports)
            .ok_or(LedgerError::SupplyOverflow)?;
        Ok(())
    }

    pub fn supply(&self, mint: &Pubkey) -> Option<u64> {
        self.mints.get(mint).map(|info| info.supply)
    }

    pub fn token_account(&self, address: &Pubkey) -> Option<&TokenAccount> {
        self.accounts.get(address)
    }

    fn holding(&self, mint: &Pubkey, account: &Pubkey) -> Result<TokenAccount> {
        require!(self.mints.contains_key(mint), LedgerError::UnknownMint);
        let holding = self
            .accounts
            .get(account)
            .copied()
            .ok_or(LedgerError::AccountNotFound)?;
        require_keys_eq!(holding.mint, *mint, LedgerError::MintMismatch);
        Ok(holding)
    }
}

impl TokenLedger for InMemoryLedger {
    fn mint_decimals(&self, mint: &Pubkey) -> Option<u8> {
        self.mints.get(mint).map(|info| info.decimals)
    }

    fn account_exists(&self, account: &Pubkey) -> bool {
        self.accounts.contains_key(account)
    }

    fn balance_of(&self, mint: &Pubkey, account: &Pubkey) -> Result<u64> {
        Ok(self.holding(mint, account)?.amount)
    }

    fn create_token_account(&mut self, address: Pubkey, mint: Pubkey, authority: Pubkey) -> Result<()> {
        require!(self.mints.contains_key(&mint), LedgerError::UnknownMint);
        require!(
            !self.accounts.contains_key(&address),
            LedgerError::AccountAlreadyExists
        );

        self.accounts.insert(
            address,
            TokenAccount {
                mint,
                authority,
                amount: 0,
            },
        );
        Ok(())
    }

    fn transfer(&mut self, mint: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let source = self.holding(mint, from)?;
        let destination = self.holding(mint, to)?;
        require!(source.amount >= amount, LedgerError::InsufficientFunds);

        if from == to {
            return Ok(());
        }

        let credited = destination
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;

        if let Some(account) = self.accounts.get_mut(from) {
            account.amount = source.amount - amount;
        }
        if let Some(account) = self.accounts.get_mut(to) {
            account.amount = credited;
        }
        Ok(())
    }

    fn burn(&mut self, mint: &Pubkey, from: &Pubkey, amount: u64) -> Result<()> {
        let source = self.holding(mint, from)?;
        require!(source.amount >= amount, LedgerError::InsufficientFunds);

        if let Some(account) = self.accounts.get_mut(from) {
            account.amount = source.amount - amount;
        }
        if let Some(info) = self.mints.get_mut(mint) {
            info.supply = info.supply.saturating_sub(amount);
        }
        Ok(())
    }

    fn lamports(&self, wallet: &Pubkey) -> u64 {
        self.lamports.get(wallet).copied().unwrap_or(0)
    }

    fn transfer_lamports(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let source = self.lamports(from);
        require!(source >= amount, LedgerError::InsufficientFunds);

        if from == to {
            return Ok(());
        }

        let credited = self
            .lamports(to)
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;

        self.lamports.insert(*from, source - amount);
        self.lamports.insert(*to, credited);
        Ok(())
    }
}
