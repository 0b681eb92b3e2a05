use crate::error::GovernanceError;
use anchor_lang::prelude::*;

/// Privileged-role record derived from (DAO, admin). Written once at DAO
/// creation; there is no transfer path.
#[account(zero_copy)]
#[derive(Debug, PartialEq)]
pub struct Admin {
    pub dao: Pubkey,
    pub admin: Pubkey,
    pub bump: u8,
    pub _padding: [u8; 7],
}

impl Admin {
    pub const LEN: usize = std::mem::size_of::<Admin>();

    pub fn new(dao: Pubkey, admin: Pubkey, bump: u8) -> Self {
        Self {
            dao,
            admin,
            bump,
            _padding: [0; 7],
        }
    }

    /// Gate for privileged DAO operations.
    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *caller, GovernanceError::Unauthorized);
        Ok(())
    }
}
