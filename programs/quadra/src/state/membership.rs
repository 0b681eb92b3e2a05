use crate::error::GovernanceError;
use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

/// Per-(DAO, user) proof that the membership fee was staked.
#[account(zero_copy)]
#[derive(Debug, PartialEq)]
pub struct Membership {
    pub dao: Pubkey,
    pub user: Pubkey,

    /// Tokens moved into the treasury when joining.
    pub staked: u64,

    pub joined_date: i64,
    pub flags: MembershipFlags,
    pub bump: u8,
    pub _padding: [u8; 6],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, Default)]
#[repr(transparent)]
pub struct MembershipFlags(u8);

impl MembershipFlags {
    pub const ACTIVE: Self = Self(0b0000_0001);

    #[inline(always)] pub const fn new() -> Self { Self(0) }

    #[inline(always)]
    pub fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, flag: Self) {
        self.0 |= flag.0;
    }

    #[inline(always)]
    pub fn is_active(self) -> bool {
        self.has(Self::ACTIVE)
    }
}

impl Membership {
    pub const LEN: usize = std::mem::size_of::<Membership>();

    pub fn new(dao: Pubkey, user: Pubkey, staked: u64, joined_date: i64, bump: u8) -> Self {
        let mut flags = MembershipFlags::new();
        flags.set(MembershipFlags::ACTIVE);

        Self {
            dao,
            user,
            staked,
            joined_date,
            flags,
            bump,
            _padding: [0; 6],
        }
    }

    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.flags.is_active()
    }

    /// Voting and proposing both funnel through this check.
    pub fn ensure_active(&self) -> Result<()> {
        require!(self.is_active(), GovernanceError::NotAMember);
        Ok(())
    }
}
