/// Vote-weight pricing curve.
///
/// # Pricing Model
///
/// Buying vote-weight on a proposal is priced on the voter's cumulative weight:
/// reaching `v` votes costs `f(v) = coefficient * v^exponent` tokens in total,
/// and each purchase pays only the difference `f(after) - f(before)`. With the
/// default quadratic curve, doubling influence costs four times the tokens.
///
/// # Wide Arithmetic
///
/// `f(v)` for a u64 `v` overflows u64 long before the difference between two
/// neighbouring points does, so both endpoints are evaluated in U256 and only
/// the difference is narrowed back to token units.
///
/// # Units
///
/// The curve is denominated in whole tokens. [`VotePricing::token_cost`]
/// scales a step by `10^decimals` of the governance mint, so the same curve
/// charges the same economic price on a 0-decimal and a 9-decimal mint.
use crate::error::GovernanceError;
use crate::utils::constants::{
    DEFAULT_VOTE_COST_COEFFICIENT, DEFAULT_VOTE_COST_EXPONENT, MAX_VOTE_COST_EXPONENT,
};
use anchor_lang::prelude::*;
use ethnum::U256;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VotePricing {
    /// Token base units charged per unit of `v^exponent`.
    pub coefficient: u64,

    /// Growth rate of the curve. 1 is linear (plutocratic), 2 is quadratic.
    pub exponent: u32,
}

impl Default for VotePricing {
    fn default() -> Self {
        Self::quadratic()
    }
}

impl VotePricing {
    pub const fn quadratic() -> Self {
        Self {
            coefficient: DEFAULT_VOTE_COST_COEFFICIENT,
            exponent: DEFAULT_VOTE_COST_EXPONENT,
        }
    }

    /// A zero coefficient makes votes free and a zero exponent makes the curve
    /// flat; neither prices influence.
    pub fn validate(&self) -> Result<()> {
        require!(self.coefficient >= 1, GovernanceError::InvalidPricingCurve);
        require!(
            self.exponent >= 1 && self.exponent <= MAX_VOTE_COST_EXPONENT,
            GovernanceError::InvalidPricingCurve
        );
        Ok(())
    }

    /// `f(votes)` without narrowing.
    pub fn cumulative_cost_wide(&self, votes: u64) -> Result<U256> {
        let powered = checked_pow(U256::from(votes), self.exponent)
            .ok_or(GovernanceError::Overflow)?;

        powered
            .checked_mul(U256::from(self.coefficient))
            .ok_or_else(|| GovernanceError::Overflow.into())
    }

    /// Total tokens required to hold `votes` of weight.
    pub fn cumulative_cost(&self, votes: u64) -> Result<u64> {
        narrow_to_u64(self.cumulative_cost_wide(votes)?)
    }

    /// Whole tokens owed to move a voter's cumulative weight from `before` to
    /// `after`.
    pub fn incremental_cost(&self, before: u64, after: u64) -> Result<u64> {
        narrow_to_u64(self.incremental_cost_wide(before, after)?)
    }

    /// Base units of a mint with `decimals` owed for the same step.
    pub fn token_cost(&self, before: u64, after: u64, decimals: u8) -> Result<u64> {
        let scale = checked_pow(U256::from(10u8), u32::from(decimals))
            .ok_or(GovernanceError::Overflow)?;
        let scaled = self
            .incremental_cost_wide(before, after)?
            .checked_mul(scale)
            .ok_or(GovernanceError::Overflow)?;

        narrow_to_u64(scaled)
    }

    fn incremental_cost_wide(&self, before: u64, after: u64) -> Result<U256> {
        require!(after >= before, GovernanceError::InvalidParameters);

        let upper = self.cumulative_cost_wide(after)?;
        let lower = self.cumulative_cost_wide(before)?;
        upper
            .checked_sub(lower)
            .ok_or_else(|| GovernanceError::Overflow.into())
    }
}

#[inline(always)]
fn checked_pow(base: U256, exponent: u32) -> Option<U256> {
    let mut result = U256::ONE;
    for _ in 0..exponent {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

#[inline(always)]
fn narrow_to_u64(value: U256) -> Result<u64> {
    if value > U256::from(u64::MAX) {
        return Err(GovernanceError::Overflow.into());
    }

    Ok(value.as_u128() as u64)
}
