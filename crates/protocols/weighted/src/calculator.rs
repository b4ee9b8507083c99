//! Weighted Pool Calculator
//!
//! Spot price using the constant weighted product formula:
//!
//! spot = (balance_in / weight_in) / (balance_out / weight_out) * 1 / (1 - fee)

use num_bigint::BigUint;
use num_traits::Zero;
use quote_core::PricingError;

use crate::math::{fixed_div, fixed_mul, one};
use crate::state::PoolPair;

/// Marginal price of `asset_out` in units of `asset_in`, before fees.
pub fn spot_price_without_fee(pair: &PoolPair) -> Result<BigUint, PricingError> {
    if pair.weight_in.is_zero() {
        return Err(PricingError::InvalidWeight {
            pool_id: pair.pool_id.to_string(),
            asset: pair.asset_in.to_string(),
        });
    }
    if pair.weight_out.is_zero() {
        return Err(PricingError::InvalidWeight {
            pool_id: pair.pool_id.to_string(),
            asset: pair.asset_out.to_string(),
        });
    }

    let numer = fixed_div(&pair.balance_in, &pair.weight_in)?;
    let denom = fixed_div(&pair.balance_out, &pair.weight_out)?;
    fixed_div(&numer, &denom)
}

/// Fee markup `1 / (1 - fee)`. Fails for fees of 1.0 or more.
pub fn fee_scale(swap_fee: &BigUint) -> Result<BigUint, PricingError> {
    let one = one();
    if swap_fee >= &one {
        return Err(PricingError::InvalidFee {
            fee: swap_fee.to_string(),
        });
    }
    fixed_div(&one, &(&one - swap_fee))
}

/// Marginal price a trader pays at the current reserves, fee included.
pub fn spot_price(pair: &PoolPair) -> Result<BigUint, PricingError> {
    let ratio = spot_price_without_fee(pair)?;
    let scale = fee_scale(&pair.swap_fee)?;
    Ok(fixed_mul(&ratio, &scale))
}
