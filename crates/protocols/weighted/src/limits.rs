//! Limit Amounts
//!
//! Slippage-tolerance bounds passed along with a swap: the least output an
//! exact-in trade accepts and the most input an exact-out trade spends.

use num_bigint::BigUint;
use quote_core::{PricingError, SwapType};

use crate::math::{fixed_mul, one};

fn check_tolerance(tolerance: &BigUint) -> Result<(), PricingError> {
    if tolerance >= &one() {
        return Err(PricingError::InvalidTolerance {
            tolerance: tolerance.to_string(),
        });
    }
    Ok(())
}

/// `amount_out * (1 - tolerance)`
pub fn min_amount_out(amount_out: &BigUint, tolerance: &BigUint) -> Result<BigUint, PricingError> {
    check_tolerance(tolerance)?;
    Ok(fixed_mul(amount_out, &(one() - tolerance)))
}

/// `amount_in * (1 + tolerance)`
pub fn max_amount_in(amount_in: &BigUint, tolerance: &BigUint) -> Result<BigUint, PricingError> {
    check_tolerance(tolerance)?;
    Ok(fixed_mul(amount_in, &(one() + tolerance)))
}

/// Limit for the solved-for side of the trade
pub fn limit_amount(
    swap_type: SwapType,
    amount: &BigUint,
    tolerance: &BigUint,
) -> Result<BigUint, PricingError> {
    match swap_type {
        SwapType::ExactIn => min_amount_out(amount, tolerance),
        SwapType::ExactOut => max_amount_in(amount, tolerance),
    }
}
