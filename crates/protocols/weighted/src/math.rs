//! Fixed-Point Math
//!
//! 18-decimal fixed-point arithmetic matching the pool contracts' `bmul` and
//! `bdiv`: both round half up. All intermediates are arbitrary precision so
//! balance-sized operands (10^30 and beyond) never overflow.

use num_bigint::BigUint;
use num_traits::Zero;
use quote_core::constants::{BPS_PER_UNIT, WAD_DECIMALS};
use quote_core::PricingError;

/// 1.0 in fixed point (10^18)
pub fn one() -> BigUint {
    pow10(WAD_DECIMALS)
}

fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Fixed-point multiply: `floor((a * b + ONE / 2) / ONE)`
pub fn fixed_mul(a: &BigUint, b: &BigUint) -> BigUint {
    let one = one();
    (a * b + &one / 2u32) / &one
}

/// Fixed-point divide: `floor((a * ONE + b / 2) / b)`
pub fn fixed_div(a: &BigUint, b: &BigUint) -> Result<BigUint, PricingError> {
    if b.is_zero() {
        return Err(PricingError::DivisionByZero);
    }
    Ok((a * one() + b / 2u32) / b)
}

/// Rescale a raw amount with `decimals` places to 18-decimal fixed point.
///
/// Tokens with more than 18 decimals lose their extra precision (floor).
pub fn normalize(raw: &BigUint, decimals: u8) -> BigUint {
    let decimals = u32::from(decimals);
    if decimals <= WAD_DECIMALS {
        raw * pow10(WAD_DECIMALS - decimals)
    } else {
        raw / pow10(decimals - WAD_DECIMALS)
    }
}

/// Inverse of [`normalize`]: back to the token's native decimals (floor).
pub fn denormalize(wad: &BigUint, decimals: u8) -> BigUint {
    let decimals = u32::from(decimals);
    if decimals <= WAD_DECIMALS {
        wad / pow10(WAD_DECIMALS - decimals)
    } else {
        wad * pow10(decimals - WAD_DECIMALS)
    }
}

/// Basis points as a fixed-point fraction (50 bps -> 0.005e18)
pub fn from_bps(bps: u32) -> BigUint {
    one() * bps / BPS_PER_UNIT
}
