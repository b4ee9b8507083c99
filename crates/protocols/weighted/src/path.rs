//! Path Pricing
//!
//! Composes per-leg spot prices into one price for a multi-hop path.

use num_bigint::BigUint;
use quote_core::PricingError;

use crate::calculator::spot_price;
use crate::math::fixed_mul;
use crate::pair::resolve_pair;
use crate::state::{Pool, Path};

/// Check that each leg starts with the asset the previous leg ends with.
pub fn check_continuity(path: &Path) -> Result<(), PricingError> {
    for (i, window) in path.legs().windows(2).enumerate() {
        let (prev, next) = (&window[0], &window[1]);
        if next.asset_in != prev.asset_out {
            return Err(PricingError::DiscontinuousPath {
                leg: i + 1,
                expected: prev.asset_out.to_string(),
                found: next.asset_in.to_string(),
            });
        }
    }
    Ok(())
}

/// Spot price of every leg, in trade order.
pub fn leg_prices(pools: &[Pool], path: &Path) -> Result<Vec<BigUint>, PricingError> {
    check_continuity(path)?;
    path.legs()
        .iter()
        .map(|leg| {
            let pair = resolve_pair(pools, &leg.pool_id, &leg.asset_in, &leg.asset_out)?;
            spot_price(&pair)
        })
        .collect()
}

/// Price of the whole path: the product of its leg spot prices.
pub fn path_price(pools: &[Pool], path: &Path) -> Result<BigUint, PricingError> {
    let prices = leg_prices(pools, path)?;
    let mut iter = prices.into_iter();
    // Path::new guarantees at least one leg
    let first = iter.next().ok_or_else(|| PricingError::InvalidPath {
        reason: "path has no legs".to_string(),
    })?;
    Ok(iter.fold(first, |acc, price| fixed_mul(&acc, &price)))
}
