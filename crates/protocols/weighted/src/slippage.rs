//! Slippage Estimation
//!
//! Converts every path's partial amount through its composed spot price,
//! sums the spot-implied counter amounts, and compares the sum with the
//! quoted trade amount.
//!
//! Exact-in:  slippage = 1 - actual_out / spot_out
//! Exact-out: slippage = 1 - spot_in / actual_in_max
//!
//! Positive slippage means the trade executes worse than spot.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use quote_core::{PathPolicy, PricingError, SwapType, TokenAddress};

use crate::math::{fixed_div, fixed_mul, normalize, one};
use crate::pair::asset_decimals;
use crate::path::path_price;
use crate::state::{Path, Pool, SlippageEstimate};

/// One path converted to its spot-implied counter amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedPath {
    /// Composed spot price of the path
    pub price: BigUint,
    /// Counter amount at spot price (18-decimal scale)
    pub spot_amount: BigUint,
    /// Asset the partial amount is denominated in
    pub amount_asset: TokenAddress,
    /// Asset the counter amount is denominated in
    pub counter_asset: TokenAddress,
    /// Decimals of the counter asset
    pub counter_decimals: u8,
}

/// Price one path and convert its partial amount at spot.
///
/// Exact-in divides the normalized amount-in by the price to get an
/// amount-out; exact-out multiplies the normalized amount-out by the price
/// to get an amount-in.
pub fn price_path(
    pools: &[Pool],
    path: &Path,
    swap_type: SwapType,
) -> Result<PricedPath, PricingError> {
    let price = path_price(pools, path)?;

    let first = path.first_leg();
    let last = path.last_leg();
    let (amount_leg, amount_asset, counter_leg, counter_asset) = match swap_type {
        SwapType::ExactIn => (first, &first.asset_in, last, &last.asset_out),
        SwapType::ExactOut => (last, &last.asset_out, first, &first.asset_in),
    };
    let amount_decimals = asset_decimals(pools, &amount_leg.pool_id, amount_asset)?;
    let counter_decimals = asset_decimals(pools, &counter_leg.pool_id, counter_asset)?;

    let amount = normalize(path.partial_amount(swap_type), amount_decimals);
    let spot_amount = match swap_type {
        SwapType::ExactIn => fixed_div(&amount, &price)?,
        SwapType::ExactOut => fixed_mul(&amount, &price),
    };

    Ok(PricedPath {
        price,
        spot_amount,
        amount_asset: amount_asset.clone(),
        counter_asset: counter_asset.clone(),
        counter_decimals,
    })
}

/// Estimate slippage, skipping paths whose pool or asset is missing.
///
/// `total_amount_in` is only read for exact-out trades and
/// `total_amount_out` only for exact-in trades; both are raw units.
pub fn estimate_slippage(
    pools: &[Pool],
    paths: &[Path],
    swap_type: SwapType,
    total_amount_in: &BigUint,
    total_amount_out: &BigUint,
) -> Result<SlippageEstimate, PricingError> {
    estimate_slippage_with_policy(
        pools,
        paths,
        swap_type,
        total_amount_in,
        total_amount_out,
        PathPolicy::SkipMissing,
    )
}

/// Estimate slippage with an explicit policy for unresolvable paths.
pub fn estimate_slippage_with_policy(
    pools: &[Pool],
    paths: &[Path],
    swap_type: SwapType,
    total_amount_in: &BigUint,
    total_amount_out: &BigUint,
    policy: PathPolicy,
) -> Result<SlippageEstimate, PricingError> {
    let mut spot_amount = BigUint::zero();
    let mut requested = BigUint::zero();
    let mut covered = BigUint::zero();
    // (amount asset, counter asset, counter decimals) of the first priced path
    let mut endpoints: Option<(TokenAddress, TokenAddress, u8)> = None;
    let mut skipped_paths = Vec::new();

    for (index, path) in paths.iter().enumerate() {
        let partial = path.partial_amount(swap_type);
        requested += partial;

        match price_path(pools, path, swap_type) {
            Ok(priced) => {
                match &endpoints {
                    None => {
                        endpoints = Some((
                            priced.amount_asset.clone(),
                            priced.counter_asset.clone(),
                            priced.counter_decimals,
                        ));
                    }
                    Some((amount_asset, counter_asset, _))
                        if amount_asset != &priced.amount_asset
                            || counter_asset != &priced.counter_asset =>
                    {
                        return Err(PricingError::InvalidPath {
                            reason: format!(
                                "path {} trades {} -> {}, expected {} -> {}",
                                index,
                                priced.amount_asset,
                                priced.counter_asset,
                                amount_asset,
                                counter_asset
                            ),
                        });
                    }
                    Some(_) => {}
                }
                spot_amount += &priced.spot_amount;
                covered += partial;
            }
            Err(e) if e.is_missing_pair() && policy == PathPolicy::SkipMissing => {
                tracing::warn!("Skipping path {} in slippage estimate: {}", index, e);
                skipped_paths.push(index);
            }
            Err(e) => return Err(e),
        }
    }

    // Nothing priced: the spot aggregate is empty
    let Some((_, _, counter_decimals)) = endpoints else {
        return Err(PricingError::DivisionByZero);
    };

    let ratio = match swap_type {
        SwapType::ExactIn => {
            let actual_out = normalize(total_amount_out, counter_decimals);
            fixed_div(&actual_out, &spot_amount)?
        }
        SwapType::ExactOut => {
            let actual_in = normalize(total_amount_in, counter_decimals);
            fixed_div(&spot_amount, &actual_in)?
        }
    };
    let slippage = BigInt::from(one()) - BigInt::from(ratio);

    let coverage = if requested.is_zero() {
        one()
    } else {
        fixed_div(&covered, &requested)?
    };

    tracing::debug!(
        "Slippage estimate ({}): {} over {} paths, spot amount {}, coverage {}, {} skipped",
        swap_type,
        slippage,
        paths.len(),
        spot_amount,
        coverage,
        skipped_paths.len()
    );

    Ok(SlippageEstimate {
        slippage,
        spot_amount,
        coverage,
        skipped_paths,
    })
}
