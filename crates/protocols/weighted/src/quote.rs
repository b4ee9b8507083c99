//! Trade Quotes
//!
//! Runs the slippage estimate under a [`QuoteConfig`] and attaches the
//! tolerance-adjusted limit for the solved-for side of the trade.

use num_bigint::{BigInt, BigUint};
use quote_core::{PricingError, QuoteConfig, SwapType};

use crate::limits::limit_amount;
use crate::math::from_bps;
use crate::slippage::estimate_slippage_with_policy;
use crate::state::{Path, Pool, SlippageEstimate};

/// Estimate plus the limits shown before the user signs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeQuote {
    pub swap_type: SwapType,
    pub estimate: SlippageEstimate,
    /// Min amount out (exact-in) or max amount in (exact-out), raw units
    pub limit_amount: BigUint,
    /// Estimated slippage is strictly above `max_slippage_bps`
    pub exceeds_max_slippage: bool,
}

/// Quote a routed trade with the configured path policy and tolerance.
pub fn quote_with_config(
    config: &QuoteConfig,
    pools: &[Pool],
    paths: &[Path],
    swap_type: SwapType,
    total_amount_in: &BigUint,
    total_amount_out: &BigUint,
) -> Result<TradeQuote, PricingError> {
    let estimate = estimate_slippage_with_policy(
        pools,
        paths,
        swap_type,
        total_amount_in,
        total_amount_out,
        config.path_policy,
    )?;

    let solved_amount = match swap_type {
        SwapType::ExactIn => total_amount_out,
        SwapType::ExactOut => total_amount_in,
    };
    let limit = limit_amount(
        swap_type,
        solved_amount,
        &from_bps(config.slippage_tolerance_bps),
    )?;

    let exceeds_max_slippage =
        estimate.slippage > BigInt::from(from_bps(config.max_slippage_bps));
    if exceeds_max_slippage {
        tracing::warn!(
            "Estimated slippage {} exceeds configured maximum of {} bps",
            estimate,
            config.max_slippage_bps
        );
    }

    Ok(TradeQuote {
        swap_type,
        estimate,
        limit_amount: limit,
        exceeds_max_slippage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::one;
    use crate::state::{PoolToken, SwapLeg};
    use num_traits::Zero;
    use quote_core::{PathPolicy, PoolId, TokenAddress};

    fn wad(units: u64) -> BigUint {
        BigUint::from(units) * one()
    }

    fn make_pools() -> Vec<Pool> {
        let tokens = ["a", "b"]
            .iter()
            .map(|address| PoolToken {
                address: TokenAddress::new(*address),
                balance: wad(1000),
                denorm_weight: one(),
                decimals: 18,
            })
            .collect();
        vec![Pool::new(PoolId::new("P"), BigUint::zero(), tokens).unwrap()]
    }

    fn make_path(pool: &str, amount: BigUint) -> Path {
        Path::new(vec![SwapLeg {
            pool_id: PoolId::new(pool),
            asset_in: TokenAddress::new("a"),
            asset_out: TokenAddress::new("b"),
            swap_amount: amount,
        }])
        .unwrap()
    }

    #[test]
    fn test_quote_exact_in_min_output() {
        let config = QuoteConfig::default();
        let paths = vec![make_path("P", wad(100))];
        let quote = quote_with_config(
            &config,
            &make_pools(),
            &paths,
            SwapType::ExactIn,
            &wad(100),
            &wad(99),
        )
        .unwrap();

        // 1% slippage, under the 5% default maximum
        assert_eq!(quote.estimate.slippage, BigInt::from(10_000_000_000_000_000u64));
        assert!(!quote.exceeds_max_slippage);
        // 99 * 0.995
        assert_eq!(quote.limit_amount, BigUint::from(98_505u32) * one() / 1000u32);
    }

    #[test]
    fn test_quote_exact_out_max_input() {
        let config = QuoteConfig::default();
        let paths = vec![make_path("P", wad(100))];
        let quote = quote_with_config(
            &config,
            &make_pools(),
            &paths,
            SwapType::ExactOut,
            &wad(100),
            &wad(100),
        )
        .unwrap();
        assert_eq!(quote.estimate.slippage, BigInt::zero());
        assert_eq!(quote.limit_amount, BigUint::from(1005u32) * one() / 10u32);
    }

    #[test]
    fn test_quote_flags_high_slippage() {
        let config = QuoteConfig::default();
        let paths = vec![make_path("P", wad(100))];
        let quote = quote_with_config(
            &config,
            &make_pools(),
            &paths,
            SwapType::ExactIn,
            &wad(100),
            &wad(90),
        )
        .unwrap();
        assert!(quote.exceeds_max_slippage);
    }

    #[test]
    fn test_quote_max_slippage_boundary() {
        let config = QuoteConfig::default();
        let paths = vec![make_path("P", wad(100))];

        // exactly 5% is allowed
        let at_max = quote_with_config(
            &config,
            &make_pools(),
            &paths,
            SwapType::ExactIn,
            &wad(100),
            &wad(95),
        )
        .unwrap();
        assert_eq!(
            at_max.estimate.slippage,
            BigInt::from(from_bps(config.max_slippage_bps))
        );
        assert!(!at_max.exceeds_max_slippage);

        // just past the boundary is flagged
        let past_max = quote_with_config(
            &config,
            &make_pools(),
            &paths,
            SwapType::ExactIn,
            &wad(100),
            &(wad(95) - 1000u32),
        )
        .unwrap();
        assert!(past_max.exceeds_max_slippage);
    }

    #[test]
    fn test_quote_respects_strict_policy() {
        let config = QuoteConfig {
            path_policy: PathPolicy::Strict,
            ..QuoteConfig::default()
        };
        let paths = vec![make_path("P", wad(50)), make_path("GONE", wad(50))];
        let err = quote_with_config(
            &config,
            &make_pools(),
            &paths,
            SwapType::ExactIn,
            &wad(100),
            &wad(99),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "pool_not_found");

        let lenient = quote_with_config(
            &QuoteConfig::default(),
            &make_pools(),
            &paths,
            SwapType::ExactIn,
            &wad(100),
            &wad(49),
        )
        .unwrap();
        assert_eq!(lenient.estimate.skipped_paths, vec![1]);
    }
}
