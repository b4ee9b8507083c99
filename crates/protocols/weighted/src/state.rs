//! Weighted Pool State Types
//!
//! Validated pool snapshots, swap paths, and estimate results.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};
use quote_core::constants::MAX_HOPS;
use quote_core::{PoolId, PricingError, SwapType, TokenAddress};

use crate::math::one;

/// One token held by a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolToken {
    pub address: TokenAddress,
    /// Raw on-chain balance in the token's native decimals
    pub balance: BigUint,
    /// Denormalized weight (fixed point)
    pub denorm_weight: BigUint,
    pub decimals: u8,
}

/// Weighted pool snapshot.
///
/// Fields are private so that every `Pool` has passed [`Pool::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    id: PoolId,
    swap_fee: BigUint,
    tokens: Vec<PoolToken>,
}

impl Pool {
    /// Build a pool, rejecting empty token lists, fees of 1.0 or more and
    /// zero weights.
    pub fn new(
        id: PoolId,
        swap_fee: BigUint,
        tokens: Vec<PoolToken>,
    ) -> Result<Self, PricingError> {
        if tokens.is_empty() {
            return Err(PricingError::InvalidPool {
                pool_id: id.to_string(),
                reason: "pool has no tokens".to_string(),
            });
        }
        if swap_fee >= one() {
            return Err(PricingError::InvalidFee {
                fee: swap_fee.to_string(),
            });
        }
        if let Some(token) = tokens.iter().find(|t| t.denorm_weight.is_zero()) {
            return Err(PricingError::InvalidWeight {
                pool_id: id.to_string(),
                asset: token.address.to_string(),
            });
        }
        Ok(Self {
            id,
            swap_fee,
            tokens,
        })
    }

    pub fn id(&self) -> &PoolId {
        &self.id
    }

    pub fn swap_fee(&self) -> &BigUint {
        &self.swap_fee
    }

    pub fn tokens(&self) -> &[PoolToken] {
        &self.tokens
    }

    /// Look up a token by address
    pub fn token(&self, address: &TokenAddress) -> Option<&PoolToken> {
        self.tokens.iter().find(|t| &t.address == address)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weighted Pool {} | fee: {} | tokens: {}",
            self.id,
            self.swap_fee,
            self.tokens.len()
        )
    }
}

/// The two sides of a pool relevant to one swap direction.
///
/// Balances are always at 18-decimal scale, whatever the tokens' native
/// decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolPair {
    pub pool_id: PoolId,
    pub asset_in: TokenAddress,
    pub asset_out: TokenAddress,
    pub swap_fee: BigUint,
    pub balance_in: BigUint,
    pub balance_out: BigUint,
    pub weight_in: BigUint,
    pub weight_out: BigUint,
}

/// One hop of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapLeg {
    pub pool_id: PoolId,
    pub asset_in: TokenAddress,
    pub asset_out: TokenAddress,
    /// Partial trade amount routed through this path (raw units)
    pub swap_amount: BigUint,
}

/// An ordered sequence of legs sharing one partial trade amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    legs: Vec<SwapLeg>,
}

impl Path {
    /// Build a path of 1 to `MAX_HOPS` legs.
    ///
    /// Leg chaining is checked when the path is priced, since that is
    /// where a broken path has to be reported.
    pub fn new(legs: Vec<SwapLeg>) -> Result<Self, PricingError> {
        if legs.is_empty() {
            return Err(PricingError::InvalidPath {
                reason: "path has no legs".to_string(),
            });
        }
        if legs.len() > MAX_HOPS {
            return Err(PricingError::InvalidPath {
                reason: format!("{} legs exceeds maximum of {}", legs.len(), MAX_HOPS),
            });
        }
        Ok(Self { legs })
    }

    pub fn legs(&self) -> &[SwapLeg] {
        &self.legs
    }

    pub fn first_leg(&self) -> &SwapLeg {
        &self.legs[0]
    }

    pub fn last_leg(&self) -> &SwapLeg {
        &self.legs[self.legs.len() - 1]
    }

    /// The leg whose amount is the path's fixed partial amount: the first
    /// leg for exact-in, the last (or only) leg for exact-out.
    pub fn amount_leg(&self, swap_type: SwapType) -> &SwapLeg {
        match swap_type {
            SwapType::ExactIn => self.first_leg(),
            SwapType::ExactOut => self.last_leg(),
        }
    }

    /// The path's partial trade amount (raw units)
    pub fn partial_amount(&self, swap_type: SwapType) -> &BigUint {
        &self.amount_leg(swap_type).swap_amount
    }
}

/// Slippage estimate for a multi-path trade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlippageEstimate {
    /// Signed fixed-point fraction; positive means worse than spot
    pub slippage: BigInt,
    /// Aggregate spot-implied counter amount (18-decimal scale)
    pub spot_amount: BigUint,
    /// Share of the summed partial amounts carried by priced paths
    pub coverage: BigUint,
    /// Indexes of paths dropped because of a missing pool or asset
    pub skipped_paths: Vec<usize>,
}

impl SlippageEstimate {
    /// Slippage as a percentage for display (0.3% -> 0.3)
    pub fn percent(&self) -> f64 {
        self.slippage.to_f64().unwrap_or(0.0) / 1e16
    }

    /// Whether every path was priced
    pub fn is_complete(&self) -> bool {
        self.skipped_paths.is_empty()
    }
}

impl fmt::Display for SlippageEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}%", self.percent())?;
        if !self.is_complete() {
            write!(f, " ({} paths skipped)", self.skipped_paths.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(address: &str, weight: u64) -> PoolToken {
        PoolToken {
            address: TokenAddress::new(address),
            balance: BigUint::from(100u32) * one(),
            denorm_weight: BigUint::from(weight) * one(),
            decimals: 18,
        }
    }

    fn make_leg(pool: &str, token_in: &str, token_out: &str, amount: u64) -> SwapLeg {
        SwapLeg {
            pool_id: PoolId::new(pool),
            asset_in: TokenAddress::new(token_in),
            asset_out: TokenAddress::new(token_out),
            swap_amount: BigUint::from(amount),
        }
    }

    #[test]
    fn test_domain_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pool>();
        assert_send_sync::<Path>();
        assert_send_sync::<SlippageEstimate>();
    }

    #[test]
    fn test_pool_rejects_full_fee() {
        let err = Pool::new(
            PoolId::new("pool"),
            one(),
            vec![make_token("a", 1), make_token("b", 1)],
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "invalid_fee");
    }

    #[test]
    fn test_pool_rejects_no_tokens() {
        let err = Pool::new(PoolId::new("pool"), BigUint::zero(), vec![]).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidPool {
                pool_id: "pool".into(),
                reason: "pool has no tokens".into(),
            }
        );
        assert_eq!(err.error_code(), "invalid_pool");
    }

    #[test]
    fn test_pool_rejects_zero_weight() {
        let err = Pool::new(
            PoolId::new("pool"),
            BigUint::zero(),
            vec![make_token("a", 1), make_token("b", 0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidWeight {
                pool_id: "pool".into(),
                asset: "b".into(),
            }
        );
    }

    #[test]
    fn test_pool_token_lookup() {
        let pool = Pool::new(
            PoolId::new("pool"),
            BigUint::zero(),
            vec![make_token("a", 1), make_token("b", 4)],
        )
        .unwrap();
        let b = pool.token(&TokenAddress::new("b")).unwrap();
        assert_eq!(b.denorm_weight, BigUint::from(4u32) * one());
        assert!(pool.token(&TokenAddress::new("c")).is_none());
    }

    #[test]
    fn test_path_length_bounds() {
        assert!(Path::new(vec![]).is_err());
        let too_long = vec![
            make_leg("p1", "a", "b", 1),
            make_leg("p2", "b", "c", 1),
            make_leg("p3", "c", "d", 1),
        ];
        assert_eq!(
            Path::new(too_long).unwrap_err().error_code(),
            "invalid_path"
        );
    }

    #[test]
    fn test_partial_amount_by_swap_type() {
        let path = Path::new(vec![
            make_leg("p1", "a", "b", 10),
            make_leg("p2", "b", "c", 20),
        ])
        .unwrap();
        assert_eq!(path.partial_amount(SwapType::ExactIn), &BigUint::from(10u32));
        assert_eq!(path.partial_amount(SwapType::ExactOut), &BigUint::from(20u32));

        let single = Path::new(vec![make_leg("p1", "a", "b", 7)]).unwrap();
        assert_eq!(single.partial_amount(SwapType::ExactOut), &BigUint::from(7u32));
    }

    #[test]
    fn test_estimate_percent_display() {
        let estimate = SlippageEstimate {
            slippage: BigInt::from(3_000_000_000_000_000i64),
            spot_amount: one(),
            coverage: one(),
            skipped_paths: vec![],
        };
        assert!((estimate.percent() - 0.3).abs() < 1e-12);
        assert_eq!(estimate.to_string(), "0.3000%");

        let partial = SlippageEstimate {
            skipped_paths: vec![1],
            ..estimate
        };
        assert_eq!(partial.to_string(), "0.3000% (1 paths skipped)");
    }
}
