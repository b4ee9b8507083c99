//! Weighted Pool Pricing
//!
//! Spot price and slippage estimation for trades routed through
//! Balancer-style weighted pools. Fixed-point results match the pool
//! contracts' rounding so the estimate shown before signing agrees with
//! on-chain math.

pub mod calculator;
pub mod limits;
pub mod math;
pub mod pair;
pub mod path;
pub mod quote;
pub mod slippage;
pub mod snapshot;
pub mod state;

// Re-exports
pub use calculator::{fee_scale, spot_price, spot_price_without_fee};
pub use limits::{limit_amount, max_amount_in, min_amount_out};
pub use math::{denormalize, fixed_div, fixed_mul, from_bps, normalize, one};
pub use pair::{asset_decimals, find_pool, resolve_pair};
pub use path::{check_continuity, leg_prices, path_price};
pub use quote::{quote_with_config, TradeQuote};
pub use slippage::{estimate_slippage, estimate_slippage_with_policy, price_path, PricedPath};
pub use snapshot::{
    parse_paths, parse_pools, path_from_snapshot, PoolSnapshot, SwapSnapshot, TokenSnapshot,
};
pub use state::{Path, Pool, PoolPair, PoolToken, SlippageEstimate, SwapLeg};
