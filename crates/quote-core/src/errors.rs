//! Error types for weighted-pool quoting

use thiserror::Error;

/// Crate-level errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },
}

/// Validation failures in pool, path, and price data.
///
/// None of these are retryable: the caller has to fetch corrected pool or
/// path data before quoting again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Pool not found: {pool_id}")]
    PoolNotFound { pool_id: String },

    #[error("Asset {asset} not in pool {pool_id}")]
    AssetNotInPool { pool_id: String, asset: String },

    #[error("Zero weight for asset {asset} in pool {pool_id}")]
    InvalidWeight { pool_id: String, asset: String },

    #[error("Swap fee {fee} out of range [0, 1e18)")]
    InvalidFee { fee: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Path broken at leg {leg}: expected asset {expected}, found {found}")]
    DiscontinuousPath {
        leg: usize,
        expected: String,
        found: String,
    },

    #[error("Invalid pool {pool_id}: {reason}")]
    InvalidPool { pool_id: String, reason: String },

    #[error("Invalid path: {reason}")]
    InvalidPath { reason: String },

    #[error("Slippage tolerance {tolerance} out of range [0, 1e18)")]
    InvalidTolerance { tolerance: String },
}

/// Result type alias for quoting operations
pub type Result<T> = std::result::Result<T, Error>;

impl PricingError {
    /// Get a stable, machine-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PoolNotFound { .. } => "pool_not_found",
            Self::AssetNotInPool { .. } => "asset_not_in_pool",
            Self::InvalidWeight { .. } => "invalid_weight",
            Self::InvalidFee { .. } => "invalid_fee",
            Self::DivisionByZero => "division_by_zero",
            Self::DiscontinuousPath { .. } => "discontinuous_path",
            Self::InvalidPool { .. } => "invalid_pool",
            Self::InvalidPath { .. } => "invalid_path",
            Self::InvalidTolerance { .. } => "invalid_tolerance",
        }
    }

    /// Whether the error means a path references a pool or asset that is
    /// absent from the snapshot.
    pub fn is_missing_pair(&self) -> bool {
        matches!(
            self,
            Self::PoolNotFound { .. } | Self::AssetNotInPool { .. }
        )
    }
}
