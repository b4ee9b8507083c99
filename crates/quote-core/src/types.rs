//! Core type definitions for weighted-pool quoting

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Error, Result};

/// Pool identifier (as reported by the pool-data source)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(pub String);

impl PoolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token contract address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAddress(pub String);

impl TokenAddress {
    /// Wrap an address without validation, lower-cased to match [`parse`].
    ///
    /// [`parse`]: TokenAddress::parse
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into().to_lowercase())
    }

    /// Parse a `0x`-prefixed, 20-byte hex address.
    ///
    /// The stored form is lower-cased so that checksummed and plain
    /// spellings of the same address compare equal.
    pub fn parse(addr: &str) -> Result<Self> {
        let invalid = || Error::InvalidAddress {
            address: addr.to_string(),
        };

        let digits = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .ok_or_else(invalid)?;
        let bytes = hex::decode(digits).map_err(|_| invalid())?;
        if bytes.len() != ADDRESS_BYTES {
            return Err(invalid());
        }

        Ok(Self(format!("0x{}", hex::encode(bytes))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of a token address in bytes
pub const ADDRESS_BYTES: usize = 20;

/// Which side of the trade is fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapType {
    /// Input amount is fixed, output is solved for
    #[serde(rename = "swapExactIn")]
    ExactIn,
    /// Output amount is fixed, input is solved for
    #[serde(rename = "swapExactOut")]
    ExactOut,
}

impl SwapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactIn => "swapExactIn",
            Self::ExactOut => "swapExactOut",
        }
    }

    pub fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn)
    }
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Constants
pub mod constants {
    /// Decimal places of the fixed-point representation (1.0 = 10^18)
    pub const WAD_DECIMALS: u32 = 18;

    /// Basis points in 100%
    pub const BPS_PER_UNIT: u32 = 10_000;

    /// Maximum number of legs in a single path
    pub const MAX_HOPS: usize = 2;
}
