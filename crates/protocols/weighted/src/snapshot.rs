//! Snapshot Intake
//!
//! JSON pool and swap records as delivered by the pool-data and routing
//! collaborators. Integer amounts travel as decimal strings; everything is
//! validated into [`Pool`] and [`Path`] before it reaches the pricing code.

use num_bigint::BigUint;
use quote_core::{Error, PoolId, Result, TokenAddress};
use serde::{Deserialize, Serialize};

use crate::state::{Path, Pool, PoolToken, SwapLeg};

/// Token entry of a pool record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSnapshot {
    pub address: String,
    /// Raw balance, native decimals
    pub balance: String,
    pub denorm_weight: String,
    pub decimals: u8,
}

/// Pool record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    pub id: String,
    /// Fixed-point fraction (0.3% = "3000000000000000")
    pub swap_fee: String,
    pub tokens: Vec<TokenSnapshot>,
}

/// One leg of a routed swap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSnapshot {
    pub pool: String,
    pub token_in: String,
    pub token_out: String,
    pub swap_amount: String,
}

fn parse_uint(field: &str, value: &str) -> Result<BigUint> {
    value
        .parse()
        .map_err(|_| Error::Serialization(format!("{}: not an unsigned integer: {:?}", field, value)))
}

impl TryFrom<&TokenSnapshot> for PoolToken {
    type Error = Error;

    fn try_from(snapshot: &TokenSnapshot) -> Result<Self> {
        Ok(PoolToken {
            address: TokenAddress::parse(&snapshot.address)?,
            balance: parse_uint("balance", &snapshot.balance)?,
            denorm_weight: parse_uint("denormWeight", &snapshot.denorm_weight)?,
            decimals: snapshot.decimals,
        })
    }
}

impl TryFrom<&PoolSnapshot> for Pool {
    type Error = Error;

    fn try_from(snapshot: &PoolSnapshot) -> Result<Self> {
        let tokens = snapshot
            .tokens
            .iter()
            .map(PoolToken::try_from)
            .collect::<Result<Vec<_>>>()?;
        let swap_fee = parse_uint("swapFee", &snapshot.swap_fee)?;
        Ok(Pool::new(PoolId::new(snapshot.id.clone()), swap_fee, tokens)?)
    }
}

impl TryFrom<&SwapSnapshot> for SwapLeg {
    type Error = Error;

    fn try_from(snapshot: &SwapSnapshot) -> Result<Self> {
        Ok(SwapLeg {
            pool_id: PoolId::new(snapshot.pool.clone()),
            asset_in: TokenAddress::parse(&snapshot.token_in)?,
            asset_out: TokenAddress::parse(&snapshot.token_out)?,
            swap_amount: parse_uint("swapAmount", &snapshot.swap_amount)?,
        })
    }
}

/// Build a path from its leg records
pub fn path_from_snapshot(legs: &[SwapSnapshot]) -> Result<Path> {
    let legs = legs
        .iter()
        .map(SwapLeg::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(Path::new(legs)?)
}

/// Parse a JSON array of pool records
pub fn parse_pools(json: &str) -> Result<Vec<Pool>> {
    let snapshots: Vec<PoolSnapshot> =
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
    snapshots.iter().map(Pool::try_from).collect()
}

/// Parse a JSON array of paths, each an array of leg records
pub fn parse_paths(json: &str) -> Result<Vec<Path>> {
    let snapshots: Vec<Vec<SwapSnapshot>> =
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
    snapshots.iter().map(|legs| path_from_snapshot(legs)).collect()
}
