//! Pool Pair Resolution
//!
//! Picks the in/out sides of a pool for one swap direction. This is the only
//! place raw balances are rescaled to 18 decimals.

use quote_core::{PoolId, PricingError, TokenAddress};

use crate::math::normalize;
use crate::state::{Pool, PoolPair, PoolToken};

/// Find a pool by id
pub fn find_pool<'a>(pools: &'a [Pool], pool_id: &PoolId) -> Result<&'a Pool, PricingError> {
    pools
        .iter()
        .find(|p| p.id() == pool_id)
        .ok_or_else(|| PricingError::PoolNotFound {
            pool_id: pool_id.to_string(),
        })
}

fn find_token<'a>(pool: &'a Pool, asset: &TokenAddress) -> Result<&'a PoolToken, PricingError> {
    pool.token(asset).ok_or_else(|| PricingError::AssetNotInPool {
        pool_id: pool.id().to_string(),
        asset: asset.to_string(),
    })
}

/// Resolve the pair record for swapping `asset_in` to `asset_out` in `pool_id`.
pub fn resolve_pair(
    pools: &[Pool],
    pool_id: &PoolId,
    asset_in: &TokenAddress,
    asset_out: &TokenAddress,
) -> Result<PoolPair, PricingError> {
    let pool = find_pool(pools, pool_id)?;
    let token_in = find_token(pool, asset_in)?;
    let token_out = find_token(pool, asset_out)?;

    Ok(PoolPair {
        pool_id: pool.id().clone(),
        asset_in: asset_in.clone(),
        asset_out: asset_out.clone(),
        swap_fee: pool.swap_fee().clone(),
        balance_in: normalize(&token_in.balance, token_in.decimals),
        balance_out: normalize(&token_out.balance, token_out.decimals),
        weight_in: token_in.denorm_weight.clone(),
        weight_out: token_out.denorm_weight.clone(),
    })
}

/// Decimals of `asset` as recorded in `pool_id`
pub fn asset_decimals(
    pools: &[Pool],
    pool_id: &PoolId,
    asset: &TokenAddress,
) -> Result<u8, PricingError> {
    let pool = find_pool(pools, pool_id)?;
    Ok(find_token(pool, asset)?.decimals)
}
