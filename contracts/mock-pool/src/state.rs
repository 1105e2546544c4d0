use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use mars_types::pool::PoolKey;

#[cw_serde]
pub struct PoolState {
    pub key: PoolKey,
    pub hook: Addr,
    pub static_fee: u32,
    pub liquidity: Uint128,
    pub donated0: Uint128,
    pub donated1: Uint128,
    /// Fee charged on the most recent swap, in hundredths of a basis point
    pub last_swap_fee: Option<u32>,
    pub collected_fees: Uint128,
}

pub const NEXT_POOL_ID: Item<u64> = Item::new("next_pool_id");

pub const POOLS: Map<u64, PoolState> = Map::new("pools");

/// Donated amounts waiting for `Settle`, per denom
pub const OUTSTANDING: Map<&str, Uint128> = Map::new("outstanding");

/// Balances already reconciled by `Settle`, per denom
pub const SETTLED: Map<&str, Uint128> = Map::new("settled");
