use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::PoolState;

#[cw_serde]
pub struct InstantiateMsg {}

// Superset of `mars_types::pool::ExecuteMsg`, the shared variants must stay wire compatible
#[cw_serde]
pub enum ExecuteMsg {
    /// Create a pool using `hook` as its gauge. `denom0` must sort before `denom1`.
    CreatePool {
        denom0: String,
        denom1: String,
        dynamic_fee: bool,
        /// Fee applied when the hook does not override it
        static_fee: u32,
        hook: String,
    },

    /// Add liquidity units to a pool. The hook runs before the change is applied.
    AddLiquidity {
        pool_id: u64,
        amount: Uint128,
    },

    /// Remove liquidity units from a pool. The hook runs before the change is applied.
    RemoveLiquidity {
        pool_id: u64,
        amount: Uint128,
    },

    /// Swap the sent funds, charging the fee resolved by the hook
    Swap {
        pool_id: u64,
    },

    Donate {
        pool_id: u64,
        amount0: Uint128,
        amount1: Uint128,
    },

    Settle {},

    /// Only callable by the contract itself
    Callback(CallbackMsg),
}

#[cw_serde]
pub enum CallbackMsg {
    ApplyLiquidityChange {
        pool_id: u64,
        amount: Uint128,
        add: bool,
    },
}

// Superset of `mars_types::pool::QueryMsg`
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Uint128)]
    Liquidity {
        pool_id: u64,
    },

    #[returns(PoolState)]
    Pool {
        pool_id: u64,
    },

    /// Donations recorded but not yet reconciled against the contract balance, per denom
    #[returns(Vec<cosmwasm_std::Coin>)]
    Outstanding {},
}
