use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

use crate::pool::{ExecuteMsg, QueryMsg};

/// The pool manager holding every pool using the gauge
#[cw_serde]
pub struct PoolManager(Addr);

impl PoolManager {
    pub fn new(address: Addr) -> Self {
        Self(address)
    }

    pub fn address(&self) -> &Addr {
        &self.0
    }

    pub fn query_liquidity(&self, querier: &QuerierWrapper, pool_id: u64) -> StdResult<Uint128> {
        querier.query_wasm_smart(
            self.0.to_string(),
            &QueryMsg::Liquidity {
                pool_id,
            },
        )
    }

    pub fn donate_msg(
        &self,
        pool_id: u64,
        amount0: Uint128,
        amount1: Uint128,
    ) -> StdResult<CosmosMsg> {
        self.execute_msg(&ExecuteMsg::Donate {
            pool_id,
            amount0,
            amount1,
        })
    }

    pub fn settle_msg(&self) -> StdResult<CosmosMsg> {
        self.execute_msg(&ExecuteMsg::Settle {})
    }

    fn execute_msg(&self, msg: &ExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        }))
    }
}
