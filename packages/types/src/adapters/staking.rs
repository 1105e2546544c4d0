use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, WasmMsg};

use crate::staking::ExecuteMsg;

#[cw_serde]
pub struct Staking(Addr);

impl Staking {
    pub fn new(address: Addr) -> Self {
        Self(address)
    }

    pub fn address(&self) -> &Addr {
        &self.0
    }

    pub fn accrue_reward_msg(&self, denom: &str) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&ExecuteMsg::AccrueReward {
                denom: denom.to_string(),
            })?,
            funds: vec![],
        }))
    }
}
