use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};

use crate::minter::ExecuteMsg;

#[cw_serde]
pub struct Minter(Addr);

impl Minter {
    pub fn new(address: Addr) -> Self {
        Self(address)
    }

    pub fn address(&self) -> &Addr {
        &self.0
    }

    pub fn issue_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&ExecuteMsg::Issue {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }))
    }

    pub fn update_issuer_msg(&self, issuer: &Addr) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&ExecuteMsg::UpdateIssuer {
                issuer: issuer.to_string(),
            })?,
            funds: vec![],
        }))
    }
}
