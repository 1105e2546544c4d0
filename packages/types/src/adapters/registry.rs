use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

use crate::registry::QueryMsg;

#[cw_serde]
pub struct Registry(Addr);

impl Registry {
    pub fn new(address: Addr) -> Self {
        Self(address)
    }

    pub fn address(&self) -> &Addr {
        &self.0
    }

    pub fn query_is_eligible(&self, querier: &QuerierWrapper, denom: &str) -> StdResult<bool> {
        querier.query_wasm_smart(
            self.0.to_string(),
            &QueryMsg::IsEligible {
                denom: denom.to_string(),
            },
        )
    }
}
