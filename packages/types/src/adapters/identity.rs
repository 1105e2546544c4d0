use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

use crate::identity::{QueryMsg, ResolveCallerResponse};

#[cw_serde]
pub struct IdentityResolver(Addr);

impl IdentityResolver {
    pub fn new(address: Addr) -> Self {
        Self(address)
    }

    pub fn address(&self) -> &Addr {
        &self.0
    }

    /// The effective identity behind `caller`
    pub fn resolve_caller(&self, querier: &QuerierWrapper, caller: &str) -> StdResult<Addr> {
        let res: ResolveCallerResponse = querier.query_wasm_smart(
            self.0.to_string(),
            &QueryMsg::ResolveCaller {
                caller: caller.to_string(),
            },
        )?;
        Ok(res.identity)
    }
}
