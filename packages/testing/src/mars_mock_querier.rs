use cosmwasm_std::{
    from_json, testing::MockQuerier, Addr, Empty, Querier, QuerierResult, QueryRequest,
    SystemError, SystemResult, Uint128, WasmQuery,
};
use mars_types::{identity, pool, registry};

use crate::{
    identity_querier::IdentityQuerier, pool_querier::PoolQuerier,
    registry_querier::RegistryQuerier,
};

pub struct MarsMockQuerier {
    base: MockQuerier<Empty>,
    registry_querier: RegistryQuerier,
    pool_querier: PoolQuerier,
    identity_querier: IdentityQuerier,
}

impl Querier for MarsMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {e}"),
                    request: bin_request.into(),
                })
            }
        };

        self.handle_query(&request)
    }
}

impl MarsMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        MarsMockQuerier {
            base,
            registry_querier: RegistryQuerier::default(),
            pool_querier: PoolQuerier::default(),
            identity_querier: IdentityQuerier::default(),
        }
    }

    pub fn set_eligible(&mut self, denom: &str, eligible: bool) {
        if eligible {
            self.registry_querier.eligible_denoms.insert(denom.to_string());
        } else {
            self.registry_querier.eligible_denoms.remove(denom);
        }
    }

    pub fn set_pool_liquidity(&mut self, pool_id: u64, liquidity: Uint128) {
        self.pool_querier.liquidity.insert(pool_id, liquidity);
    }

    pub fn set_identity(&mut self, caller: &str, identity: &str) {
        self.identity_querier.identities.insert(caller.to_string(), Addr::unchecked(identity));
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr,
                msg,
            }) => {
                let contract_addr = Addr::unchecked(contract_addr);

                // Registry Queries
                if let Ok(registry_query) = from_json::<registry::QueryMsg>(msg) {
                    return self.registry_querier.handle_query(&contract_addr, registry_query);
                }

                // Pool Queries
                if let Ok(pool_query) = from_json::<pool::QueryMsg>(msg) {
                    return self.pool_querier.handle_query(&contract_addr, pool_query);
                }

                // Identity Queries
                if let Ok(identity_query) = from_json::<identity::QueryMsg>(msg) {
                    return self.identity_querier.handle_query(&contract_addr, identity_query);
                }

                panic!("[mock]: Unsupported wasm query: {msg:?}");
            }

            _ => self.base.handle_query(request),
        }
    }
}
