use std::collections::HashMap;

use cosmwasm_std::{to_json_binary, Addr, Binary, ContractResult, QuerierResult, Uint128};
use mars_types::pool::QueryMsg;

#[derive(Default)]
pub struct PoolQuerier {
    pub liquidity: HashMap<u64, Uint128>,
}

impl PoolQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        let pool_manager = Addr::unchecked("pool_manager");
        if *contract_addr != pool_manager {
            panic!("[mock]: Pool request made to {contract_addr} should be {pool_manager}");
        }

        let ret: ContractResult<Binary> = match query {
            QueryMsg::Liquidity {
                pool_id,
            } => match self.liquidity.get(&pool_id) {
                Some(liquidity) => to_json_binary(liquidity).into(),
                None => Err(format!("[mock]: could not find pool {pool_id}")).into(),
            },
        };

        Ok(ret).into()
    }
}
