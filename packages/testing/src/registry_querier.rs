use std::collections::HashSet;

use cosmwasm_std::{to_json_binary, Addr, Binary, ContractResult, QuerierResult};
use mars_types::registry::QueryMsg;

#[derive(Default)]
pub struct RegistryQuerier {
    pub eligible_denoms: HashSet<String>,
}

impl RegistryQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        let registry = Addr::unchecked("registry");
        if *contract_addr != registry {
            panic!("[mock]: Registry request made to {contract_addr} should be {registry}");
        }

        let ret: ContractResult<Binary> = match query {
            QueryMsg::IsEligible {
                denom,
            } => to_json_binary(&self.eligible_denoms.contains(&denom)).into(),
        };

        Ok(ret).into()
    }
}
