use std::collections::HashMap;

use cosmwasm_std::{to_json_binary, Addr, Binary, ContractResult, QuerierResult};
use mars_types::identity::{QueryMsg, ResolveCallerResponse};

#[derive(Default)]
pub struct IdentityQuerier {
    /// Intermediary to the identity it acts for. Unknown callers resolve to themselves.
    pub identities: HashMap<String, Addr>,
}

impl IdentityQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        let resolver = Addr::unchecked("identity_resolver");
        if *contract_addr != resolver {
            panic!("[mock]: Identity request made to {contract_addr} should be {resolver}");
        }

        let ret: ContractResult<Binary> = match query {
            QueryMsg::ResolveCaller {
                caller,
            } => {
                let identity = self
                    .identities
                    .get(&caller)
                    .cloned()
                    .unwrap_or_else(|| Addr::unchecked(caller));
                to_json_binary(&ResolveCallerResponse {
                    identity,
                })
                .into()
            }
        };

        Ok(ret).into()
    }
}
