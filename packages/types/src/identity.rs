use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

/// Interface of the resolver unmasking routers and other intermediaries
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The party on whose behalf `caller` acts. Returns `caller` itself for direct callers.
    #[returns(ResolveCallerResponse)]
    ResolveCaller {
        caller: String,
    },
}

#[cw_serde]
pub struct ResolveCallerResponse {
    pub identity: Addr,
}
