use cosmwasm_schema::{cw_serde, QueryResponses};

/// Interface of the listing registry deciding which paired denoms may receive stake
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(bool)]
    IsEligible {
        denom: String,
    },
}
