use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    pub eligible_denoms: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Meant to simulate governance decisions in tests. Not available in prod.
    SetEligible {
        denom: String,
        eligible: bool,
    },
}
