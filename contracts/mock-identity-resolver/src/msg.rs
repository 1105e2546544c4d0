use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    // Meant to simulate routers acting on behalf of a user in tests. Not available in prod.
    SetIdentity {
        caller: String,
        identity: Option<String>,
    },
}
