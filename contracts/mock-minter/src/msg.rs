use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to issue. The instantiator can always reassign it.
    pub issuer: String,
    /// Denom paid out of the contract's reserve on issuance
    pub denom: String,
}
