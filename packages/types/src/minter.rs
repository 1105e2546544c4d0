use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Interface of the issuance authority for the reward denom
#[cw_serde]
pub enum ExecuteMsg {
    /// Create `amount` new reward units for `recipient`. Fails if the sender is not the issuer.
    Issue {
        recipient: String,
        amount: Uint128,
    },

    /// Hand the issuing authority to another address. Only callable by the current issuer.
    UpdateIssuer {
        issuer: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Addr)]
    Issuer {},
}
