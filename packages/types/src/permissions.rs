use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

/// Grants or revokes a single capability for a single address. `C` is the capability enum of the
/// contract receiving the update.
#[cw_serde]
pub enum PermissionUpdate<C> {
    Grant {
        capability: C,
        address: String,
    },
    Revoke {
        capability: C,
        address: String,
    },
}

#[cw_serde]
pub struct PermissionsResponse<C> {
    pub capability: C,
    pub holders: Vec<Addr>,
}
