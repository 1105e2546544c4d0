use cosmwasm_std::Addr;
use cw_storage_plus::Map;

/// Intermediary address to the identity it acts for
pub const IDENTITIES: Map<&Addr, Addr> = Map::new("identities");
