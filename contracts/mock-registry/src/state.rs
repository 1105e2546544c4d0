use cosmwasm_std::Empty;
use cw_storage_plus::Map;

pub const ELIGIBLE_DENOMS: Map<&str, Empty> = Map::new("eligible_denoms");
