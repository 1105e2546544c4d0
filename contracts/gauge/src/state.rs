use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;
use mars_types::{
    gauge::{Config, FeeTiers, Keeper},
    pool::PoolKey,
};
use mars_utils::permissions::Permissions;

/// The owner of the contract
pub const OWNER: Owner = Owner::new("owner");

/// The configuration of the contract
pub const CONFIG: Item<Config> = Item::new("config");

/// Capability table. The key is (capability, address).
pub const PERMISSIONS: Permissions = Permissions::new("permissions");

pub const FEES: Item<FeeTiers> = Item::new("fees");

/// Current keeper. Absent while the slot is vacant.
pub const KEEPER: Item<Keeper> = Item::new("keeper");

/// Identities that always swap at the internal fee
pub const INTERNAL_ADDRESSES: Map<&Addr, Empty> = Map::new("internal_addresses");

/// Distribution in flight between the accrue reply and the community issuance reply
pub const PENDING_DISTRIBUTION: Item<PendingDistribution> = Item::new("pending_distribution");

/// The default limit for pagination over internal addresses
pub const DEFAULT_LIMIT: u32 = 10;

/// The maximum limit for pagination over internal addresses
pub const MAX_LIMIT: u32 = 30;

#[cw_serde]
pub struct PendingDistribution {
    pub pool: PoolKey,
    pub bucket: String,
    /// Amount issued to the pool manager that still has to be donated
    pub community_share: Uint128,
}
