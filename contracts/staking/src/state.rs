use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;
use mars_types::staking::{Bucket, Config, RewardIndex};
use mars_utils::{indexed_set::IndexedSet, permissions::Permissions};

/// The owner of the contract
pub const OWNER: Owner = Owner::new("owner");

/// The configuration of the contract
pub const CONFIG: Item<Config> = Item::new("config");

/// Capability table. The key is (capability, address).
pub const PERMISSIONS: Permissions = Permissions::new("permissions");

/// Reward units minted per second
pub const MINT_RATE: Item<Uint128> = Item::new("mint_rate");

/// Global reward index and the time it was last brought up to date
pub const REWARD_INDEX: Item<RewardIndex> = Item::new("reward_index");

/// Sum of the staked amount of every bucket
pub const TOTAL_STAKED: Item<Uint128> = Item::new("total_staked");

/// Buckets keyed by paired denom
pub const BUCKETS: Map<&str, Bucket> = Map::new("buckets");

/// Amount staked by a user into a bucket. The key is (user address, denom).
pub const USER_STAKES: Map<(&Addr, &str), Uint128> = Map::new("user_stakes");

/// Denoms of the buckets each user currently has a nonzero stake in
pub const USER_BUCKETS: IndexedSet =
    IndexedSet::new("user_buckets_len", "user_buckets", "user_bucket_positions");

/// The default limit for pagination over buckets
pub const DEFAULT_LIMIT: u32 = 10;

/// The maximum limit for pagination over buckets
pub const MAX_LIMIT: u32 = 30;
