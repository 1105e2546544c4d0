use std::fmt;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Decimal256, Uint128};
use mars_owner::OwnerUpdate;
use strum::EnumIter;

use crate::permissions::{PermissionUpdate, PermissionsResponse};

/// Actions on the staking contract that are gated by the permission table rather than by
/// ownership.
#[cw_serde]
#[derive(Copy, Eq, Hash, EnumIter)]
pub enum Capability {
    /// Pull the owed reward of a bucket. Held by the gauge.
    AccrueReward,
    /// Change how many reward units are minted per second
    SetMintRate,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::AccrueReward => "accrue_reward",
            Capability::SetMintRate => "set_mint_rate",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cw_serde]
pub struct Config {
    /// Denom that is staked into buckets and minted as reward
    pub staking_denom: String,
    /// Contract deciding which paired denoms may receive stake
    pub registry: Addr,
    /// Contract currently allowed to accrue rewards
    pub gauge: Option<Addr>,
}

/// Global reward-per-staked-unit accumulator
#[cw_serde]
pub struct RewardIndex {
    /// Cumulative reward per staked unit since inception
    pub index: Decimal256,
    /// Last time (in seconds) the index was brought up to date
    pub last_updated: u64,
}

#[cw_serde]
#[derive(Default)]
pub struct Bucket {
    /// Sum of all user stakes in this bucket
    pub staked_amount: Uint128,
    /// Global index at the time this bucket last accrued or changed size
    pub last_reward_index: Decimal256,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner
    pub owner: String,
    /// Denom that is staked and minted as reward
    pub staking_denom: String,
    /// Reward units minted per second
    pub mint_rate: Uint128,
    /// Eligibility registry
    pub registry: String,
    /// Gauge allowed to accrue rewards, can be set later
    pub gauge: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Stake the sent staking denom into the bucket of `denom`
    Stake {
        denom: String,
    },

    /// Withdraw `amount` of stake from the bucket of `denom`
    Unstake {
        denom: String,
        amount: Uint128,
    },

    /// Settle the global index and return the reward owed to the bucket of `denom` since its last
    /// accrual. The amount is set as `AccrueRewardResponse` in the response data.
    AccrueReward {
        denom: String,
    },

    /// Update the reward units minted per second
    SetMintRate {
        mint_rate: Uint128,
    },

    /// Move the `AccrueReward` capability to a new gauge (only callable by owner)
    SetGauge {
        gauge: String,
    },

    /// Update contract config (only callable by owner)
    UpdateConfig {
        registry: Option<String>,
    },

    /// Grant or revoke a capability (only callable by owner)
    UpdatePermission(PermissionUpdate<Capability>),

    /// Manages admin role state
    UpdateOwner(OwnerUpdate),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(Config)]
    Config {},

    #[returns(Uint128)]
    MintRate {},

    /// Global index as it would be if updated at the current block time
    #[returns(RewardIndex)]
    RewardIndex {},

    #[returns(Uint128)]
    TotalStaked {},

    #[returns(BucketResponse)]
    Bucket {
        denom: String,
    },

    #[returns(Vec<BucketResponse>)]
    Buckets {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(Uint128)]
    UserStake {
        user: String,
        denom: String,
    },

    /// Buckets the user currently has stake in
    #[returns(Vec<String>)]
    UserBuckets {
        user: String,
    },

    #[returns(Vec<UserStakeResponse>)]
    UserStakes {
        user: String,
    },

    /// What `AccrueReward` would return for `denom` at the current block time
    #[returns(Uint128)]
    PreviewPending {
        denom: String,
    },

    #[returns(PermissionsResponse<Capability>)]
    Permissions {
        capability: Capability,
    },
}

#[cw_serde]
pub struct AccrueRewardResponse {
    pub denom: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct BucketResponse {
    pub denom: String,
    pub staked_amount: Uint128,
    pub last_reward_index: Decimal256,
}

impl BucketResponse {
    pub fn from(denom: String, bucket: Bucket) -> Self {
        Self {
            denom,
            staked_amount: bucket.staked_amount,
            last_reward_index: bucket.last_reward_index,
        }
    }
}

#[cw_serde]
pub struct UserStakeResponse {
    pub denom: String,
    pub amount: Uint128,
}
