use std::fmt;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use mars_owner::OwnerUpdate;
use strum::EnumIter;

use crate::{
    permissions::{PermissionUpdate, PermissionsResponse},
    pool::PoolKey,
};

/// Fees are expressed in hundredths of a basis point, so this is 100%
pub const MAX_LP_FEE: u32 = 1_000_000;

#[cw_serde]
#[derive(Copy, Eq, Hash, EnumIter)]
pub enum Capability {
    /// Change any of the three fee tiers
    ConfigureFees,
    /// Add or remove addresses from the internal set
    ManageInternalAddresses,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ConfigureFees => "configure_fees",
            Capability::ManageInternalAddresses => "manage_internal_addresses",
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
    /// Pool manager allowed to call the liquidity hooks and receiving donations
    pub pool_manager: Addr,
    /// Staking contract the rewards are accrued from
    pub staking: Addr,
    /// Issuance authority of the primary denom
    pub minter: Addr,
    /// Resolver used to unmask routers before classifying swappers
    pub identity_resolver: Addr,
    /// Receives the developer share of every distribution
    pub developer: Addr,
    /// Continuously issued denom every eligible pool is paired with
    pub primary_denom: String,
    /// Denom of keeper deposits
    pub keeper_denom: String,
}

#[cw_serde]
#[derive(Default)]
pub struct ConfigUpdates {
    pub pool_manager: Option<String>,
    pub staking: Option<String>,
    pub minter: Option<String>,
    pub identity_resolver: Option<String>,
    pub developer: Option<String>,
}

#[cw_serde]
#[derive(Copy)]
pub struct FeeTiers {
    /// Fee for addresses in the internal set
    pub internal_fee: u32,
    /// Fee for the current keeper
    pub keeper_fee: u32,
    /// Fee for everyone else
    pub external_fee: u32,
}

impl FeeTiers {
    pub fn fee(&self, tier: FeeTier) -> u32 {
        match tier {
            FeeTier::Internal => self.internal_fee,
            FeeTier::Keeper => self.keeper_fee,
            FeeTier::External => self.external_fee,
        }
    }
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum FeeTier {
    Internal,
    Keeper,
    External,
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeeTier::Internal => "internal",
            FeeTier::Keeper => "keeper",
            FeeTier::External => "external",
        };
        write!(f, "{s}")
    }
}

/// Holder of the keeper slot and the deposit backing it
#[cw_serde]
pub struct Keeper {
    pub address: Addr,
    pub deposit: Uint128,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner
    pub owner: String,
    pub pool_manager: String,
    pub staking: String,
    pub minter: String,
    pub identity_resolver: String,
    pub developer: String,
    pub primary_denom: String,
    pub keeper_denom: String,
    pub fees: FeeTiers,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Sent by the pool manager before a pool using this gauge is created
    BeforeInitialize {
        pool: PoolKey,
    },

    /// Sent by the pool manager before liquidity is added. Distributes rewards accrued by the
    /// bucket of the pool's paired denom.
    BeforeAddLiquidity {
        pool: PoolKey,
    },

    /// Sent by the pool manager before liquidity is removed. Same distribution as on add.
    BeforeRemoveLiquidity {
        pool: PoolKey,
    },

    /// Take the keeper slot by depositing strictly more keeper denom than the current keeper
    BecomeKeeper {},

    /// Update any of the fee tiers
    UpdateFees {
        internal_fee: Option<u32>,
        keeper_fee: Option<u32>,
        external_fee: Option<u32>,
    },

    /// Add `address` to, or remove it from, the internal set
    SetInternalAddress {
        address: String,
        internal: bool,
    },

    /// Give the issuing authority of the primary denom back to `issuer` (only callable by owner)
    ReturnIssuanceAuthority {
        issuer: String,
    },

    /// Update contract config (only callable by owner)
    UpdateConfig(ConfigUpdates),

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

    #[returns(FeeTiers)]
    Fees {},

    /// Fee the pool manager must apply to a swap sent by `sender`
    #[returns(SwapFeeResponse)]
    SwapFee {
        sender: String,
    },

    #[returns(KeeperResponse)]
    KeeperInfo {},

    #[returns(bool)]
    IsInternal {
        address: String,
    },

    #[returns(Vec<Addr>)]
    InternalAddresses {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(PermissionsResponse<Capability>)]
    Permissions {
        capability: Capability,
    },
}

#[cw_serde]
pub struct SwapFeeResponse {
    /// Identity the fee was resolved for
    pub identity: Addr,
    pub tier: FeeTier,
    pub fee: u32,
    /// Instructs the pool manager to apply `fee` instead of the pool's static fee
    pub override_fee: bool,
}

#[cw_serde]
pub struct KeeperResponse {
    pub keeper: Option<Addr>,
    pub deposit: Uint128,
}

impl From<Option<Keeper>> for KeeperResponse {
    fn from(keeper: Option<Keeper>) -> Self {
        match keeper {
            Some(Keeper {
                address,
                deposit,
            }) => Self {
                keeper: Some(address),
                deposit,
            },
            None => Self {
                keeper: None,
                deposit: Uint128::zero(),
            },
        }
    }
}
