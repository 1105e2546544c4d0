use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Identifies a pool and its pair of denoms. `denom0` sorts before `denom1`.
#[cw_serde]
pub struct PoolKey {
    pub id: u64,
    pub denom0: String,
    pub denom1: String,
    /// Whether the pool lets its hook override the swap fee
    pub dynamic_fee: bool,
}

impl PoolKey {
    /// The denom paired with `primary_denom`, if the pool contains it
    pub fn paired_denom(&self, primary_denom: &str) -> Option<&str> {
        if self.denom0 == primary_denom {
            Some(&self.denom1)
        } else if self.denom1 == primary_denom {
            Some(&self.denom0)
        } else {
            None
        }
    }

    /// Donation amounts with `amount` on the side of `denom`
    pub fn donation_amounts(&self, denom: &str, amount: Uint128) -> (Uint128, Uint128) {
        if self.denom0 == denom {
            (amount, Uint128::zero())
        } else {
            (Uint128::zero(), amount)
        }
    }
}

/// Subset of the pool manager interface used by the gauge
#[cw_serde]
pub enum ExecuteMsg {
    /// Credit the amounts to the pool's liquidity providers
    Donate {
        pool_id: u64,
        amount0: Uint128,
        amount1: Uint128,
    },

    /// Reconcile tokens transferred into the pool manager against outstanding donations
    Settle {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Liquidity currently committed to the pool
    #[returns(Uint128)]
    Liquidity {
        pool_id: u64,
    },
}
