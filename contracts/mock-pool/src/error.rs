use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Denoms must be sorted and distinct")]
    UnsortedDenoms,

    #[error("Pool {pool_id} has no liquidity to receive a donation")]
    NoLiquidity {
        pool_id: u64,
    },

    #[error("{denom} is not settled: balance {balance}, required {required}")]
    NotSettled {
        denom: String,
        balance: Uint128,
        required: Uint128,
    },

    #[error("Caller not permitted to perform action")]
    Unauthorized,
}
