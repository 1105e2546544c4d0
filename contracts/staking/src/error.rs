use cosmwasm_std::{
    CheckedFromRatioError, CheckedMultiplyFractionError, ConversionOverflowError, OverflowError,
    StdError, Uint128,
};
use cw_utils::PaymentError;
use mars_owner::OwnerError;
use mars_utils::error::{PermissionError, ValidationError};
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Owner(#[from] OwnerError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Permission(#[from] PermissionError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    CheckedMultiplyFraction(#[from] CheckedMultiplyFractionError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Bucket {denom} is not eligible for staking")]
    BucketNotEligible {
        denom: String,
    },

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },
}
