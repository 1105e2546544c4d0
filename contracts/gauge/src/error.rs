use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::{ParseReplyError, PaymentError};
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
    ParseReply(#[from] ParseReplyError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Liquidity hooks can only be called by the pool manager")]
    NotPoolManager,

    #[error("Invalid pool: {reason}")]
    InvalidPool {
        reason: String,
    },

    #[error("Insufficient balance: bid {bid} must exceed the current deposit {current}")]
    InsufficientBid {
        current: Uint128,
        bid: Uint128,
    },

    #[error("Submessage Reply Error: {0}")]
    ReplyError(String),
}
