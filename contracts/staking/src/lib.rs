pub mod config;
pub mod contract;
mod error;
pub mod helpers;
pub mod ledger;
pub mod query;
pub mod state;

pub use error::{ContractError, ContractResult};
