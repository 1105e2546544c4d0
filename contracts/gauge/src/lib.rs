pub mod config;
pub mod contract;
pub mod distribution;
mod error;
pub mod fee;
pub mod keeper;
pub mod query;
pub mod state;

pub use error::{ContractError, ContractResult};
