#![cfg(not(target_arch = "wasm32"))]

/// cosmwasm_std::testing overrides and custom test helpers
mod helpers;
mod identity_querier;
pub mod integration;
mod mars_mock_querier;
mod mocks;
mod pool_querier;
mod registry_querier;

pub use helpers::*;
pub use mars_mock_querier::MarsMockQuerier;
pub use mocks::*;
