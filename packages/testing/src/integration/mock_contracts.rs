use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn mock_staking_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mars_staking::contract::execute,
        mars_staking::contract::instantiate,
        mars_staking::contract::query,
    );
    Box::new(contract)
}

pub fn mock_gauge_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mars_gauge::contract::execute,
        mars_gauge::contract::instantiate,
        mars_gauge::contract::query,
    )
    .with_reply(mars_gauge::contract::reply);
    Box::new(contract)
}

pub fn mock_pool_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mars_mock_pool::contract::execute,
        mars_mock_pool::contract::instantiate,
        mars_mock_pool::contract::query,
    );
    Box::new(contract)
}

pub fn mock_minter_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mars_mock_minter::contract::execute,
        mars_mock_minter::contract::instantiate,
        mars_mock_minter::contract::query,
    );
    Box::new(contract)
}

pub fn mock_registry_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mars_mock_registry::contract::execute,
        mars_mock_registry::contract::instantiate,
        mars_mock_registry::contract::query,
    );
    Box::new(contract)
}

pub fn mock_identity_resolver_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mars_mock_identity_resolver::contract::execute,
        mars_mock_identity_resolver::contract::instantiate,
        mars_mock_identity_resolver::contract::query,
    );
    Box::new(contract)
}
