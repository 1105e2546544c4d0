#![allow(dead_code)]

use std::mem::take;

use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, Addr, Coin, Uint128};
use cw_multi_test::{App, AppResponse, BankSudo, BasicApp, Executor, SudoMsg};
use mars_mock_pool::state::PoolState;
use mars_types::{
    gauge::{self, FeeTiers, KeeperResponse, SwapFeeResponse},
    minter,
    staking::{self, BucketResponse, RewardIndex},
};

use super::mock_contracts::{
    mock_gauge_contract, mock_identity_resolver_contract, mock_minter_contract,
    mock_pool_contract, mock_registry_contract, mock_staking_contract,
};

pub struct MockEnv {
    pub app: BasicApp,
    pub owner: Addr,
    pub developer: Addr,
    pub primary_denom: String,
    pub keeper_denom: String,
    pub staking: Addr,
    pub gauge: Addr,
    pub pool_manager: Addr,
    pub minter: Addr,
    pub registry: Addr,
    pub identity_resolver: Addr,
}

pub struct MockEnvBuilder {
    app: BasicApp,
    owner: Addr,
    developer: Addr,
    primary_denom: String,
    keeper_denom: String,
    mint_rate: Uint128,
    fees: FeeTiers,
    eligible_denoms: Vec<String>,
    minter_reserve: u128,
}

#[allow(clippy::new_ret_no_self)]
impl MockEnv {
    pub fn new() -> MockEnvBuilder {
        MockEnvBuilder {
            app: App::default(),
            owner: Addr::unchecked("owner"),
            developer: Addr::unchecked("developer"),
            primary_denom: "umars".to_string(),
            keeper_denom: "umars".to_string(),
            mint_rate: Uint128::new(100),
            fees: FeeTiers {
                internal_fee: 100,
                keeper_fee: 500,
                external_fee: 3_000,
            },
            eligible_denoms: vec!["uatom".to_string(), "uosmo".to_string()],
            minter_reserve: 1_000_000_000_000,
        }
    }

    //--------------------------------------------------------------------------------------------------
    // Chain
    //--------------------------------------------------------------------------------------------------

    pub fn increment_by_time(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.height += seconds / 6;
            // assume block time = 6 sec
            block.time = block.time.plus_seconds(seconds);
        })
    }

    pub fn block_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn fund_account(&mut self, addr: &Addr, coins: &[Coin]) {
        self.app
            .sudo(SudoMsg::Bank(BankSudo::Mint {
                to_address: addr.to_string(),
                amount: coins.to_vec(),
            }))
            .unwrap();
    }

    pub fn query_balance(&self, addr: &Addr, denom: &str) -> Uint128 {
        self.app.wrap().query_balance(addr, denom).unwrap().amount
    }

    //--------------------------------------------------------------------------------------------------
    // Staking
    //--------------------------------------------------------------------------------------------------

    pub fn stake(&mut self, sender: &Addr, denom: &str, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.staking.clone(),
            &staking::ExecuteMsg::Stake {
                denom: denom.to_string(),
            },
            &[coin(amount, &self.primary_denom)],
        )
    }

    pub fn unstake(&mut self, sender: &Addr, denom: &str, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.staking.clone(),
            &staking::ExecuteMsg::Unstake {
                denom: denom.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn set_mint_rate(&mut self, sender: &Addr, mint_rate: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.staking.clone(),
            &staking::ExecuteMsg::SetMintRate {
                mint_rate: Uint128::new(mint_rate),
            },
            &[],
        )
    }

    pub fn query_bucket(&self, denom: &str) -> BucketResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.staking.clone(),
                &staking::QueryMsg::Bucket {
                    denom: denom.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_reward_index(&self) -> RewardIndex {
        self.app
            .wrap()
            .query_wasm_smart(self.staking.clone(), &staking::QueryMsg::RewardIndex {})
            .unwrap()
    }

    pub fn query_preview_pending(&self, denom: &str) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart(
                self.staking.clone(),
                &staking::QueryMsg::PreviewPending {
                    denom: denom.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_total_staked(&self) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart(self.staking.clone(), &staking::QueryMsg::TotalStaked {})
            .unwrap()
    }

    //--------------------------------------------------------------------------------------------------
    // Gauge
    //--------------------------------------------------------------------------------------------------

    pub fn become_keeper(&mut self, sender: &Addr, deposit: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.gauge.clone(),
            &gauge::ExecuteMsg::BecomeKeeper {},
            &[coin(deposit, &self.keeper_denom)],
        )
    }

    pub fn set_internal_address(
        &mut self,
        sender: &Addr,
        address: &Addr,
        internal: bool,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.gauge.clone(),
            &gauge::ExecuteMsg::SetInternalAddress {
                address: address.to_string(),
                internal,
            },
            &[],
        )
    }

    pub fn return_issuance_authority(
        &mut self,
        sender: &Addr,
        issuer: &Addr,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.gauge.clone(),
            &gauge::ExecuteMsg::ReturnIssuanceAuthority {
                issuer: issuer.to_string(),
            },
            &[],
        )
    }

    pub fn query_swap_fee(&self, sender: &Addr) -> SwapFeeResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.gauge.clone(),
                &gauge::QueryMsg::SwapFee {
                    sender: sender.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_keeper(&self) -> KeeperResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.gauge.clone(), &gauge::QueryMsg::KeeperInfo {})
            .unwrap()
    }

    //--------------------------------------------------------------------------------------------------
    // Pool manager
    //--------------------------------------------------------------------------------------------------

    pub fn create_pool(
        &mut self,
        denom0: &str,
        denom1: &str,
        dynamic_fee: bool,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.owner.clone(),
            self.pool_manager.clone(),
            &mars_mock_pool::msg::ExecuteMsg::CreatePool {
                denom0: denom0.to_string(),
                denom1: denom1.to_string(),
                dynamic_fee,
                static_fee: 3_000,
                hook: self.gauge.to_string(),
            },
            &[],
        )
    }

    pub fn add_liquidity(
        &mut self,
        sender: &Addr,
        pool_id: u64,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.pool_manager.clone(),
            &mars_mock_pool::msg::ExecuteMsg::AddLiquidity {
                pool_id,
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn remove_liquidity(
        &mut self,
        sender: &Addr,
        pool_id: u64,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.pool_manager.clone(),
            &mars_mock_pool::msg::ExecuteMsg::RemoveLiquidity {
                pool_id,
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn swap(&mut self, sender: &Addr, pool_id: u64, offer: Coin) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.pool_manager.clone(),
            &mars_mock_pool::msg::ExecuteMsg::Swap {
                pool_id,
            },
            &[offer],
        )
    }

    pub fn query_pool(&self, pool_id: u64) -> PoolState {
        self.app
            .wrap()
            .query_wasm_smart(
                self.pool_manager.clone(),
                &mars_mock_pool::msg::QueryMsg::Pool {
                    pool_id,
                },
            )
            .unwrap()
    }

    //--------------------------------------------------------------------------------------------------
    // Collaborators
    //--------------------------------------------------------------------------------------------------

    pub fn update_issuer(&mut self, sender: &Addr, issuer: &Addr) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.minter.clone(),
            &minter::ExecuteMsg::UpdateIssuer {
                issuer: issuer.to_string(),
            },
            &[],
        )
    }

    pub fn query_issuer(&self) -> Addr {
        self.app.wrap().query_wasm_smart(self.minter.clone(), &minter::QueryMsg::Issuer {}).unwrap()
    }

    pub fn set_identity(&mut self, caller: &Addr, identity: Option<&Addr>) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.identity_resolver.clone(),
                &mars_mock_identity_resolver::msg::ExecuteMsg::SetIdentity {
                    caller: caller.to_string(),
                    identity: identity.map(ToString::to_string),
                },
                &[],
            )
            .unwrap();
    }
}

impl MockEnvBuilder {
    pub fn mint_rate(&mut self, mint_rate: u128) -> &mut Self {
        self.mint_rate = Uint128::new(mint_rate);
        self
    }

    pub fn fees(&mut self, fees: FeeTiers) -> &mut Self {
        self.fees = fees;
        self
    }

    pub fn keeper_denom(&mut self, denom: &str) -> &mut Self {
        self.keeper_denom = denom.to_string();
        self
    }

    pub fn eligible_denoms(&mut self, denoms: &[&str]) -> &mut Self {
        self.eligible_denoms = denoms.iter().map(ToString::to_string).collect();
        self
    }

    pub fn minter_reserve(&mut self, amount: u128) -> &mut Self {
        self.minter_reserve = amount;
        self
    }

    pub fn build(&mut self) -> AnyResult<MockEnv> {
        let registry = self.deploy_registry()?;
        let identity_resolver = self.deploy_identity_resolver()?;
        let pool_manager = self.deploy_pool_manager()?;
        let minter = self.deploy_minter()?;
        let staking = self.deploy_staking(&registry)?;
        let gauge = self.deploy_gauge(&pool_manager, &staking, &minter, &identity_resolver)?;

        // Wire the gauge as the only accruer and as the issuer of the primary denom
        self.app.execute_contract(
            self.owner.clone(),
            staking.clone(),
            &staking::ExecuteMsg::SetGauge {
                gauge: gauge.to_string(),
            },
            &[],
        )?;
        self.app.execute_contract(
            self.owner.clone(),
            minter.clone(),
            &minter::ExecuteMsg::UpdateIssuer {
                issuer: gauge.to_string(),
            },
            &[],
        )?;

        Ok(MockEnv {
            app: take(&mut self.app),
            owner: self.owner.clone(),
            developer: self.developer.clone(),
            primary_denom: self.primary_denom.clone(),
            keeper_denom: self.keeper_denom.clone(),
            staking,
            gauge,
            pool_manager,
            minter,
            registry,
            identity_resolver,
        })
    }

    fn deploy_registry(&mut self) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_registry_contract());

        self.app.instantiate_contract(
            code_id,
            self.owner.clone(),
            &mars_mock_registry::msg::InstantiateMsg {
                eligible_denoms: self.eligible_denoms.clone(),
            },
            &[],
            "mock-registry",
            None,
        )
    }

    fn deploy_identity_resolver(&mut self) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_identity_resolver_contract());

        self.app.instantiate_contract(
            code_id,
            self.owner.clone(),
            &mars_mock_identity_resolver::msg::InstantiateMsg {},
            &[],
            "mock-identity-resolver",
            None,
        )
    }

    fn deploy_pool_manager(&mut self) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_pool_contract());

        self.app.instantiate_contract(
            code_id,
            self.owner.clone(),
            &mars_mock_pool::msg::InstantiateMsg {},
            &[],
            "mock-pool",
            None,
        )
    }

    fn deploy_minter(&mut self) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_minter_contract());

        let minter = self.app.instantiate_contract(
            code_id,
            self.owner.clone(),
            &mars_mock_minter::msg::InstantiateMsg {
                issuer: self.owner.to_string(),
                denom: self.primary_denom.clone(),
            },
            &[],
            "mock-minter",
            None,
        )?;

        self.app.sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: minter.to_string(),
            amount: vec![coin(self.minter_reserve, &self.primary_denom)],
        }))?;

        Ok(minter)
    }

    fn deploy_staking(&mut self, registry: &Addr) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_staking_contract());

        self.app.instantiate_contract(
            code_id,
            self.owner.clone(),
            &staking::InstantiateMsg {
                owner: self.owner.to_string(),
                staking_denom: self.primary_denom.clone(),
                mint_rate: self.mint_rate,
                registry: registry.to_string(),
                gauge: None,
            },
            &[],
            "mars-staking",
            None,
        )
    }

    fn deploy_gauge(
        &mut self,
        pool_manager: &Addr,
        staking: &Addr,
        minter: &Addr,
        identity_resolver: &Addr,
    ) -> AnyResult<Addr> {
        let code_id = self.app.store_code(mock_gauge_contract());

        self.app.instantiate_contract(
            code_id,
            self.owner.clone(),
            &gauge::InstantiateMsg {
                owner: self.owner.to_string(),
                pool_manager: pool_manager.to_string(),
                staking: staking.to_string(),
                minter: minter.to_string(),
                identity_resolver: identity_resolver.to_string(),
                developer: self.developer.to_string(),
                primary_denom: self.primary_denom.clone(),
                keeper_denom: self.keeper_denom.clone(),
                fees: self.fees,
            },
            &[],
            "mars-gauge",
            None,
        )
    }
}
