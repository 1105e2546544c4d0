#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Uint128, WasmMsg,
};
use mars_types::{
    gauge::{self, SwapFeeResponse, MAX_LP_FEE},
    pool::PoolKey,
};

use crate::{
    error::ContractError,
    msg::{CallbackMsg, ExecuteMsg, InstantiateMsg, QueryMsg},
    state::{PoolState, NEXT_POOL_ID, OUTSTANDING, POOLS, SETTLED},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    NEXT_POOL_ID.save(deps.storage, &1)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreatePool {
            denom0,
            denom1,
            dynamic_fee,
            static_fee,
            hook,
        } => create_pool(deps, denom0, denom1, dynamic_fee, static_fee, hook),
        ExecuteMsg::AddLiquidity {
            pool_id,
            amount,
        } => modify_liquidity(deps, env, pool_id, amount, true),
        ExecuteMsg::RemoveLiquidity {
            pool_id,
            amount,
        } => modify_liquidity(deps, env, pool_id, amount, false),
        ExecuteMsg::Swap {
            pool_id,
        } => swap(deps, info, pool_id),
        ExecuteMsg::Donate {
            pool_id,
            amount0,
            amount1,
        } => donate(deps, pool_id, amount0, amount1),
        ExecuteMsg::Settle {} => settle(deps, env),
        ExecuteMsg::Callback(callback) => {
            if info.sender != env.contract.address {
                return Err(ContractError::Unauthorized);
            }
            match callback {
                CallbackMsg::ApplyLiquidityChange {
                    pool_id,
                    amount,
                    add,
                } => apply_liquidity_change(deps, pool_id, amount, add),
            }
        }
    }
}

fn hook_msg(hook: &str, msg: &gauge::ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: hook.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

fn create_pool(
    deps: DepsMut,
    denom0: String,
    denom1: String,
    dynamic_fee: bool,
    static_fee: u32,
    hook: String,
) -> Result<Response, ContractError> {
    if denom0 >= denom1 {
        return Err(ContractError::UnsortedDenoms);
    }

    let hook = deps.api.addr_validate(&hook)?;
    let id = NEXT_POOL_ID.load(deps.storage)?;
    NEXT_POOL_ID.save(deps.storage, &(id + 1))?;

    let key = PoolKey {
        id,
        denom0,
        denom1,
        dynamic_fee,
    };
    POOLS.save(
        deps.storage,
        id,
        &PoolState {
            key: key.clone(),
            hook: hook.clone(),
            static_fee,
            liquidity: Uint128::zero(),
            donated0: Uint128::zero(),
            donated1: Uint128::zero(),
            last_swap_fee: None,
            collected_fees: Uint128::zero(),
        },
    )?;

    // A rejecting hook reverts the creation
    Ok(Response::new()
        .add_message(hook_msg(
            hook.as_str(),
            &gauge::ExecuteMsg::BeforeInitialize {
                pool: key,
            },
        )?)
        .add_attribute("action", "create_pool")
        .add_attribute("pool_id", id.to_string()))
}

fn modify_liquidity(
    deps: DepsMut,
    env: Env,
    pool_id: u64,
    amount: Uint128,
    add: bool,
) -> Result<Response, ContractError> {
    let pool = POOLS.load(deps.storage, pool_id)?;

    let hook = if add {
        gauge::ExecuteMsg::BeforeAddLiquidity {
            pool: pool.key,
        }
    } else {
        gauge::ExecuteMsg::BeforeRemoveLiquidity {
            pool: pool.key,
        }
    };

    let apply = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::Callback(CallbackMsg::ApplyLiquidityChange {
            pool_id,
            amount,
            add,
        }))?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(hook_msg(pool.hook.as_str(), &hook)?)
        .add_message(apply)
        .add_attribute("action", "modify_liquidity")
        .add_attribute("pool_id", pool_id.to_string()))
}

fn apply_liquidity_change(
    deps: DepsMut,
    pool_id: u64,
    amount: Uint128,
    add: bool,
) -> Result<Response, ContractError> {
    let mut pool = POOLS.load(deps.storage, pool_id)?;
    pool.liquidity = if add {
        pool.liquidity.checked_add(amount)?
    } else {
        pool.liquidity.checked_sub(amount)?
    };
    POOLS.save(deps.storage, pool_id, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "apply_liquidity_change")
        .add_attribute("liquidity", pool.liquidity))
}

fn swap(deps: DepsMut, info: MessageInfo, pool_id: u64) -> Result<Response, ContractError> {
    let mut pool = POOLS.load(deps.storage, pool_id)?;
    let Some(offer) = info.funds.first() else {
        return Err(cw_utils::PaymentError::NoFunds {}.into());
    };

    let fee = if pool.key.dynamic_fee {
        let res: SwapFeeResponse = deps.querier.query_wasm_smart(
            pool.hook.to_string(),
            &gauge::QueryMsg::SwapFee {
                sender: info.sender.to_string(),
            },
        )?;
        if res.override_fee {
            res.fee
        } else {
            pool.static_fee
        }
    } else {
        pool.static_fee
    };

    let fee_amount = offer.amount.multiply_ratio(fee, MAX_LP_FEE);
    pool.last_swap_fee = Some(fee);
    pool.collected_fees = pool.collected_fees.checked_add(fee_amount)?;
    POOLS.save(deps.storage, pool_id, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "swap")
        .add_attribute("fee", fee.to_string())
        .add_attribute("fee_amount", fee_amount))
}

fn donate(
    deps: DepsMut,
    pool_id: u64,
    amount0: Uint128,
    amount1: Uint128,
) -> Result<Response, ContractError> {
    let mut pool = POOLS.load(deps.storage, pool_id)?;
    if pool.liquidity.is_zero() {
        return Err(ContractError::NoLiquidity {
            pool_id,
        });
    }

    pool.donated0 = pool.donated0.checked_add(amount0)?;
    pool.donated1 = pool.donated1.checked_add(amount1)?;
    POOLS.save(deps.storage, pool_id, &pool)?;

    for (denom, amount) in [(&pool.key.denom0, amount0), (&pool.key.denom1, amount1)] {
        if !amount.is_zero() {
            let owed = OUTSTANDING.may_load(deps.storage, denom)?.unwrap_or_default();
            OUTSTANDING.save(deps.storage, denom, &owed.checked_add(amount)?)?;
        }
    }

    Ok(Response::new()
        .add_attribute("action", "donate")
        .add_attribute("pool_id", pool_id.to_string())
        .add_attribute("amount0", amount0)
        .add_attribute("amount1", amount1))
}

/// Every outstanding donation must be backed by tokens the contract received
fn settle(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let outstanding = OUTSTANDING
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;

    for (denom, owed) in outstanding {
        let settled = SETTLED.may_load(deps.storage, &denom)?.unwrap_or_default();
        let required = settled.checked_add(owed)?;
        let balance = deps.querier.query_balance(&env.contract.address, &denom)?.amount;
        if balance < required {
            return Err(ContractError::NotSettled {
                denom,
                balance,
                required,
            });
        }
        SETTLED.save(deps.storage, &denom, &required)?;
        OUTSTANDING.remove(deps.storage, &denom);
    }

    Ok(Response::new().add_attribute("action", "settle"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Liquidity {
            pool_id,
        } => to_json_binary(&POOLS.load(deps.storage, pool_id)?.liquidity),
        QueryMsg::Pool {
            pool_id,
        } => to_json_binary(&POOLS.load(deps.storage, pool_id)?),
        QueryMsg::Outstanding {} => {
            let outstanding = OUTSTANDING
                .range(deps.storage, None, None, Order::Ascending)
                .map(|res| {
                    let (denom, amount) = res?;
                    Ok(Coin {
                        denom,
                        amount,
                    })
                })
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&outstanding)
        }
    }
}
