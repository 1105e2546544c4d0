#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use mars_types::minter::{ExecuteMsg, QueryMsg};

use crate::{
    error::ContractError,
    msg::InstantiateMsg,
    state::{Config, CONFIG},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    CONFIG.save(
        deps.storage,
        &Config {
            admin: info.sender,
            issuer: deps.api.addr_validate(&msg.issuer)?,
            denom: msg.denom,
        },
    )?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Issue {
            recipient,
            amount,
        } => issue(deps, info, recipient, amount),
        ExecuteMsg::UpdateIssuer {
            issuer,
        } => update_issuer(deps, info, issuer),
    }
}

fn issue(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.issuer {
        return Err(ContractError::NotIssuer {
            sender: info.sender.to_string(),
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), config.denom),
        })
        .add_attribute("action", "issue")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

fn update_issuer(
    deps: DepsMut,
    info: MessageInfo,
    issuer: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.issuer && info.sender != config.admin {
        return Err(ContractError::NotIssuer {
            sender: info.sender.to_string(),
        });
    }

    config.issuer = deps.api.addr_validate(&issuer)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_issuer").add_attribute("issuer", issuer))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Issuer {} => to_json_binary(&CONFIG.load(deps.storage)?.issuer),
    }
}
