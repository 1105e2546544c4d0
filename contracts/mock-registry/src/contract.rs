#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};
use mars_types::registry::QueryMsg;

use crate::{
    msg::{ExecuteMsg, InstantiateMsg},
    state::ELIGIBLE_DENOMS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    for denom in msg.eligible_denoms {
        ELIGIBLE_DENOMS.save(deps.storage, &denom, &Empty {})?;
    }
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SetEligible {
            denom,
            eligible,
        } => {
            if eligible {
                ELIGIBLE_DENOMS.save(deps.storage, &denom, &Empty {})?;
            } else {
                ELIGIBLE_DENOMS.remove(deps.storage, &denom);
            }
            Ok(Response::new())
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsEligible {
            denom,
        } => to_json_binary(&ELIGIBLE_DENOMS.has(deps.storage, &denom)),
    }
}
