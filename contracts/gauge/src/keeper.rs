use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};
use mars_types::gauge::Keeper;
use mars_utils::helpers::build_send_asset_msg;

use crate::{
    error::{ContractError, ContractResult},
    state::{CONFIG, KEEPER},
};

/// Takes the keeper slot with the sent deposit, which must exceed the current one. The previous
/// keeper, the caller included, gets the full deposit back after the new keeper is stored.
pub fn become_keeper(deps: DepsMut, info: MessageInfo) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let bid = cw_utils::must_pay(&info, &config.keeper_denom)?;

    let previous = KEEPER.may_load(deps.storage)?;
    let current = previous.as_ref().map(|keeper| keeper.deposit).unwrap_or_default();
    if bid <= current {
        return Err(ContractError::InsufficientBid {
            current,
            bid,
        });
    }

    KEEPER.save(
        deps.storage,
        &Keeper {
            address: info.sender.clone(),
            deposit: bid,
        },
    )?;

    let mut event = Event::new("mars/gauge/keeper_change")
        .add_attribute("keeper", info.sender)
        .add_attribute("deposit", bid);

    let mut response = Response::new();
    if let Some(previous) = previous {
        response = response.add_message(build_send_asset_msg(
            &previous.address,
            &config.keeper_denom,
            previous.deposit,
        ));
        event = event
            .add_attribute("previous_keeper", previous.address)
            .add_attribute("refund", previous.deposit);
    }

    Ok(response.add_event(event))
}
