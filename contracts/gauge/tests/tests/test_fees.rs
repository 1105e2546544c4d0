use cosmwasm_std::{coin, testing::mock_env, Addr, Deps, DepsMut, Response};
use mars_gauge::{contract::execute, ContractError};
use mars_testing::{mock_info, mock_info_with_funds};
use mars_types::gauge::{ExecuteMsg, FeeTier, FeeTiers, QueryMsg, SwapFeeResponse, MAX_LP_FEE};
use mars_utils::error::{PermissionError, ValidationError};

use super::helpers::{mock_fees, query, setup_test, KEEPER_DENOM};

fn swap_fee(deps: Deps, sender: &str) -> SwapFeeResponse {
    query(
        deps,
        QueryMsg::SwapFee {
            sender: sender.to_string(),
        },
    )
}

fn set_internal(
    deps: DepsMut,
    sender: &str,
    address: &str,
    internal: bool,
) -> Result<Response, ContractError> {
    execute(
        deps,
        mock_env(),
        mock_info(sender),
        ExecuteMsg::SetInternalAddress {
            address: address.to_string(),
            internal,
        },
    )
}

#[test]
fn unknown_swapper_pays_external_fee() {
    let deps = setup_test();

    let res = swap_fee(deps.as_ref(), "trader");
    assert_eq!(
        res,
        SwapFeeResponse {
            identity: Addr::unchecked("trader"),
            tier: FeeTier::External,
            fee: 3_000,
            override_fee: true,
        }
    );
}

#[test]
fn internal_address_pays_internal_fee() {
    let mut deps = setup_test();

    set_internal(deps.as_mut(), "owner", "arb_bot", true).unwrap();
    assert!(query::<bool>(
        deps.as_ref(),
        QueryMsg::IsInternal {
            address: "arb_bot".to_string()
        }
    ));

    let res = swap_fee(deps.as_ref(), "arb_bot");
    assert_eq!(res.tier, FeeTier::Internal);
    assert_eq!(res.fee, 100);

    set_internal(deps.as_mut(), "owner", "arb_bot", false).unwrap();
    assert_eq!(swap_fee(deps.as_ref(), "arb_bot").tier, FeeTier::External);
}

#[test]
fn router_is_resolved_to_its_user() {
    let mut deps = setup_test();
    deps.querier.set_identity("router", "arb_bot");

    set_internal(deps.as_mut(), "owner", "arb_bot", true).unwrap();

    let res = swap_fee(deps.as_ref(), "router");
    assert_eq!(res.identity, Addr::unchecked("arb_bot"));
    assert_eq!(res.tier, FeeTier::Internal);

    // the router itself is not internal
    set_internal(deps.as_mut(), "owner", "arb_bot", false).unwrap();
    set_internal(deps.as_mut(), "owner", "router", true).unwrap();
    assert_eq!(swap_fee(deps.as_ref(), "router").tier, FeeTier::External);
}

#[test]
fn keeper_pays_keeper_fee_unless_internal() {
    let mut deps = setup_test();

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info_with_funds("keeper", &[coin(1_000, KEEPER_DENOM)]),
        ExecuteMsg::BecomeKeeper {},
    )
    .unwrap();

    let res = swap_fee(deps.as_ref(), "keeper");
    assert_eq!(res.tier, FeeTier::Keeper);
    assert_eq!(res.fee, 500);

    set_internal(deps.as_mut(), "owner", "keeper", true).unwrap();
    let res = swap_fee(deps.as_ref(), "keeper");
    assert_eq!(res.tier, FeeTier::Internal);
    assert_eq!(res.fee, 100);
}

#[test]
fn only_capability_holder_can_manage_internal_addresses() {
    let mut deps = setup_test();

    let err = set_internal(deps.as_mut(), "trader", "trader", true).unwrap_err();
    assert_eq!(
        err,
        ContractError::Permission(PermissionError::Unauthorized {
            capability: "manage_internal_addresses".to_string(),
            address: "trader".to_string(),
        })
    );
}

#[test]
fn paginate_internal_addresses() {
    let mut deps = setup_test();

    for i in 0..35 {
        set_internal(deps.as_mut(), "owner", &format!("addr{i:02}"), true).unwrap();
    }

    let page: Vec<Addr> = query(
        deps.as_ref(),
        QueryMsg::InternalAddresses {
            start_after: None,
            limit: None,
        },
    );
    assert_eq!(page.len(), 10);
    assert_eq!(page[0], Addr::unchecked("addr00"));

    let page: Vec<Addr> = query(
        deps.as_ref(),
        QueryMsg::InternalAddresses {
            start_after: None,
            limit: Some(99),
        },
    );
    assert_eq!(page.len(), 30);

    let page: Vec<Addr> = query(
        deps.as_ref(),
        QueryMsg::InternalAddresses {
            start_after: Some("addr31".to_string()),
            limit: Some(99),
        },
    );
    assert_eq!(
        page,
        vec![Addr::unchecked("addr32"), Addr::unchecked("addr33"), Addr::unchecked("addr34")]
    );
}

#[test]
fn update_fees() {
    let mut deps = setup_test();

    let msg = ExecuteMsg::UpdateFees {
        internal_fee: None,
        keeper_fee: Some(0),
        external_fee: Some(MAX_LP_FEE),
    };
    execute(deps.as_mut(), mock_env(), mock_info("owner"), msg).unwrap();

    let fees: FeeTiers = query(deps.as_ref(), QueryMsg::Fees {});
    assert_eq!(
        fees,
        FeeTiers {
            internal_fee: 100,
            keeper_fee: 0,
            external_fee: MAX_LP_FEE,
        }
    );
    assert_eq!(swap_fee(deps.as_ref(), "trader").fee, MAX_LP_FEE);
}

#[test]
fn fee_above_maximum_rejected() {
    let mut deps = setup_test();

    let msg = ExecuteMsg::UpdateFees {
        internal_fee: Some(MAX_LP_FEE + 1),
        keeper_fee: None,
        external_fee: None,
    };
    let err = execute(deps.as_mut(), mock_env(), mock_info("owner"), msg).unwrap_err();
    assert_eq!(
        err,
        ContractError::Validation(ValidationError::InvalidParam {
            param_name: "internal_fee".to_string(),
            invalid_value: "1000001".to_string(),
            predicate: "<= 1000000".to_string(),
        })
    );

    let fees: FeeTiers = query(deps.as_ref(), QueryMsg::Fees {});
    assert_eq!(fees, mock_fees());
}

#[test]
fn only_capability_holder_can_update_fees() {
    let mut deps = setup_test();

    let msg = ExecuteMsg::UpdateFees {
        internal_fee: Some(0),
        keeper_fee: None,
        external_fee: None,
    };
    let err = execute(deps.as_mut(), mock_env(), mock_info("trader"), msg).unwrap_err();
    assert_eq!(
        err,
        ContractError::Permission(PermissionError::Unauthorized {
            capability: "configure_fees".to_string(),
            address: "trader".to_string(),
        })
    );
}
