use cosmwasm_std::{
    testing::{mock_env, MockApi, MockStorage},
    OwnedDeps, ReplyOn, Uint128,
};
use mars_gauge::{
    contract::{execute, reply},
    distribution::{COMMUNITY_ISSUE_REPLY_ID, DEVELOPER_ISSUE_REPLY_ID},
    state::PENDING_DISTRIBUTION,
    ContractError,
};
use mars_testing::{find_event_attr, has_event, mock_info, MarsMockQuerier};
use mars_types::{gauge::ExecuteMsg, minter, pool};

use super::helpers::{accrue_reply, err_reply, mock_pool, ok_reply, setup_test, wasm_execute};

fn start_distribution(
    deps: &mut OwnedDeps<MockStorage, MockApi, MarsMockQuerier>,
    pool_id: u64,
    denom: &str,
) {
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info("pool_manager"),
        ExecuteMsg::BeforeAddLiquidity {
            pool: mock_pool(pool_id, denom),
        },
    )
    .unwrap();
}

#[test]
fn reward_split_between_developer_and_pool() {
    let mut deps = setup_test();
    deps.querier.set_pool_liquidity(1, Uint128::new(5_000));
    start_distribution(&mut deps, 1, "uatom");

    let res = reply(deps.as_mut(), mock_env(), accrue_reply("uatom", 1_001)).unwrap();
    assert_eq!(res.messages.len(), 2);

    // developer share is rounded down, failures only are reported back
    let developer_issue = &res.messages[0];
    assert_eq!(developer_issue.id, DEVELOPER_ISSUE_REPLY_ID);
    assert_eq!(developer_issue.reply_on, ReplyOn::Error);
    let (contract, msg): (String, minter::ExecuteMsg) = wasm_execute(&developer_issue.msg);
    assert_eq!(contract, "minter");
    assert_eq!(
        msg,
        minter::ExecuteMsg::Issue {
            recipient: "developer".to_string(),
            amount: Uint128::new(500),
        }
    );

    let community_issue = &res.messages[1];
    assert_eq!(community_issue.id, COMMUNITY_ISSUE_REPLY_ID);
    assert_eq!(community_issue.reply_on, ReplyOn::Always);
    let (_, msg): (String, minter::ExecuteMsg) = wasm_execute(&community_issue.msg);
    assert_eq!(
        msg,
        minter::ExecuteMsg::Issue {
            recipient: "pool_manager".to_string(),
            amount: Uint128::new(501),
        }
    );

    assert_eq!(
        find_event_attr(&res.events, "mars/gauge/reward_split", "community_share"),
        Some("501".to_string())
    );
    let pending = PENDING_DISTRIBUTION.load(deps.as_ref().storage).unwrap();
    assert_eq!(pending.community_share, Uint128::new(501));

    // once issued, the community share is donated on the primary denom side and settled
    let res = reply(deps.as_mut(), mock_env(), ok_reply(COMMUNITY_ISSUE_REPLY_ID)).unwrap();
    assert_eq!(res.messages.len(), 2);

    let (contract, msg): (String, pool::ExecuteMsg) = wasm_execute(&res.messages[0].msg);
    assert_eq!(contract, "pool_manager");
    assert_eq!(
        msg,
        pool::ExecuteMsg::Donate {
            pool_id: 1,
            amount0: Uint128::zero(),
            amount1: Uint128::new(501),
        }
    );
    let (_, msg): (String, pool::ExecuteMsg) = wasm_execute(&res.messages[1].msg);
    assert_eq!(msg, pool::ExecuteMsg::Settle {});

    assert!(PENDING_DISTRIBUTION.may_load(deps.as_ref().storage).unwrap().is_none());
}

#[test]
fn donation_lands_on_denom0_when_primary_sorts_first() {
    let mut deps = setup_test();
    deps.querier.set_pool_liquidity(9, Uint128::new(1));
    start_distribution(&mut deps, 9, "uusdc");

    reply(deps.as_mut(), mock_env(), accrue_reply("uusdc", 10)).unwrap();
    let res = reply(deps.as_mut(), mock_env(), ok_reply(COMMUNITY_ISSUE_REPLY_ID)).unwrap();

    let (_, msg): (String, pool::ExecuteMsg) = wasm_execute(&res.messages[0].msg);
    assert_eq!(
        msg,
        pool::ExecuteMsg::Donate {
            pool_id: 9,
            amount0: Uint128::new(5),
            amount1: Uint128::zero(),
        }
    );
}

#[test]
fn empty_pool_reward_goes_to_developer() {
    let mut deps = setup_test();
    deps.querier.set_pool_liquidity(1, Uint128::zero());
    start_distribution(&mut deps, 1, "uatom");

    let res = reply(deps.as_mut(), mock_env(), accrue_reply("uatom", 1_001)).unwrap();
    assert_eq!(res.messages.len(), 1);

    let (_, msg): (String, minter::ExecuteMsg) = wasm_execute(&res.messages[0].msg);
    assert_eq!(
        msg,
        minter::ExecuteMsg::Issue {
            recipient: "developer".to_string(),
            amount: Uint128::new(1_001),
        }
    );
    assert!(PENDING_DISTRIBUTION.may_load(deps.as_ref().storage).unwrap().is_none());
}

#[test]
fn single_unit_goes_to_the_pool() {
    let mut deps = setup_test();
    deps.querier.set_pool_liquidity(1, Uint128::new(1));
    start_distribution(&mut deps, 1, "uatom");

    let res = reply(deps.as_mut(), mock_env(), accrue_reply("uatom", 1)).unwrap();

    // zero developer share is skipped
    assert_eq!(res.messages.len(), 1);
    assert_eq!(res.messages[0].id, COMMUNITY_ISSUE_REPLY_ID);
}

#[test]
fn nothing_accrued_nothing_issued() {
    let mut deps = setup_test();
    deps.querier.set_pool_liquidity(1, Uint128::new(5_000));
    start_distribution(&mut deps, 1, "uatom");

    let res = reply(deps.as_mut(), mock_env(), accrue_reply("uatom", 0)).unwrap();
    assert!(res.messages.is_empty());
    assert!(has_event(&res.events, "mars/gauge/nothing_to_distribute"));
    assert!(PENDING_DISTRIBUTION.may_load(deps.as_ref().storage).unwrap().is_none());
}

#[test]
fn failed_developer_issuance_is_reported() {
    let mut deps = setup_test();

    let res = reply(
        deps.as_mut(),
        mock_env(),
        err_reply(DEVELOPER_ISSUE_REPLY_ID, "sender is not the issuer"),
    )
    .unwrap();
    assert!(res.messages.is_empty());
    assert_eq!(
        find_event_attr(&res.events, "mars/gauge/issuance_failed", "share"),
        Some("developer".to_string())
    );
    assert_eq!(
        find_event_attr(&res.events, "mars/gauge/issuance_failed", "error"),
        Some("sender is not the issuer".to_string())
    );
}

#[test]
fn failed_community_issuance_skips_donation() {
    let mut deps = setup_test();
    deps.querier.set_pool_liquidity(1, Uint128::new(5_000));
    start_distribution(&mut deps, 1, "uatom");
    reply(deps.as_mut(), mock_env(), accrue_reply("uatom", 100)).unwrap();

    let res =
        reply(deps.as_mut(), mock_env(), err_reply(COMMUNITY_ISSUE_REPLY_ID, "not the issuer"))
            .unwrap();
    assert!(res.messages.is_empty());
    assert_eq!(
        find_event_attr(&res.events, "mars/gauge/issuance_failed", "share"),
        Some("community".to_string())
    );
    assert!(PENDING_DISTRIBUTION.may_load(deps.as_ref().storage).unwrap().is_none());
}

#[test]
fn accrue_reply_without_data_rejected() {
    let mut deps = setup_test();
    deps.querier.set_pool_liquidity(1, Uint128::new(5_000));
    start_distribution(&mut deps, 1, "uatom");

    let err = reply(deps.as_mut(), mock_env(), ok_reply(1)).unwrap_err();
    assert_eq!(err, ContractError::ReplyError("accrue reward returned no data".to_string()));
}

#[test]
fn unknown_reply_id_rejected() {
    let mut deps = setup_test();

    let err = reply(deps.as_mut(), mock_env(), ok_reply(42)).unwrap_err();
    assert_eq!(err, ContractError::ReplyError("reply id 42 is not valid".to_string()));
}
