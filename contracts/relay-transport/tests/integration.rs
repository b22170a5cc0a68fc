//! Integration tests for the relay transport using cw-multi-test.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw_multi_test::{App, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::ExecutableMsg;
use relay_transport::msg::{
    ConfigResponse, ExecuteMsg, FeeResponse, InstantiateMsg, IsRelayerResponse,
    OutboundCountResponse, QueryMsg,
};
use relay_transport::state::OutboundMessage;

const DENOM: &str = "uluna";

// ============================================================================
// Mock Receiver
// ============================================================================

#[cw_serde]
struct Delivered {
    origin_chain_id: u64,
    origin_sender: String,
    body: Binary,
    caller: Addr,
}

const LAST_DELIVERY: Item<Delivered> = Item::new("last_delivery");

fn receiver_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn receiver_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecutableMsg,
) -> StdResult<Response> {
    match msg {
        ExecutableMsg::Execute {
            origin_chain_id,
            origin_sender,
            body,
        } => {
            if body.as_slice() == b"reject" {
                return Err(StdError::generic_err("receiver rejected delivery"));
            }
            LAST_DELIVERY.save(
                deps.storage,
                &Delivered {
                    origin_chain_id,
                    origin_sender,
                    body,
                    caller: info.sender,
                },
            )?;
            Ok(Response::new())
        }
    }
}

fn receiver_query(deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    to_json_binary(&LAST_DELIVERY.may_load(deps.storage)?)
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_transport() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        relay_transport::contract::execute,
        relay_transport::contract::instantiate,
        relay_transport::contract::query,
    );
    Box::new(contract)
}

fn contract_receiver() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        receiver_execute,
        receiver_instantiate,
        receiver_query,
    ))
}

fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");
    let relayer = Addr::unchecked("relayer");
    let app_contract = Addr::unchecked("app_contract");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &app_contract,
                vec![Coin::new(1_000_000, DENOM), Coin::new(1_000, "uusd")],
            )
            .unwrap();
    });

    let code_id = app.store_code(contract_transport());
    let transport = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                chain_id: 2,
                chain_name: "chain-b".to_string(),
                fee_denom: DENOM.to_string(),
                fee_collector: None,
                relayers: vec![relayer.to_string()],
            },
            &[],
            "relay-transport",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        transport.clone(),
        &ExecuteMsg::SetFee {
            destination_chain: "chain-a".to_string(),
            amount: Uint128::new(100),
        },
        &[],
    )
    .unwrap();

    (app, transport, owner, relayer)
}

fn pay_msg(destination_chain: &str) -> ExecuteMsg {
    ExecuteMsg::PayDeliveryFee {
        sender: "app_contract".to_string(),
        destination_chain: destination_chain.to_string(),
        destination_address: "receiver_a".to_string(),
        payload: Binary::from(b"payload".to_vec()),
        refund_address: "app_contract".to_string(),
    }
}

// ============================================================================
// Fees
// ============================================================================

#[test]
fn test_fee_configuration() {
    let (mut app, transport, owner, _) = setup();

    let fee: FeeResponse = app
        .wrap()
        .query_wasm_smart(
            &transport,
            &QueryMsg::Fee {
                destination_chain: "chain-a".to_string(),
            },
        )
        .unwrap();
    assert_eq!(fee.amount, Some(Uint128::new(100)));

    let err = app
        .execute_contract(
            Addr::unchecked("mallory"),
            transport.clone(),
            &ExecuteMsg::SetFee {
                destination_chain: "chain-c".to_string(),
                amount: Uint128::zero(),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Unauthorized"));

    app.execute_contract(
        owner,
        transport.clone(),
        &ExecuteMsg::RemoveFee {
            destination_chain: "chain-a".to_string(),
        },
        &[],
    )
    .unwrap();
    let fee: FeeResponse = app
        .wrap()
        .query_wasm_smart(
            &transport,
            &QueryMsg::Fee {
                destination_chain: "chain-a".to_string(),
            },
        )
        .unwrap();
    assert_eq!(fee.amount, None);
}

#[test]
fn test_pay_delivery_fee_collects_and_refunds() {
    let (mut app, transport, _, _) = setup();
    let payer = Addr::unchecked("app_contract");

    app.execute_contract(payer.clone(), transport.clone(), &pay_msg("chain-a"), &coins(150, DENOM))
        .unwrap();

    // Collector defaults to the owner
    assert_eq!(
        app.wrap().query_balance("owner", DENOM).unwrap().amount,
        Uint128::new(100)
    );
    assert_eq!(
        app.wrap().query_balance(&payer, DENOM).unwrap().amount,
        Uint128::new(1_000_000 - 100)
    );

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&transport, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.fees_collected, Uint128::new(100));
    assert_eq!(config.fee_collector, Addr::unchecked("owner"));
}

#[test]
fn test_pay_delivery_fee_rejections() {
    let (mut app, transport, _, _) = setup();
    let payer = Addr::unchecked("app_contract");

    let err = app
        .execute_contract(payer.clone(), transport.clone(), &pay_msg("chain-z"), &coins(100, DENOM))
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Chain not supported: chain-z"));

    let err = app
        .execute_contract(payer.clone(), transport.clone(), &pay_msg("chain-a"), &coins(99, DENOM))
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Insufficient fee: expected 100 uluna, got 99 uluna"));

    let err = app
        .execute_contract(payer, transport, &pay_msg("chain-a"), &coins(100, "uusd"))
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid funds"));
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_records_outbound_in_order() {
    let (mut app, transport, _, _) = setup();
    let source = Addr::unchecked("app_contract");

    for payload in [b"one".as_slice(), b"two".as_slice()] {
        let res = app
            .execute_contract(
                source.clone(),
                transport.clone(),
                &ExecuteMsg::Submit {
                    destination_chain: "chain-a".to_string(),
                    destination_address: "receiver_a".to_string(),
                    payload: Binary::from(payload.to_vec()),
                },
                &[],
            )
            .unwrap();
        assert!(res.events.iter().any(|e| e.ty == "wasm-message_submitted"));
    }

    let count: OutboundCountResponse = app
        .wrap()
        .query_wasm_smart(&transport, &QueryMsg::OutboundCount {})
        .unwrap();
    assert_eq!(count.count, 2);

    let second: OutboundMessage = app
        .wrap()
        .query_wasm_smart(&transport, &QueryMsg::Outbound { sequence: 1 })
        .unwrap();
    assert_eq!(second.sequence, 1);
    assert_eq!(second.source_address, source);
    assert_eq!(second.payload, Binary::from(b"two".to_vec()));
}

#[test]
fn test_submit_unsupported_chain() {
    let (mut app, transport, _, _) = setup();

    let err = app
        .execute_contract(
            Addr::unchecked("app_contract"),
            transport,
            &ExecuteMsg::Submit {
                destination_chain: "chain-z".to_string(),
                destination_address: "receiver_z".to_string(),
                payload: Binary::default(),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Chain not supported"));
}

// ============================================================================
// Delivery
// ============================================================================

#[test]
fn test_deliver_invokes_receiver_with_origin() {
    let (mut app, transport, owner, relayer) = setup();
    let receiver_code = app.store_code(contract_receiver());
    let receiver = app
        .instantiate_contract(receiver_code, owner, &Empty {}, &[], "receiver", None)
        .unwrap();

    let res = app
        .execute_contract(
            relayer,
            transport.clone(),
            &ExecuteMsg::Deliver {
                origin_chain_id: 1,
                origin_sender: "sender_a".to_string(),
                destination_address: receiver.to_string(),
                payload: Binary::from(b"envelope".to_vec()),
            },
            &[],
        )
        .unwrap();
    assert!(res.events.iter().any(|e| e.ty == "wasm-message_delivered"));

    let delivered: Option<Delivered> = app
        .wrap()
        .query_wasm_smart(&receiver, &Empty {})
        .unwrap();
    assert_eq!(
        delivered,
        Some(Delivered {
            origin_chain_id: 1,
            origin_sender: "sender_a".to_string(),
            body: Binary::from(b"envelope".to_vec()),
            caller: transport,
        })
    );
}

#[test]
fn test_deliver_relayer_only() {
    let (mut app, transport, owner, relayer) = setup();
    let receiver_code = app.store_code(contract_receiver());
    let receiver = app
        .instantiate_contract(receiver_code, owner.clone(), &Empty {}, &[], "receiver", None)
        .unwrap();
    let deliver = ExecuteMsg::Deliver {
        origin_chain_id: 1,
        origin_sender: "sender_a".to_string(),
        destination_address: receiver.to_string(),
        payload: Binary::from(b"envelope".to_vec()),
    };

    let err = app
        .execute_contract(Addr::unchecked("mallory"), transport.clone(), &deliver, &[])
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Unauthorized: caller is not a relayer"));

    app.execute_contract(
        owner,
        transport.clone(),
        &ExecuteMsg::RemoveRelayer {
            address: relayer.to_string(),
        },
        &[],
    )
    .unwrap();
    let status: IsRelayerResponse = app
        .wrap()
        .query_wasm_smart(
            &transport,
            &QueryMsg::IsRelayer {
                address: relayer.to_string(),
            },
        )
        .unwrap();
    assert!(!status.is_relayer);

    let err = app
        .execute_contract(relayer, transport, &deliver, &[])
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("not a relayer"));
}

#[test]
fn test_rejected_delivery_reverts() {
    let (mut app, transport, owner, relayer) = setup();
    let receiver_code = app.store_code(contract_receiver());
    let receiver = app
        .instantiate_contract(receiver_code, owner, &Empty {}, &[], "receiver", None)
        .unwrap();

    let err = app
        .execute_contract(
            relayer,
            transport,
            &ExecuteMsg::Deliver {
                origin_chain_id: 1,
                origin_sender: "sender_a".to_string(),
                destination_address: receiver.to_string(),
                payload: Binary::from(b"reject".to_vec()),
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("receiver rejected delivery"));

    let delivered: Option<Delivered> = app
        .wrap()
        .query_wasm_smart(&receiver, &Empty {})
        .unwrap();
    assert_eq!(delivered, None);
}
