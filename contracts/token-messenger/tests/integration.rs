//! Integration tests for the token messenger on its own.
//!
//! The receiver adapter is played by a plain `executor` account so inbound
//! checks can be exercised without a relay.

use cosmwasm_std::{to_json_binary, Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use token_messenger::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RemoteMessengerResponse,
    TransferPayload,
};
use token_messenger::state::Stats;

const REMOTE_CHAIN: u64 = 2;
const REMOTE_MESSENGER: &str = "remote_messenger";

fn contract_messenger() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        token_messenger::contract::execute,
        token_messenger::contract::instantiate,
        token_messenger::contract::query,
    ))
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");

    let cw20_code = app.store_code(contract_cw20());
    let messenger_code = app.store_code(contract_messenger());

    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Relay Token".to_string(),
                symbol: "RLY".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: Some(MinterResponse {
                    minter: owner.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "token",
            None,
        )
        .unwrap();

    let messenger = app
        .instantiate_contract(
            messenger_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                token: token.to_string(),
                dispatcher: "dispatcher".to_string(),
                executor: "executor".to_string(),
            },
            &[],
            "token-messenger",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        token.clone(),
        &Cw20ExecuteMsg::UpdateMinter {
            new_minter: Some(messenger.to_string()),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        owner.clone(),
        messenger.clone(),
        &ExecuteMsg::SetRemoteMessengers {
            chain_ids: vec![REMOTE_CHAIN],
            messengers: vec![REMOTE_MESSENGER.to_string()],
        },
        &[],
    )
    .unwrap();

    (app, owner, token, messenger)
}

fn inbound(recipient: &str, amount: u128, origin_caller: &str) -> ExecuteMsg {
    ExecuteMsg::ReceiveMessage {
        payload: to_json_binary(&TransferPayload {
            sender: "remote_alice".to_string(),
            recipient: recipient.to_string(),
            amount: Uint128::new(amount),
        })
        .unwrap(),
        message_id: Binary::from(vec![7u8; 32]),
        origin_chain_id: REMOTE_CHAIN,
        origin_caller: origin_caller.to_string(),
    }
}

fn receive(
    app: &mut App,
    messenger: &Addr,
    caller: &str,
    msg: &ExecuteMsg,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(Addr::unchecked(caller), messenger.clone(), msg, &[])
}

fn balance(app: &App, token: &Addr, address: &str) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

#[test]
fn test_instantiate_config() {
    let (app, owner, token, messenger) = setup();
    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&messenger, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.owner, owner);
    assert_eq!(config.token, token);
    assert_eq!(config.dispatcher, Addr::unchecked("dispatcher"));
    assert_eq!(config.executor, Addr::unchecked("executor"));
    assert!(!config.paused);

    let remote: RemoteMessengerResponse = app
        .wrap()
        .query_wasm_smart(
            &messenger,
            &QueryMsg::RemoteMessenger {
                chain_id: REMOTE_CHAIN,
            },
        )
        .unwrap();
    assert_eq!(remote.messenger, REMOTE_MESSENGER);
}

#[test]
fn test_receive_mints_to_recipient() {
    let (mut app, _, token, messenger) = setup();

    let res = receive(
        &mut app,
        &messenger,
        "executor",
        &inbound("bob", 500, REMOTE_MESSENGER),
    )
    .unwrap();
    assert!(res.events.iter().any(|e| e.ty == "wasm-tokens_received"));
    assert_eq!(balance(&app, &token, "bob"), Uint128::new(500));

    let stats: Stats = app
        .wrap()
        .query_wasm_smart(&messenger, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.received_count, 1);
    assert_eq!(stats.received_amount, Uint128::new(500));
}

#[test]
fn test_receive_requires_executor() {
    let (mut app, _, token, messenger) = setup();

    let err = receive(
        &mut app,
        &messenger,
        "mallory",
        &inbound("bob", 500, REMOTE_MESSENGER),
    )
    .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Unauthorized: only the executor"));
    assert_eq!(balance(&app, &token, "bob"), Uint128::zero());
}

#[test]
fn test_receive_requires_registered_remote() {
    let (mut app, _, token, messenger) = setup();

    let err = receive(
        &mut app,
        &messenger,
        "executor",
        &inbound("bob", 500, "remote_impostor"),
    )
    .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Unauthorized remote messenger remote_impostor for chain 2"));
    assert_eq!(balance(&app, &token, "bob"), Uint128::zero());
}

#[test]
fn test_pause_blocks_receive_until_unpaused() {
    let (mut app, owner, token, messenger) = setup();

    let err = app
        .execute_contract(
            Addr::unchecked("mallory"),
            messenger.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Unauthorized"));

    app.execute_contract(owner.clone(), messenger.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    let msg = inbound("bob", 500, REMOTE_MESSENGER);
    let err = receive(&mut app, &messenger, "executor", &msg).unwrap_err();
    assert!(err.root_cause().to_string().contains("Messenger is paused"));

    app.execute_contract(owner, messenger.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap();
    receive(&mut app, &messenger, "executor", &msg).unwrap();
    assert_eq!(balance(&app, &token, "bob"), Uint128::new(500));
}

#[test]
fn test_send_remote_rejections() {
    let (mut app, _, _, messenger) = setup();

    let err = app
        .execute_contract(
            Addr::unchecked("alice"),
            messenger.clone(),
            &ExecuteMsg::SendRemote {
                dest_chain_id: 9,
                recipient: "bob".to_string(),
                amount: Uint128::new(10),
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("No remote messenger for chain 9"));

    let err = app
        .execute_contract(
            Addr::unchecked("alice"),
            messenger,
            &ExecuteMsg::SendRemote {
                dest_chain_id: REMOTE_CHAIN,
                recipient: "bob".to_string(),
                amount: Uint128::zero(),
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Amount must be greater than zero"));
}

#[test]
fn test_set_remote_messengers_length_mismatch() {
    let (mut app, owner, _, messenger) = setup();

    let err = app
        .execute_contract(
            owner,
            messenger.clone(),
            &ExecuteMsg::SetRemoteMessengers {
                chain_ids: vec![3, 4],
                messengers: vec!["m3".to_string()],
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Configuration error: 2 chain ids but 1 values"));

    let remote: RemoteMessengerResponse = app
        .wrap()
        .query_wasm_smart(&messenger, &QueryMsg::RemoteMessenger { chain_id: 3 })
        .unwrap();
    assert_eq!(remote.messenger, "");
}
