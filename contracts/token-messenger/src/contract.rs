use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, Event,
    MessageInfo, Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use common::hash::parse_message_id;
use common::ownership::{
    accept_ownership, assert_owner, cancel_ownership_transfer, initialize_owner,
    transfer_ownership, OWNERSHIP,
};
use common::{bytes32_to_hex, DispatcherMsg};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RemoteMessengerResponse,
    TransferPayload,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, PAUSED, REMOTE_MESSENGERS, STATS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let config = Config {
        token: deps.api.addr_validate(&msg.token)?,
        dispatcher: deps.api.addr_validate(&msg.dispatcher)?,
        executor: deps.api.addr_validate(&msg.executor)?,
    };

    initialize_owner(deps.storage, owner.clone())?;
    CONFIG.save(deps.storage, &config)?;
    PAUSED.save(deps.storage, &false)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("token", config.token)
        .add_attribute("dispatcher", config.dispatcher)
        .add_attribute("executor", config.executor))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendRemote {
            dest_chain_id,
            recipient,
            amount,
        } => execute_send_remote(deps, info, dest_chain_id, recipient, amount),
        ExecuteMsg::ReceiveMessage {
            payload,
            message_id,
            origin_chain_id,
            origin_caller,
        } => execute_receive_message(
            deps,
            info,
            payload,
            message_id,
            origin_chain_id,
            origin_caller,
        ),
        ExecuteMsg::SetRemoteMessengers {
            chain_ids,
            messengers,
        } => execute_set_remote_messengers(deps, info, chain_ids, messengers),
        ExecuteMsg::Pause {} => execute_set_paused(deps, info, true),
        ExecuteMsg::Unpause {} => execute_set_paused(deps, info, false),
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(transfer_ownership(deps, &info, &new_owner)?)
        }
        ExecuteMsg::AcceptOwnership {} => Ok(accept_ownership(deps.storage, &info)?),
        ExecuteMsg::CancelOwnershipTransfer {} => {
            Ok(cancel_ownership_transfer(deps.storage, &info)?)
        }
    }
}

fn execute_send_remote(
    deps: DepsMut,
    info: MessageInfo,
    dest_chain_id: u64,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if PAUSED.load(deps.storage)? {
        return Err(ContractError::Paused);
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let remote = REMOTE_MESSENGERS.get(deps.storage, dest_chain_id)?;
    if remote.is_empty() {
        return Err(ContractError::UnknownRemote {
            chain_id: dest_chain_id,
        });
    }

    let config = CONFIG.load(deps.storage)?;

    let burn_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    let payload = to_json_binary(&TransferPayload {
        sender: info.sender.to_string(),
        recipient: recipient.clone(),
        amount,
    })?;
    let dispatch_msg = DispatcherMsg::DispatchMessage {
        dest_chain_id,
        target: remote.clone(),
        payload,
        refund_address: Some(info.sender.to_string()),
    }
    .into_cosmos_msg(&config.dispatcher, info.funds)?;

    STATS.update(deps.storage, |mut stats| -> StdResult<_> {
        stats.sent_count += 1;
        stats.sent_amount += amount;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_message(burn_msg)
        .add_message(dispatch_msg)
        .add_event(
            Event::new("tokens_sent")
                .add_attribute("sender", info.sender)
                .add_attribute("dest_chain_id", dest_chain_id.to_string())
                .add_attribute("remote_messenger", remote)
                .add_attribute("recipient", recipient)
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "send_remote"))
}

fn execute_receive_message(
    deps: DepsMut,
    info: MessageInfo,
    payload: Binary,
    message_id: Binary,
    origin_chain_id: u64,
    origin_caller: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.executor {
        return Err(ContractError::UnauthorizedExecutor);
    }

    let remote = REMOTE_MESSENGERS.get(deps.storage, origin_chain_id)?;
    if remote.is_empty() || remote != origin_caller {
        return Err(ContractError::UnauthorizedRemote {
            chain_id: origin_chain_id,
            caller: origin_caller,
        });
    }

    if PAUSED.load(deps.storage)? {
        return Err(ContractError::Paused);
    }

    let message_id = parse_message_id(&message_id)?;
    let transfer: TransferPayload = from_json(&payload)?;
    if transfer.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let recipient = deps.api.addr_validate(&transfer.recipient)?;

    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount: transfer.amount,
        })?,
        funds: vec![],
    });

    STATS.update(deps.storage, |mut stats| -> StdResult<_> {
        stats.received_count += 1;
        stats.received_amount += transfer.amount;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_message(mint_msg)
        .add_event(
            Event::new("tokens_received")
                .add_attribute("message_id", bytes32_to_hex(&message_id))
                .add_attribute("origin_chain_id", origin_chain_id.to_string())
                .add_attribute("sender", transfer.sender)
                .add_attribute("recipient", recipient)
                .add_attribute("amount", transfer.amount),
        )
        .add_attribute("action", "receive_message"))
}

fn execute_set_remote_messengers(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    messengers: Vec<String>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let count = chain_ids.len();
    let events = REMOTE_MESSENGERS.set_batch(deps.storage, chain_ids, messengers)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "set_remote_messengers")
        .add_attribute("count", count.to_string()))
}

fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    PAUSED.save(deps.storage, &paused)?;

    Ok(Response::new().add_attribute("action", if paused { "pause" } else { "unpause" }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&OWNERSHIP.load(deps.storage)?),
        QueryMsg::RemoteMessenger { chain_id } => to_json_binary(&RemoteMessengerResponse {
            chain_id,
            messenger: REMOTE_MESSENGERS.get(deps.storage, chain_id)?,
        }),
        QueryMsg::Stats {} => to_json_binary(&STATS.load(deps.storage)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: OWNERSHIP.load(deps.storage)?.owner,
        token: config.token,
        dispatcher: config.dispatcher,
        executor: config.executor,
        paused: PAUSED.load(deps.storage)?,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
