//! Outbound dispatch handler.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{
    DispatchRecord, CHAIN_NAMES, CONFIG, DISPATCHES, DISPATCH_BY_NONCE, NONCE, ROUTES,
};
use common::events::message_dispatched_event;
use common::{bytes32_to_hex, compute_message_id, DispatchResponse, MessageEnvelope, TransportMsg};

/// Relay `payload` to `target` on `dest_chain_id` through the transport.
///
/// Both route checks run before any state is touched. The fee payment and the
/// submission are sub-messages of this call, so a transport failure reverts
/// the nonce increment and the dispatch record with it.
pub fn execute_dispatch_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dest_chain_id: u64,
    target: String,
    payload: Binary,
    refund_address: Option<String>,
) -> Result<Response, ContractError> {
    let receiver_adapter = ROUTES.get(deps.storage, dest_chain_id)?;
    if receiver_adapter.is_empty() {
        return Err(ContractError::NoAdapterForDestination {
            chain_id: dest_chain_id,
        });
    }

    let chain_name = CHAIN_NAMES.get(deps.storage, dest_chain_id)?;
    if chain_name.is_empty() {
        return Err(ContractError::UnknownDestinationChain {
            chain_id: dest_chain_id,
        });
    }

    if target.trim().is_empty() {
        return Err(ContractError::InvalidTarget {
            reason: "target must not be empty".to_string(),
        });
    }

    let refund_address = match refund_address {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender.clone(),
    };

    let config = CONFIG.load(deps.storage)?;

    // Id from the nonce before increment
    let nonce = NONCE.load(deps.storage)?;
    let message_id = compute_message_id(
        config.chain_id,
        dest_chain_id,
        nonce,
        env.contract.address.as_str(),
        &target,
    );
    NONCE.save(deps.storage, &(nonce + 1))?;

    let envelope = MessageEnvelope {
        target: target.clone(),
        payload: payload.clone(),
        message_id: Binary::from(message_id.to_vec()),
        origin_chain_id: config.chain_id,
        origin_caller: info.sender.to_string(),
    };
    let body = envelope.encode()?;

    DISPATCHES.save(
        deps.storage,
        &message_id,
        &DispatchRecord {
            nonce,
            dest_chain_id,
            target: target.clone(),
            caller: info.sender.clone(),
            dispatched_at: env.block.height,
        },
    )?;
    DISPATCH_BY_NONCE.save(deps.storage, nonce, &message_id)?;

    let pay_fee = TransportMsg::PayDeliveryFee {
        sender: env.contract.address.to_string(),
        destination_chain: chain_name.clone(),
        destination_address: receiver_adapter.clone(),
        payload: body.clone(),
        refund_address: refund_address.to_string(),
    }
    .into_cosmos_msg(&config.transport, info.funds.clone())?;

    let submit = TransportMsg::Submit {
        destination_chain: chain_name.clone(),
        destination_address: receiver_adapter.clone(),
        payload: body,
    }
    .into_cosmos_msg(&config.transport, vec![])?;

    let data = to_json_binary(&DispatchResponse {
        message_id: envelope.message_id,
        nonce,
    })?;

    Ok(Response::new()
        .add_message(pay_fee)
        .add_message(submit)
        .add_event(message_dispatched_event(
            &message_id,
            info.sender.as_str(),
            dest_chain_id,
            &target,
            &payload,
        ))
        .set_data(data)
        .add_attribute("action", "dispatch_message")
        .add_attribute("message_id", bytes32_to_hex(&message_id))
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("chain_name", chain_name)
        .add_attribute("receiver_adapter", receiver_adapter))
}
