//! Transport entry point and forward reply.
//!
//! Per message id the adapter moves `Unseen -> Authorized -> Marked ->
//! Forwarded -> Completed`. Nothing is written until every gate up to the
//! replay check has passed, and the forward is the last step, so the only
//! state that a failed forward has to undo is the mark. That undo comes from
//! returning an error out of the reply, which reverts the transaction.

use cosmwasm_std::{
    Binary, DepsMut, Env, MessageInfo, Reply, Response, SubMsg, SubMsgResult,
};

use crate::error::ContractError;
use crate::state::{InFlight, CONFIG, EXECUTED, IN_FLIGHT, NEXT_REPLY_ID, TRUSTED_ORIGINS};
use common::events::message_executed_event;
use common::hash::parse_message_id;
use common::{bytes32_to_hex, ExecutorMsg, MessageEnvelope, VerifierQueryMsg, VerifyResponse};

/// Authenticate, deduplicate and forward a relayed envelope.
pub fn execute_deliver(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    origin_chain_id: u64,
    origin_sender: String,
    body: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.transport {
        return Err(ContractError::UnauthorizedTransport);
    }

    // Decode
    let envelope =
        MessageEnvelope::decode(&body).map_err(|e| ContractError::InvalidEnvelope {
            reason: e.to_string(),
        })?;
    let message_id = envelope.id_bytes()?;
    let message_id_hex = bytes32_to_hex(&message_id);
    let target =
        deps.api
            .addr_validate(&envelope.target)
            .map_err(|e| ContractError::InvalidEnvelope {
                reason: format!("target: {}", e),
            })?;

    // Authenticate the origin. Only the transport's assertion is trusted; the
    // envelope must agree with it.
    let trusted = TRUSTED_ORIGINS.get(deps.storage, origin_chain_id)?;
    if trusted.is_empty()
        || trusted != origin_sender
        || envelope.origin_chain_id != origin_chain_id
    {
        return Err(ContractError::UnauthorizedOrigin {
            chain_id: origin_chain_id,
            adapter: origin_sender,
        });
    }

    if let Some(module) = &config.verification_module {
        let verdict: VerifyResponse = deps.querier.query_wasm_smart(
            module,
            &VerifierQueryMsg::Verify {
                origin_chain_id,
                origin_sender: origin_sender.clone(),
                message_id: envelope.message_id.clone(),
            },
        )?;
        if !verdict.verified {
            return Err(ContractError::VerificationFailed {
                message_id: message_id_hex,
            });
        }
    }

    // Replay gate
    if EXECUTED.has(deps.storage, &message_id) {
        return Err(ContractError::AlreadyExecuted {
            message_id: message_id_hex,
        });
    }

    // Mark, then forward as the final step
    EXECUTED.save(deps.storage, &message_id, &env.block.height)?;

    let reply_id = NEXT_REPLY_ID.may_load(deps.storage)?.unwrap_or_default();
    NEXT_REPLY_ID.save(deps.storage, &(reply_id + 1))?;
    IN_FLIGHT.save(
        deps.storage,
        reply_id,
        &InFlight {
            message_id: envelope.message_id.clone(),
            origin_chain_id,
            target: target.clone(),
        },
    )?;

    let forward = ExecutorMsg::ReceiveMessage {
        payload: envelope.payload,
        message_id: envelope.message_id,
        origin_chain_id,
        origin_caller: envelope.origin_caller.clone(),
    }
    .into_cosmos_msg(&target)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(forward, reply_id))
        .add_attribute("action", "execute")
        .add_attribute("message_id", message_id_hex)
        .add_attribute("origin_chain_id", origin_chain_id.to_string())
        .add_attribute("origin_caller", envelope.origin_caller)
        .add_attribute("target", target))
}

/// Finish a forwarded call: emit completion on success, abort on failure.
pub fn handle_forward_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let in_flight = IN_FLIGHT
        .may_load(deps.storage, msg.id)?
        .ok_or(ContractError::UnknownReplyId { id: msg.id })?;
    IN_FLIGHT.remove(deps.storage, msg.id);

    let message_id = parse_message_id(&in_flight.message_id)?;

    match msg.result {
        SubMsgResult::Ok(_) => Ok(Response::new()
            .add_event(message_executed_event(
                in_flight.origin_chain_id,
                &message_id,
            ))
            .add_attribute("action", "message_executed")
            .add_attribute("message_id", bytes32_to_hex(&message_id))),
        // Returning an error reverts the whole execute, including the mark
        SubMsgResult::Err(reason) => Err(ContractError::ForwardingFailure {
            message_id: bytes32_to_hex(&message_id),
            reason,
        }),
    }
}
