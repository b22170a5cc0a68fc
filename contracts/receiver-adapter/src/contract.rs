//! Receiver Adapter Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers and the forward reply
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deliver, execute_set_trusted_origins, execute_set_verification_module,
    handle_forward_reply,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_is_executed, query_ownership, query_trusted_origin,
    query_trusted_origins,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NEXT_REPLY_ID};
use common::ownership::{
    accept_ownership, cancel_ownership_transfer, initialize_owner, transfer_ownership,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;

    if msg.transport.trim().is_empty() {
        return Err(ContractError::InvalidConfiguration {
            reason: "transport address must not be empty".to_string(),
        });
    }
    let transport = deps.api.addr_validate(&msg.transport)?;
    let verification_module = msg
        .verification_module
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    initialize_owner(deps.storage, owner.clone())?;
    CONFIG.save(
        deps.storage,
        &Config {
            transport: transport.clone(),
            verification_module,
        },
    )?;
    NEXT_REPLY_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("transport", transport))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Execute {
            origin_chain_id,
            origin_sender,
            body,
        } => execute_deliver(deps, env, info, origin_chain_id, origin_sender, body),

        // Origin registry
        ExecuteMsg::SetTrustedOrigins {
            chain_ids,
            adapters,
        } => execute_set_trusted_origins(deps, info, chain_ids, adapters),
        ExecuteMsg::SetVerificationModule { module } => {
            execute_set_verification_module(deps, info, module)
        }

        // Ownership
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(transfer_ownership(deps, &info, &new_owner)?)
        }
        ExecuteMsg::AcceptOwnership {} => Ok(accept_ownership(deps.storage, &info)?),
        ExecuteMsg::CancelOwnershipTransfer {} => {
            Ok(cancel_ownership_transfer(deps.storage, &info)?)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_forward_reply(deps, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::TrustedOrigin { chain_id } => {
            to_json_binary(&query_trusted_origin(deps, chain_id)?)
        }
        QueryMsg::TrustedOrigins { start_after, limit } => {
            to_json_binary(&query_trusted_origins(deps, start_after, limit)?)
        }
        QueryMsg::IsExecuted { message_id } => {
            to_json_binary(&query_is_executed(deps, message_id)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
