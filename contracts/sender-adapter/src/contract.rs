//! Sender Adapter Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_dispatch_message, execute_set_chain_names, execute_set_routes};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_chain_names, query_compute_message_id, query_config, query_dispatch,
    query_dispatch_by_nonce, query_nonce, query_ownership, query_route, query_routes,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NONCE};
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

    initialize_owner(deps.storage, owner.clone())?;
    CONFIG.save(
        deps.storage,
        &Config {
            transport: transport.clone(),
            chain_id: msg.chain_id,
        },
    )?;
    NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("transport", transport)
        .add_attribute("chain_id", msg.chain_id.to_string()))
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
        ExecuteMsg::DispatchMessage {
            dest_chain_id,
            target,
            payload,
            refund_address,
        } => execute_dispatch_message(
            deps,
            env,
            info,
            dest_chain_id,
            target,
            payload,
            refund_address,
        ),

        // Destination registry
        ExecuteMsg::SetRoutes {
            chain_ids,
            adapters,
        } => execute_set_routes(deps, info, chain_ids, adapters),
        ExecuteMsg::SetChainNames { chain_ids, names } => {
            execute_set_chain_names(deps, info, chain_ids, names)
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
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::Route { chain_id } => to_json_binary(&query_route(deps, chain_id)?),
        QueryMsg::Routes { start_after, limit } => {
            to_json_binary(&query_routes(deps, start_after, limit)?)
        }
        QueryMsg::ChainNames { start_after, limit } => {
            to_json_binary(&query_chain_names(deps, start_after, limit)?)
        }
        QueryMsg::Nonce {} => to_json_binary(&query_nonce(deps)?),
        QueryMsg::Dispatch { message_id } => to_json_binary(&query_dispatch(deps, message_id)?),
        QueryMsg::DispatchByNonce { nonce } => {
            to_json_binary(&query_dispatch_by_nonce(deps, nonce)?)
        }
        QueryMsg::ComputeMessageId {
            dest_chain_id,
            nonce,
            target,
        } => to_json_binary(&query_compute_message_id(
            deps,
            env,
            dest_chain_id,
            nonce,
            target,
        )?),
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
