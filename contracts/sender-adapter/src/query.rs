//! Query handlers for the sender adapter contract.

use cosmwasm_std::{Binary, Deps, Env, StdResult};

use crate::msg::{
    ChainNamesResponse, ConfigResponse, DispatchRecordResponse, MessageIdResponse, NonceResponse,
    RouteResponse, RoutesResponse,
};
use crate::state::{
    DispatchRecord, CHAIN_NAMES, CONFIG, DISPATCHES, DISPATCH_BY_NONCE, NONCE, ROUTES,
};
use common::hash::parse_message_id;
use common::ownership::OWNERSHIP;
use common::{compute_message_id, Ownership};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: ownership.owner,
        transport: config.transport,
        chain_id: config.chain_id,
    })
}

pub fn query_ownership(deps: Deps) -> StdResult<Ownership> {
    OWNERSHIP.load(deps.storage)
}

/// Query the route for one destination. Unregistered parts read as empty.
pub fn query_route(deps: Deps, chain_id: u64) -> StdResult<RouteResponse> {
    Ok(RouteResponse {
        chain_id,
        receiver_adapter: ROUTES.get(deps.storage, chain_id)?,
        chain_name: CHAIN_NAMES.get(deps.storage, chain_id)?,
    })
}

/// Query paginated list of routes.
pub fn query_routes(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RoutesResponse> {
    let routes = ROUTES
        .list(deps.storage, start_after, limit)?
        .into_iter()
        .map(|entry| {
            Ok(RouteResponse {
                chain_id: entry.chain_id,
                chain_name: CHAIN_NAMES.get(deps.storage, entry.chain_id)?,
                receiver_adapter: entry.value,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RoutesResponse { routes })
}

/// Query paginated list of chain names.
pub fn query_chain_names(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ChainNamesResponse> {
    Ok(ChainNamesResponse {
        chain_names: CHAIN_NAMES.list(deps.storage, start_after, limit)?,
    })
}

pub fn query_nonce(deps: Deps) -> StdResult<NonceResponse> {
    Ok(NonceResponse {
        nonce: NONCE.load(deps.storage)?,
    })
}

/// Query a dispatch record by message id.
pub fn query_dispatch(deps: Deps, message_id: Binary) -> StdResult<DispatchRecordResponse> {
    let id = parse_message_id(&message_id)?;
    let record = DISPATCHES.load(deps.storage, &id)?;
    Ok(to_response(id, record))
}

/// Query a dispatch record by nonce.
pub fn query_dispatch_by_nonce(deps: Deps, nonce: u64) -> StdResult<DispatchRecordResponse> {
    let id = DISPATCH_BY_NONCE.load(deps.storage, nonce)?;
    let record = DISPATCHES.load(deps.storage, &id)?;
    Ok(to_response(id, record))
}

/// Compute the message id for hypothetical parameters.
pub fn query_compute_message_id(
    deps: Deps,
    env: Env,
    dest_chain_id: u64,
    nonce: u64,
    target: String,
) -> StdResult<MessageIdResponse> {
    let config = CONFIG.load(deps.storage)?;
    let id = compute_message_id(
        config.chain_id,
        dest_chain_id,
        nonce,
        env.contract.address.as_str(),
        &target,
    );
    Ok(MessageIdResponse {
        message_id: Binary::from(id.to_vec()),
    })
}

fn to_response(id: [u8; 32], record: DispatchRecord) -> DispatchRecordResponse {
    DispatchRecordResponse {
        message_id: Binary::from(id.to_vec()),
        nonce: record.nonce,
        dest_chain_id: record.dest_chain_id,
        target: record.target,
        caller: record.caller,
        dispatched_at: record.dispatched_at,
    }
}
