//! Destination registry management.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CHAIN_NAMES, ROUTES};
use common::ownership::assert_owner;

/// Set receiver adapters for a batch of destination chains.
pub fn execute_set_routes(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    adapters: Vec<String>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let count = chain_ids.len();
    let events = ROUTES.set_batch(deps.storage, chain_ids, adapters)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "set_routes")
        .add_attribute("count", count.to_string()))
}

/// Set transport chain names for a batch of destination chains.
pub fn execute_set_chain_names(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    names: Vec<String>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let count = chain_ids.len();
    let events = CHAIN_NAMES.set_batch(deps.storage, chain_ids, names)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "set_chain_names")
        .add_attribute("count", count.to_string()))
}
