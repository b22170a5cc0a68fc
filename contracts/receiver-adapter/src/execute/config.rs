//! Origin registry and auxiliary policy management.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, TRUSTED_ORIGINS};
use common::ownership::assert_owner;

/// Set trusted sender adapters for a batch of origin chains.
pub fn execute_set_trusted_origins(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    adapters: Vec<String>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let count = chain_ids.len();
    let events = TRUSTED_ORIGINS.set_batch(deps.storage, chain_ids, adapters)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "set_trusted_origins")
        .add_attribute("count", count.to_string()))
}

/// Set or clear the verification module.
pub fn execute_set_verification_module(
    deps: DepsMut,
    info: MessageInfo,
    module: Option<String>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let module = module
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let mut config = CONFIG.load(deps.storage)?;
    config.verification_module = module.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_verification_module")
        .add_attribute(
            "module",
            module.map(|m| m.to_string()).unwrap_or_else(|| "none".to_string()),
        ))
}
