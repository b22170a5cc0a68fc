//! Query handlers for the receiver adapter contract.

use cosmwasm_std::{Binary, Deps, StdResult};

use crate::msg::{ConfigResponse, IsExecutedResponse, TrustedOriginResponse, TrustedOriginsResponse};
use crate::state::{CONFIG, EXECUTED, TRUSTED_ORIGINS};
use common::hash::parse_message_id;
use common::ownership::OWNERSHIP;
use common::Ownership;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: ownership.owner,
        transport: config.transport,
        verification_module: config.verification_module,
    })
}

pub fn query_ownership(deps: Deps) -> StdResult<Ownership> {
    OWNERSHIP.load(deps.storage)
}

pub fn query_trusted_origin(deps: Deps, chain_id: u64) -> StdResult<TrustedOriginResponse> {
    Ok(TrustedOriginResponse {
        chain_id,
        sender_adapter: TRUSTED_ORIGINS.get(deps.storage, chain_id)?,
    })
}

pub fn query_trusted_origins(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TrustedOriginsResponse> {
    Ok(TrustedOriginsResponse {
        origins: TRUSTED_ORIGINS.list(deps.storage, start_after, limit)?,
    })
}

/// Whether a message id has been executed, and at which height.
pub fn query_is_executed(deps: Deps, message_id: Binary) -> StdResult<IsExecutedResponse> {
    let id = parse_message_id(&message_id)?;
    let executed_at = EXECUTED.may_load(deps.storage, &id)?;
    Ok(IsExecutedResponse {
        executed: executed_at.is_some(),
        executed_at,
    })
}
