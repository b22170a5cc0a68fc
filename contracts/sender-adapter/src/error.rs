//! Error types for the sender adapter contract

use common::{OwnershipError, RegistryError};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {reason}")]
    InvalidConfiguration { reason: String },

    // ========================================================================
    // Dispatch Errors
    // ========================================================================

    #[error("Route not found: no adapter for destination chain {chain_id}")]
    NoAdapterForDestination { chain_id: u64 },

    #[error("Route not found: unknown destination chain {chain_id}")]
    UnknownDestinationChain { chain_id: u64 },

    #[error("Invalid target: {reason}")]
    InvalidTarget { reason: String },
}
