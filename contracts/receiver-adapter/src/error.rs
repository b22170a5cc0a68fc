//! Error types for the receiver adapter contract

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

    #[error("Unauthorized: only the transport can deliver messages")]
    UnauthorizedTransport,

    #[error("Unauthorized adapter {adapter} for origin chain {chain_id}")]
    UnauthorizedOrigin { chain_id: u64, adapter: String },

    #[error("Verification failed for message {message_id}")]
    VerificationFailed { message_id: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {reason}")]
    InvalidConfiguration { reason: String },

    // ========================================================================
    // Execution Errors
    // ========================================================================

    #[error("Invalid envelope: {reason}")]
    InvalidEnvelope { reason: String },

    #[error("Message already executed: {message_id}")]
    AlreadyExecuted { message_id: String },

    #[error("Forwarding failed for message {message_id}: {reason}")]
    ForwardingFailure { message_id: String, reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
