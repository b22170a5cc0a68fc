//! Common - Shared Types and Utilities for the Relay Adapter Contracts
//!
//! This package provides the pieces both sides of a relay agree on: the
//! message-id hash, the envelope, the message-level capability interfaces,
//! and the registry and ownership primitives the adapters are built from.

pub mod envelope;
pub mod events;
pub mod hash;
pub mod interfaces;
pub mod ownership;
pub mod registry;

pub use envelope::MessageEnvelope;
pub use hash::{bytes32_to_hex, compute_message_id, keccak256};
pub use interfaces::{
    DispatchResponse, DispatcherMsg, ExecutableMsg, ExecutorMsg, TransportMsg, VerifierQueryMsg,
    VerifyResponse,
};
pub use ownership::{Ownership, OwnershipError};
pub use registry::{ChainRegistry, RegistryEntry, RegistryError};
