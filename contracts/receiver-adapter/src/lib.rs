//! Receiver Adapter Contract - Destination Side of the Relay
//!
//! The transport's only permitted entry point on this ledger. Each delivery
//! passes through strictly ordered gates before the payload reaches its
//! target:
//!
//! 1. Caller must be the configured transport
//! 2. Body must decode into a well-formed envelope
//! 3. The transport-asserted origin must match the trusted origin registry
//! 4. The optional verification module must accept the message
//! 5. The message id must not already be executed (replay gate)
//! 6. The id is marked, and the target is called
//!
//! If the target call fails, the reply handler returns an error and the whole
//! transaction reverts, including the mark from step 6, so the message can be
//! delivered again once the target is fixed.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
