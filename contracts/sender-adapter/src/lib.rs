//! Sender Adapter Contract - Origin Side of the Relay
//!
//! Applications call `DispatchMessage` to have a payload delivered to a target
//! contract on another ledger. The adapter resolves the destination's receiver
//! adapter and transport chain name, derives a unique message id from its
//! nonce, wraps everything in an envelope, pays the transport and submits.
//!
//! # Dispatch Flow
//! 1. Check the destination has a registered receiver adapter
//! 2. Check the destination has a registered transport chain name
//! 3. Compute the message id from the current nonce, then increment it
//! 4. Pay the transport's delivery fee with the attached funds
//! 5. Submit the envelope to the transport
//!
//! Every step runs in one transaction: if the transport rejects the fee or
//! the submission, the nonce increment and dispatch record are reverted too.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
