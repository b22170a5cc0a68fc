//! Token Messenger - Demo Application on the Relay Adapters
//!
//! Burns CW20 tokens from the caller on the origin ledger and dispatches a
//! transfer payload to the messenger on the destination ledger, which mints
//! the same amount to the recipient once the receiver adapter forwards it.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
