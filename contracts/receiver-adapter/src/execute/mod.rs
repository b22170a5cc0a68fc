//! Execute handlers for the receiver adapter contract.
//!
//! - `deliver` - the transport entry point and the forward reply
//! - `config` - origin registry and verification module management

mod config;
mod deliver;

pub use config::*;
pub use deliver::*;
