//! Execute handlers for the sender adapter contract.
//!
//! - `dispatch` - outbound message dispatch
//! - `config` - destination registry management

mod config;
mod dispatch;

pub use config::*;
pub use dispatch::*;
