//! State definitions for the receiver adapter contract

use common::events::TRUSTED_ORIGIN_UPDATED;
use common::ChainRegistry;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// The only principal allowed to call `Execute`
    pub transport: Addr,
    /// Optional module consulted before a message is accepted
    pub verification_module: Option<Addr>,
}

/// A forwarded message, read back in the reply handler
#[cw_serde]
pub struct InFlight {
    pub message_id: Binary,
    pub origin_chain_id: u64,
    pub target: Addr,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:receiver-adapter";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Origin chain id -> the single sender adapter trusted on that chain
pub const TRUSTED_ORIGINS: ChainRegistry =
    ChainRegistry::new("trusted_origins", TRUSTED_ORIGIN_UPDATED);

/// Executed message ids -> block height of execution. Never pruned.
pub const EXECUTED: Map<&[u8], u64> = Map::new("executed");

/// Forwarded calls awaiting their reply, keyed by reply id
pub const IN_FLIGHT: Map<u64, InFlight> = Map::new("in_flight");

/// Next reply id to hand out
pub const NEXT_REPLY_ID: Item<u64> = Item::new("next_reply_id");
