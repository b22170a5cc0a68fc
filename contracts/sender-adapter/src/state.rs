//! State definitions for the sender adapter contract

use common::events::{CHAIN_NAME_UPDATED, ROUTE_UPDATED};
use common::ChainRegistry;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Transport contract that is paid and receives submissions
    pub transport: Addr,
    /// This ledger's chain id, used as the origin in message ids and envelopes
    pub chain_id: u64,
}

/// Record of an outbound message, kept so observers can verify a dispatch
/// happened on this side.
#[cw_serde]
pub struct DispatchRecord {
    /// Nonce consumed by this dispatch
    pub nonce: u64,
    /// Destination chain id
    pub dest_chain_id: u64,
    /// Target contract on the destination chain
    pub target: String,
    /// Account that called `DispatchMessage`
    pub caller: Addr,
    /// Block height of the dispatch
    pub dispatched_at: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:sender-adapter";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Next nonce to hand out; shared by every destination
pub const NONCE: Item<u64> = Item::new("nonce");

/// Destination chain id -> receiver adapter on that chain
pub const ROUTES: ChainRegistry = ChainRegistry::new("routes", ROUTE_UPDATED);

/// Destination chain id -> chain name understood by the transport
pub const CHAIN_NAMES: ChainRegistry = ChainRegistry::new("chain_names", CHAIN_NAME_UPDATED);

/// Dispatch records keyed by 32-byte message id
pub const DISPATCHES: Map<&[u8], DispatchRecord> = Map::new("dispatches");

/// Message id by nonce (for convenience lookups)
pub const DISPATCH_BY_NONCE: Map<u64, [u8; 32]> = Map::new("dispatch_by_nonce");
