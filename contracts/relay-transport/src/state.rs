use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:relay-transport";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Chain id of the ledger this transport endpoint lives on
    pub chain_id: u64,
    /// Name other transports use to address this ledger
    pub chain_name: String,
    /// Native denom delivery fees are paid in
    pub fee_denom: String,
    /// Receives collected fees
    pub fee_collector: Addr,
}

/// A payload accepted for delivery, in submission order
#[cw_serde]
pub struct OutboundMessage {
    pub sequence: u64,
    pub source_address: Addr,
    pub destination_chain: String,
    pub destination_address: String,
    pub payload: Binary,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Destination chain name -> delivery fee. Only listed chains are supported.
pub const FEES: Map<&str, Uint128> = Map::new("fees");

pub const RELAYERS: Map<&Addr, bool> = Map::new("relayers");

pub const OUTBOUND: Map<u64, OutboundMessage> = Map::new("outbound");

pub const OUTBOUND_COUNT: Item<u64> = Item::new("outbound_count");

/// Total fees forwarded to the collector
pub const FEES_COLLECTED: Item<Uint128> = Item::new("fees_collected");
