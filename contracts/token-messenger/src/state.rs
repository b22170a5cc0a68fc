use common::ChainRegistry;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:token-messenger";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REMOTE_MESSENGER_UPDATED: &str = "remote_messenger_updated";

#[cw_serde]
pub struct Config {
    /// CW20 token burned on send and minted on receive
    pub token: Addr,
    /// Sender adapter outbound transfers go through
    pub dispatcher: Addr,
    /// Receiver adapter allowed to deliver inbound transfers
    pub executor: Addr,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub sent_count: u64,
    pub sent_amount: Uint128,
    pub received_count: u64,
    pub received_amount: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const PAUSED: Item<bool> = Item::new("paused");

pub const STATS: Item<Stats> = Item::new("stats");

/// Chain id -> messenger contract on that chain
pub const REMOTE_MESSENGERS: ChainRegistry =
    ChainRegistry::new("remote_messengers", REMOTE_MESSENGER_UPDATED);
