//! Events emitted by the adapters.
//!
//! These are the protocol's audit trail for off-chain observers; there is no
//! separate log store.

use cosmwasm_std::{Binary, Event};

use crate::hash::bytes32_to_hex;

pub const MESSAGE_DISPATCHED: &str = "message_dispatched";
pub const MESSAGE_EXECUTED: &str = "message_executed";
pub const ROUTE_UPDATED: &str = "route_updated";
pub const CHAIN_NAME_UPDATED: &str = "chain_name_updated";
pub const TRUSTED_ORIGIN_UPDATED: &str = "trusted_origin_updated";

pub fn message_dispatched_event(
    message_id: &[u8; 32],
    sender: &str,
    dest_chain_id: u64,
    target: &str,
    payload: &Binary,
) -> Event {
    Event::new(MESSAGE_DISPATCHED)
        .add_attribute("message_id", bytes32_to_hex(message_id))
        .add_attribute("sender", sender)
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("target", target)
        .add_attribute("payload", payload.to_base64())
}

pub fn message_executed_event(origin_chain_id: u64, message_id: &[u8; 32]) -> Event {
    Event::new(MESSAGE_EXECUTED)
        .add_attribute("origin_chain_id", origin_chain_id.to_string())
        .add_attribute("message_id", bytes32_to_hex(message_id))
}

pub fn registry_updated_event(event_type: &str, chain_id: u64, value: &str) -> Event {
    Event::new(event_type)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("value", value)
}
