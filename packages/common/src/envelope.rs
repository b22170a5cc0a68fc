//! The envelope carried between a sender adapter and a receiver adapter.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, StdResult};

use crate::hash::parse_message_id;

/// Self-describing payload relayed by the transport.
///
/// Built once by the sender adapter and consumed once by the receiver adapter.
/// `origin_chain_id` and `origin_caller` are informational for the target: the
/// receiver adapter authenticates the origin from transport-supplied metadata
/// and only accepts an envelope whose `origin_chain_id` agrees with it.
#[cw_serde]
pub struct MessageEnvelope {
    /// Contract on the destination ledger that receives the call
    pub target: String,
    /// Opaque application payload
    pub payload: Binary,
    /// 32-byte message id
    pub message_id: Binary,
    /// Chain id of the ledger the message was dispatched from
    pub origin_chain_id: u64,
    /// Account that called `DispatchMessage` on the origin ledger
    pub origin_caller: String,
}

impl MessageEnvelope {
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    /// Decode an envelope and check the message id is well formed.
    pub fn decode(body: &Binary) -> StdResult<Self> {
        let envelope: MessageEnvelope = from_json(body)?;
        parse_message_id(&envelope.message_id)?;
        Ok(envelope)
    }

    /// The message id as a fixed-size array.
    pub fn id_bytes(&self) -> StdResult<[u8; 32]> {
        parse_message_id(&self.message_id)
    }
}
