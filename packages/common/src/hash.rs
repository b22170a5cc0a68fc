//! Message-id computation
//!
//! Every outbound message is identified by a keccak256 hash over the origin
//! chain, the destination chain, the sender adapter's nonce, the sender
//! adapter's own address and the target address. The id doubles as the replay
//! key on the receiving side, so it must be reproducible from the envelope
//! fields alone by any off-chain observer.
//!
//! # Byte Layout (160 bytes total)
//! - Bytes 0-31:    origin chain id (uint256, big-endian, left-padded)
//! - Bytes 32-63:   destination chain id (uint256, big-endian, left-padded)
//! - Bytes 64-95:   nonce before increment (uint256, big-endian, left-padded)
//! - Bytes 96-127:  keccak256(sender adapter address, UTF-8)
//! - Bytes 128-159: keccak256(target address, UTF-8)
//!
//! Addresses are hashed in their string form because the two ledgers do not
//! share an address encoding.

use cosmwasm_std::{Binary, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Length in bytes of a message id.
pub const MESSAGE_ID_LEN: usize = 32;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode an address string as a 32-byte word
pub fn address_word(address: &str) -> [u8; 32] {
    keccak256(address.as_bytes())
}

/// Compute the message id for an outbound dispatch.
///
/// `nonce` is the sender adapter's counter value *before* it is incremented
/// for this dispatch.
pub fn compute_message_id(
    origin_chain_id: u64,
    dest_chain_id: u64,
    nonce: u64,
    sender_adapter: &str,
    target: &str,
) -> [u8; 32] {
    let mut data = [0u8; 160];

    data[24..32].copy_from_slice(&origin_chain_id.to_be_bytes());
    data[32 + 24..64].copy_from_slice(&dest_chain_id.to_be_bytes());
    data[64 + 24..96].copy_from_slice(&nonce.to_be_bytes());
    data[96..128].copy_from_slice(&address_word(sender_adapter));
    data[128..160].copy_from_slice(&address_word(target));

    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/events)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Interpret a `Binary` as a message id, rejecting anything but 32 bytes.
pub fn parse_message_id(message_id: &Binary) -> StdResult<[u8; 32]> {
    message_id.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid message id length: expected {} bytes, got {}",
            MESSAGE_ID_LEN,
            message_id.len()
        ))
    })
}
