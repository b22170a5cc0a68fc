use common::Ownership;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::Stats;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// CW20 token; this contract must be its minter to receive transfers
    pub token: String,
    pub dispatcher: String,
    pub executor: String,
}

/// Application payload carried inside the relay envelope
#[cw_serde]
pub struct TransferPayload {
    pub sender: String,
    pub recipient: String,
    pub amount: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Burn `amount` from the caller (needs an allowance) and send it to
    /// `recipient` on `dest_chain_id`. Attached funds pay the delivery fee.
    SendRemote {
        dest_chain_id: u64,
        recipient: String,
        amount: Uint128,
    },
    /// Inbound transfer, called by the receiver adapter
    ReceiveMessage {
        payload: Binary,
        message_id: Binary,
        origin_chain_id: u64,
        origin_caller: String,
    },
    /// Owner: set the peer messenger per chain; empty clears
    SetRemoteMessengers {
        chain_ids: Vec<u64>,
        messengers: Vec<String>,
    },
    /// Owner: stop minting inbound transfers. Deliveries fail and can be
    /// retried after `Unpause`.
    Pause {},
    Unpause {},
    TransferOwnership {
        new_owner: String,
    },
    AcceptOwnership {},
    CancelOwnershipTransfer {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Ownership)]
    Ownership {},
    #[returns(RemoteMessengerResponse)]
    RemoteMessenger { chain_id: u64 },
    #[returns(Stats)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token: Addr,
    pub dispatcher: Addr,
    pub executor: Addr,
    pub paused: bool,
}

#[cw_serde]
pub struct RemoteMessengerResponse {
    pub chain_id: u64,
    /// Empty when no messenger is registered
    pub messenger: String,
}
