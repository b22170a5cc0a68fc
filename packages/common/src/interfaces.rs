//! Message-level capability interfaces between applications, adapters and
//! transports.
//!
//! Each side depends only on these enums, never on a concrete contract's
//! `ExecuteMsg`. A contract that implements a capability accepts the matching
//! variant(s) in its own `ExecuteMsg` with the same name and fields, so the
//! JSON encoding is interchangeable.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Binary, Coin, CosmosMsg, StdResult, WasmMsg};

/// Implemented by a sender adapter; called by applications.
#[cw_serde]
pub enum DispatcherMsg {
    /// Relay `payload` to `target` on `dest_chain_id`.
    ///
    /// Attached funds pay the transport's delivery fee. Any excess is refunded
    /// to `refund_address`, or to the caller when unset.
    DispatchMessage {
        dest_chain_id: u64,
        target: String,
        payload: Binary,
        refund_address: Option<String>,
    },
}

impl DispatcherMsg {
    pub fn into_cosmos_msg(
        self,
        dispatcher: impl Into<String>,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: dispatcher.into(),
            msg: to_json_binary(&self)?,
            funds,
        }
        .into())
    }
}

/// Response data returned by a successful `DispatchMessage`.
#[cw_serde]
pub struct DispatchResponse {
    pub message_id: Binary,
    pub nonce: u64,
}

/// Implemented by a target application; called by a receiver adapter.
///
/// The appended metadata lets the target authenticate the provenance of the
/// payload on its own.
#[cw_serde]
pub enum ExecutorMsg {
    ReceiveMessage {
        payload: Binary,
        message_id: Binary,
        origin_chain_id: u64,
        origin_caller: String,
    },
}

impl ExecutorMsg {
    pub fn into_cosmos_msg(self, target: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: target.into(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }
        .into())
    }
}

/// Implemented by a receiver adapter; called by the transport on delivery.
///
/// `origin_chain_id` and `origin_sender` are asserted by the transport, which
/// is the only principal allowed to call this entry point.
#[cw_serde]
pub enum ExecutableMsg {
    Execute {
        origin_chain_id: u64,
        origin_sender: String,
        body: Binary,
    },
}

impl ExecutableMsg {
    pub fn into_cosmos_msg(self, receiver: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: receiver.into(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }
        .into())
    }
}

/// Implemented by a transport; called by a sender adapter.
#[cw_serde]
pub enum TransportMsg {
    /// Pay for delivery of a payload. Payable.
    PayDeliveryFee {
        sender: String,
        destination_chain: String,
        destination_address: String,
        payload: Binary,
        refund_address: String,
    },
    /// Accept an outbound payload for delivery.
    Submit {
        destination_chain: String,
        destination_address: String,
        payload: Binary,
    },
}

impl TransportMsg {
    pub fn into_cosmos_msg(
        self,
        transport: impl Into<String>,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: transport.into(),
            msg: to_json_binary(&self)?,
            funds,
        }
        .into())
    }
}

/// Queried by a receiver adapter when a verification module is configured.
#[cw_serde]
#[derive(QueryResponses)]
pub enum VerifierQueryMsg {
    #[returns(VerifyResponse)]
    Verify {
        origin_chain_id: u64,
        origin_sender: String,
        message_id: Binary,
    },
}

#[cw_serde]
pub struct VerifyResponse {
    pub verified: bool,
}
