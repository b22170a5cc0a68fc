use common::Ownership;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::OutboundMessage;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub chain_id: u64,
    pub chain_name: String,
    pub fee_denom: String,
    /// Defaults to the owner
    pub fee_collector: Option<String>,
    pub relayers: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pay for delivery of `payload`. Excess funds go to `refund_address`.
    PayDeliveryFee {
        sender: String,
        destination_chain: String,
        destination_address: String,
        payload: Binary,
        refund_address: String,
    },
    /// Accept `payload` for delivery to `destination_address` on
    /// `destination_chain`.
    Submit {
        destination_chain: String,
        destination_address: String,
        payload: Binary,
    },
    /// Hand a relayed payload to its receiver on this ledger (relayer only).
    Deliver {
        origin_chain_id: u64,
        origin_sender: String,
        destination_address: String,
        payload: Binary,
    },
    /// Set the delivery fee for a destination chain (owner only). Listing a
    /// chain here is what makes it supported.
    SetFee {
        destination_chain: String,
        amount: Uint128,
    },
    RemoveFee {
        destination_chain: String,
    },
    AddRelayer {
        address: String,
    },
    RemoveRelayer {
        address: String,
    },
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
    #[returns(FeeResponse)]
    Fee { destination_chain: String },
    #[returns(OutboundMessage)]
    Outbound { sequence: u64 },
    #[returns(OutboundCountResponse)]
    OutboundCount {},
    #[returns(IsRelayerResponse)]
    IsRelayer { address: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub chain_id: u64,
    pub chain_name: String,
    pub fee_denom: String,
    pub fee_collector: Addr,
    pub fees_collected: Uint128,
}

#[cw_serde]
pub struct FeeResponse {
    pub destination_chain: String,
    /// `None` when the chain is not supported
    pub amount: Option<Uint128>,
}

#[cw_serde]
pub struct OutboundCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct IsRelayerResponse {
    pub is_relayer: bool,
}
