//! Message types for the sender adapter contract

use common::{Ownership, RegistryEntry};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for registry management
    pub owner: String,
    /// Transport contract address (must be non-empty)
    pub transport: String,
    /// This ledger's chain id
    pub chain_id: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Dispatch
    // ========================================================================
    /// Relay a payload to `target` on `dest_chain_id`.
    ///
    /// Authorization: Anyone. Attached funds pay the delivery fee.
    DispatchMessage {
        dest_chain_id: u64,
        target: String,
        payload: Binary,
        /// Receives any fee overpayment; defaults to the caller
        refund_address: Option<String>,
    },

    // ========================================================================
    // Destination Registry
    // ========================================================================
    /// Set receiver adapters for destination chains. An empty adapter clears
    /// the route.
    ///
    /// Authorization: Owner only
    SetRoutes {
        chain_ids: Vec<u64>,
        adapters: Vec<String>,
    },

    /// Set transport chain names for destination chains.
    ///
    /// Authorization: Owner only
    SetChainNames {
        chain_ids: Vec<u64>,
        names: Vec<String>,
    },

    // ========================================================================
    // Ownership
    // ========================================================================
    /// Propose a new owner
    TransferOwnership { new_owner: String },

    /// Accept a pending ownership transfer (proposed owner only)
    AcceptOwnership {},

    /// Withdraw a pending ownership transfer
    CancelOwnershipTransfer {},
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(Ownership)]
    Ownership {},

    /// Route for one destination; empty fields mean "not registered"
    #[returns(RouteResponse)]
    Route { chain_id: u64 },

    /// Paginated list of destinations with a registered receiver adapter
    #[returns(RoutesResponse)]
    Routes {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Paginated list of registered chain names
    #[returns(ChainNamesResponse)]
    ChainNames {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Nonce the next dispatch will use
    #[returns(NonceResponse)]
    Nonce {},

    #[returns(DispatchRecordResponse)]
    Dispatch { message_id: Binary },

    #[returns(DispatchRecordResponse)]
    DispatchByNonce { nonce: u64 },

    /// Compute the message id a dispatch would get, without dispatching
    #[returns(MessageIdResponse)]
    ComputeMessageId {
        dest_chain_id: u64,
        nonce: u64,
        target: String,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub transport: Addr,
    pub chain_id: u64,
}

#[cw_serde]
pub struct RouteResponse {
    pub chain_id: u64,
    pub receiver_adapter: String,
    pub chain_name: String,
}

#[cw_serde]
pub struct RoutesResponse {
    pub routes: Vec<RouteResponse>,
}

#[cw_serde]
pub struct ChainNamesResponse {
    pub chain_names: Vec<RegistryEntry>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct DispatchRecordResponse {
    pub message_id: Binary,
    pub nonce: u64,
    pub dest_chain_id: u64,
    pub target: String,
    pub caller: Addr,
    pub dispatched_at: u64,
}

#[cw_serde]
pub struct MessageIdResponse {
    pub message_id: Binary,
}
