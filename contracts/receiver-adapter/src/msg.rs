//! Message types for the receiver adapter contract

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
    /// Optional verification module address
    pub verification_module: Option<String>,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Delivery
    // ========================================================================
    /// Deliver a relayed envelope.
    ///
    /// Authorization: Transport only. `origin_chain_id` and `origin_sender`
    /// are asserted by the transport.
    Execute {
        origin_chain_id: u64,
        origin_sender: String,
        body: Binary,
    },

    // ========================================================================
    // Origin Registry
    // ========================================================================
    /// Set the trusted sender adapter for origin chains. An empty adapter
    /// clears the entry.
    ///
    /// Authorization: Owner only
    SetTrustedOrigins {
        chain_ids: Vec<u64>,
        adapters: Vec<String>,
    },

    /// Set or clear the verification module.
    ///
    /// Authorization: Owner only
    SetVerificationModule { module: Option<String> },

    // ========================================================================
    // Ownership
    // ========================================================================
    TransferOwnership { new_owner: String },

    AcceptOwnership {},

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

    /// Trusted adapter for one origin chain; empty means "not registered"
    #[returns(TrustedOriginResponse)]
    TrustedOrigin { chain_id: u64 },

    #[returns(TrustedOriginsResponse)]
    TrustedOrigins {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(IsExecutedResponse)]
    IsExecuted { message_id: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub transport: Addr,
    pub verification_module: Option<Addr>,
}

#[cw_serde]
pub struct TrustedOriginResponse {
    pub chain_id: u64,
    pub sender_adapter: String,
}

#[cw_serde]
pub struct TrustedOriginsResponse {
    pub origins: Vec<RegistryEntry>,
}

#[cw_serde]
pub struct IsExecutedResponse {
    pub executed: bool,
    /// Block height of execution, when executed
    pub executed_at: Option<u64>,
}
