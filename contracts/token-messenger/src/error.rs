use common::{OwnershipError, RegistryError};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Unauthorized: only the executor can deliver transfers")]
    UnauthorizedExecutor,

    #[error("Unauthorized remote messenger {caller} for chain {chain_id}")]
    UnauthorizedRemote { chain_id: u64, caller: String },

    #[error("No remote messenger for chain {chain_id}")]
    UnknownRemote { chain_id: u64 },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Messenger is paused")]
    Paused,
}
