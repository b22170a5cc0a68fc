use common::OwnershipError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Unauthorized: caller is not a relayer")]
    UnauthorizedRelayer,

    #[error("Chain not supported: {chain}")]
    UnsupportedChain { chain: String },

    #[error("Insufficient fee: expected {expected} {denom}, got {got} {denom}")]
    InsufficientFee {
        expected: Uint128,
        got: Uint128,
        denom: String,
    },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },
}
