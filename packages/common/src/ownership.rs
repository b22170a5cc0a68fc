//! Owner management shared by every contract in the workspace.
//!
//! Ownership moves in two steps: the current owner proposes a new owner, and
//! the proposed account accepts. The owner can withdraw a proposal until it is
//! accepted.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, StdError, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

/// Owner storage, one per contract
pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

#[cw_serde]
pub struct Ownership {
    /// Account allowed to perform administrative actions
    pub owner: Addr,
    /// Account proposed as the next owner, if any
    pub pending_owner: Option<Addr>,
}

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    NotOwner,

    #[error("Unauthorized: only pending owner can accept")]
    NotPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,
}

/// Store the initial owner.
pub fn initialize_owner(storage: &mut dyn Storage, owner: Addr) -> Result<(), OwnershipError> {
    OWNERSHIP.save(
        storage,
        &Ownership {
            owner,
            pending_owner: None,
        },
    )?;
    Ok(())
}

/// Fail with `NotOwner` unless `sender` is the current owner.
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<Ownership, OwnershipError> {
    let ownership = OWNERSHIP.load(storage)?;
    if *sender != ownership.owner {
        return Err(OwnershipError::NotOwner);
    }
    Ok(ownership)
}

/// Propose a new owner.
pub fn transfer_ownership(
    deps: DepsMut,
    info: &MessageInfo,
    new_owner: &str,
) -> Result<Response, OwnershipError> {
    let mut ownership = assert_owner(deps.storage, &info.sender)?;
    let new_owner = deps.api.addr_validate(new_owner)?;

    ownership.pending_owner = Some(new_owner.clone());
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("owner", ownership.owner)
        .add_attribute("pending_owner", new_owner))
}

/// Accept a pending ownership transfer.
pub fn accept_ownership(
    storage: &mut dyn Storage,
    info: &MessageInfo,
) -> Result<Response, OwnershipError> {
    let ownership = OWNERSHIP.load(storage)?;
    let pending = ownership
        .pending_owner
        .ok_or(OwnershipError::NoPendingOwner)?;

    if info.sender != pending {
        return Err(OwnershipError::NotPendingOwner);
    }

    OWNERSHIP.save(
        storage,
        &Ownership {
            owner: pending.clone(),
            pending_owner: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("previous_owner", ownership.owner)
        .add_attribute("owner", pending))
}

/// Withdraw a pending ownership proposal.
pub fn cancel_ownership_transfer(
    storage: &mut dyn Storage,
    info: &MessageInfo,
) -> Result<Response, OwnershipError> {
    let mut ownership = assert_owner(storage, &info.sender)?;
    if ownership.pending_owner.take().is_none() {
        return Err(OwnershipError::NoPendingOwner);
    }
    OWNERSHIP.save(storage, &ownership)?;

    Ok(Response::new().add_attribute("action", "cancel_ownership_transfer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};

    #[test]
    fn test_two_step_transfer() {
        let mut deps = mock_dependencies();
        initialize_owner(deps.as_mut().storage, Addr::unchecked("owner")).unwrap();

        let info = mock_info("owner", &[]);
        transfer_ownership(deps.as_mut(), &info, "next").unwrap();

        // Proposal alone does not move ownership
        assert_eq!(
            assert_owner(deps.as_ref().storage, &Addr::unchecked("next")),
            Err(OwnershipError::NotOwner)
        );

        let err = accept_ownership(deps.as_mut().storage, &mock_info("intruder", &[]));
        assert_eq!(err.unwrap_err(), OwnershipError::NotPendingOwner);

        accept_ownership(deps.as_mut().storage, &mock_info("next", &[])).unwrap();
        let ownership = OWNERSHIP.load(deps.as_ref().storage).unwrap();
        assert_eq!(ownership.owner, Addr::unchecked("next"));
        assert_eq!(ownership.pending_owner, None);
    }

    #[test]
    fn test_non_owner_cannot_propose() {
        let mut deps = mock_dependencies();
        initialize_owner(deps.as_mut().storage, Addr::unchecked("owner")).unwrap();

        let err = transfer_ownership(deps.as_mut(), &mock_info("intruder", &[]), "intruder")
            .unwrap_err();
        assert_eq!(err, OwnershipError::NotOwner);
    }

    #[test]
    fn test_cancel_clears_proposal() {
        let mut deps = mock_dependencies();
        initialize_owner(deps.as_mut().storage, Addr::unchecked("owner")).unwrap();
        let info = mock_info("owner", &[]);

        assert_eq!(
            cancel_ownership_transfer(deps.as_mut().storage, &info).unwrap_err(),
            OwnershipError::NoPendingOwner
        );

        transfer_ownership(deps.as_mut(), &info, "next").unwrap();
        cancel_ownership_transfer(deps.as_mut().storage, &info).unwrap();

        assert_eq!(
            accept_ownership(deps.as_mut().storage, &mock_info("next", &[])).unwrap_err(),
            OwnershipError::NoPendingOwner
        );
    }
}
