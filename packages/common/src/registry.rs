//! Owner-maintained registries keyed by chain id.
//!
//! Used for the sender adapter's routes and chain names and for the receiver
//! adapter's trusted origins. Every batch either applies entirely or not at
//! all; an empty value clears the entry, and reads of a missing entry return
//! the empty string, which callers must treat as "not registered".

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Event, Order, StdError, StdResult, Storage};
use cw_storage_plus::{Bound, Map};
use thiserror::Error;

use crate::events::registry_updated_event;

/// Default page size for registry listings
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum page size for registry listings
pub const MAX_LIMIT: u32 = 50;

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Configuration error: {chain_ids} chain ids but {values} values")]
    LengthMismatch { chain_ids: usize, values: usize },
}

/// One registry entry as returned by listing queries
#[cw_serde]
pub struct RegistryEntry {
    pub chain_id: u64,
    pub value: String,
}

/// A chain-id keyed string registry with batched, all-or-nothing updates.
pub struct ChainRegistry<'a> {
    entries: Map<'a, u64, String>,
    event_type: &'a str,
}

impl<'a> ChainRegistry<'a> {
    pub const fn new(namespace: &'a str, event_type: &'a str) -> Self {
        Self {
            entries: Map::new(namespace),
            event_type,
        }
    }

    /// Apply a batch of updates, returning one update event per pair.
    ///
    /// The length check happens before any write, so a rejected batch leaves
    /// storage untouched.
    pub fn set_batch(
        &self,
        storage: &mut dyn Storage,
        chain_ids: Vec<u64>,
        values: Vec<String>,
    ) -> Result<Vec<Event>, RegistryError> {
        if chain_ids.len() != values.len() {
            return Err(RegistryError::LengthMismatch {
                chain_ids: chain_ids.len(),
                values: values.len(),
            });
        }

        let mut events = Vec::with_capacity(chain_ids.len());
        for (chain_id, value) in chain_ids.into_iter().zip(values) {
            let value = value.trim().to_string();
            if value.is_empty() {
                self.entries.remove(storage, chain_id);
            } else {
                self.entries.save(storage, chain_id, &value)?;
            }
            events.push(registry_updated_event(self.event_type, chain_id, &value));
        }
        Ok(events)
    }

    /// Registered value for `chain_id`, or the empty string.
    pub fn get(&self, storage: &dyn Storage, chain_id: u64) -> StdResult<String> {
        Ok(self
            .entries
            .may_load(storage, chain_id)?
            .unwrap_or_default())
    }

    /// Registered value for `chain_id`, or `None`.
    pub fn may_get(&self, storage: &dyn Storage, chain_id: u64) -> StdResult<Option<String>> {
        self.entries.may_load(storage, chain_id)
    }

    /// Paginated listing in ascending chain-id order.
    pub fn list(
        &self,
        storage: &dyn Storage,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<Vec<RegistryEntry>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        self.entries
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (chain_id, value) = item?;
                Ok(RegistryEntry { chain_id, value })
            })
            .collect()
    }
}
