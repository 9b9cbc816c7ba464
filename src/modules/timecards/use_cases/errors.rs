use crate::modules::timecards::adapters::outbound::timecard_store::{
    SharedTimecard, StoreError, TimecardStore,
};
use crate::modules::timecards::core::errors::TimecardError;
use crate::modules::timecards::core::timecard::Timecard;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("timecard {0} not found")]
    TimecardNotFound(String),

    #[error(transparent)]
    Domain(#[from] TimecardError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolve an identifier to its live handle, or a not-found failure.
pub async fn require_timecard<TStore>(
    store: &TStore,
    id: &str,
) -> Result<SharedTimecard, ApplicationError>
where
    TStore: TimecardStore + ?Sized,
{
    store
        .find(id)
        .await?
        .ok_or_else(|| ApplicationError::TimecardNotFound(id.to_string()))
}

/// Exclusive access to a timecard that is still stored under `id` once the lock is held.
///
/// A delete may remove the entry while this caller waits on the lock; the handle it
/// fetched is then detached and any change made through it would be lost.
pub async fn write_timecard<TStore>(
    store: &TStore,
    id: &str,
) -> Result<OwnedRwLockWriteGuard<Timecard>, ApplicationError>
where
    TStore: TimecardStore + ?Sized,
{
    let handle = require_timecard(store, id).await?;
    let guard = handle.clone().write_owned().await;
    ensure_still_stored(store, id, &handle).await?;
    Ok(guard)
}

/// Shared access to a timecard that is still stored under `id` once the lock is held.
pub async fn read_timecard<TStore>(
    store: &TStore,
    id: &str,
) -> Result<OwnedRwLockReadGuard<Timecard>, ApplicationError>
where
    TStore: TimecardStore + ?Sized,
{
    let handle = require_timecard(store, id).await?;
    let guard = handle.clone().read_owned().await;
    ensure_still_stored(store, id, &handle).await?;
    Ok(guard)
}

async fn ensure_still_stored<TStore>(
    store: &TStore,
    id: &str,
    handle: &SharedTimecard,
) -> Result<(), ApplicationError>
where
    TStore: TimecardStore + ?Sized,
{
    match store.find(id).await? {
        Some(current) if Arc::ptr_eq(&current, handle) => Ok(()),
        _ => Err(ApplicationError::TimecardNotFound(id.to_string())),
    }
}
