//! Shared request state
//!
//! One entity store per process, shared across handlers. Handlers serialize
//! store access through the mutex; a poisoned lock is reported as a 500
//! rather than propagating the panic.

use std::sync::{Arc, Mutex, MutexGuard};

use dialtree_core::ops::EntityStore;

use crate::error::ApiError;

/// Process-wide store handle injected into handlers
pub type SharedStore = Arc<Mutex<Box<dyn EntityStore>>>;

/// Wrap a store implementation for use as router state
pub fn shared<S: EntityStore + 'static>(store: S) -> SharedStore {
    Arc::new(Mutex::new(Box::new(store)))
}

/// Acquire the store lock, converting poisoning into an API error
pub fn lock(store: &SharedStore) -> Result<MutexGuard<'_, Box<dyn EntityStore>>, ApiError> {
    store.lock().map_err(|_| ApiError::lock_poisoned())
}
