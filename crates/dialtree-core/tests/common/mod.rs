use dialtree_core::ops::{submenu_ops, MemoryStore};
use dialtree_core::Submenu;

/// Create a fresh in-memory store for a test
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
}

/// Create a submenu record under the given parent id, returning it
#[allow(dead_code)]
pub fn seed_submenu(store: &mut MemoryStore, parent_id: &str) -> Submenu {
    submenu_ops::create_submenu(
        store,
        Some(parent_id.to_string()),
        Some("Billing".to_string()),
    )
    .unwrap()
}
