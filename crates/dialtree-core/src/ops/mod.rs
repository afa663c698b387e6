//! Entity-store contract and the operations layered on top of it
//!
//! Operations are free functions taking a store reference, mirroring the
//! request flow: validate input shape, read and mutate records, persist.
//! Cross-entity consistency rules (dial creation's two writes, submenu-index
//! deletion's splice) live here rather than in the store so both store
//! implementations share them.

pub mod dial_ops;
pub mod option_ops;
pub mod store;
pub mod submenu_ops;

pub use store::{EntityStore, MemoryStore};
