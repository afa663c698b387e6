//! dialtree Core - data model and rules for a hierarchical phone-menu (IVR) configuration
//!
//! This crate provides the foundational data structures and operations for dialtree,
//! including:
//! - MenuOption, Submenu and Dial models with full CRUD semantics
//! - The EntityStore contract plus an in-memory reference store
//! - Consistency rules spanning the two submenu representations
//!   (embedded labels on an option vs. referenced Submenu/Dial records)
//! - Identifier generation for externally-visible ids
//!
//! The two submenu representations are deliberately never synchronized; the
//! rules in [`ops`] enforce only the per-operation invariants documented there.

pub mod errors;
pub mod idgen;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use errors::{ErrorClass, MenuError, Result};
pub use model::{Dial, DialPatch, ExpandedDial, MenuOption, OptionPatch, Submenu};
pub use ops::{EntityStore, MemoryStore};
