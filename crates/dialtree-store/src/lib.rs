//! dialtree Store - SQLite persistence for the phone-menu entity store
//!
//! Implements the `EntityStore` contract from dialtree-core on top of
//! rusqlite (bundled SQLite). Array-valued fields (`subMenus`, `dials`) are
//! stored as JSON text columns. Schema is managed by embedded, checksummed,
//! idempotent migrations.
//!
//! No foreign-key constraints are declared: references between options,
//! submenus and dials are loose by contract, and dangling values are data,
//! not errors.

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use repo::SqliteStore;
