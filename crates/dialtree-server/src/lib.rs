//! dialtree Server - HTTP surface for the phone-menu configuration service
//!
//! Translates the resource-oriented JSON contract (options, submenus, dials)
//! into dialtree-core operations over a shared entity store. The store
//! handle is constructed once at startup and injected into handlers through
//! axum state; handlers hold the store mutex for the duration of their
//! store work, so each operation runs to completion against the store.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::{shared, SharedStore};
