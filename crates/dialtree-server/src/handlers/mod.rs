//! Request handlers, one module per resource
//!
//! Each handler extracts path/query/body, runs the core operation against
//! the shared store and maps the outcome through [`crate::error::ApiError`].

pub mod dials;
pub mod options;
pub mod submenus;
