//! Input-shape validation
//!
//! Shape checks run synchronously before any write. Cross-entity rules that
//! need store access live in [`crate::ops`].

pub mod validation;

pub use validation::{parse_submenu_index, validate_option_input};
