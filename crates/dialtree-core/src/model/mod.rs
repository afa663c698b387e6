//! Domain models for the phone-menu hierarchy
//!
//! Three entity kinds form the tree: MenuOption (top level, with embedded
//! submenu labels), Submenu (separately stored, references an option) and
//! Dial (routing target, references a submenu). The embedded labels and the
//! Submenu records are two representations of the same concept and are never
//! synchronized - see the crate-level docs.

mod dial;
mod option;
mod submenu;

pub use dial::{Dial, DialPatch, ExpandedDial};
pub use option::{MenuOption, OptionPatch};
pub use submenu::Submenu;
