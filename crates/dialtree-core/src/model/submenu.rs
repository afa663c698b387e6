use serde::{Deserialize, Serialize};

/// Submenu - a separately stored menu node referencing a parent option
///
/// This is the *referenced* representation of a submenu, distinct from the
/// labels embedded on [`MenuOption`](super::MenuOption). Ownership is
/// logical, not cascading: deleting the referenced option leaves the
/// submenu in place, and deleting a submenu leaves its dials in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submenu {
    /// External identifier, generator-assigned
    pub sub_menu_id: String,

    /// Loose reference to the parent option's id
    #[serde(default)]
    pub option: Option<String>,

    /// Submenu label
    pub sub_menu: String,

    /// Dial ids in append order
    pub dials: Vec<String>,
}

impl Submenu {
    /// Create a new Submenu with no dials
    pub fn new(sub_menu_id: String, option: Option<String>, sub_menu: String) -> Self {
        Self {
            sub_menu_id,
            option,
            sub_menu,
            dials: Vec::new(),
        }
    }
}
