use serde::{Deserialize, Serialize};

/// MenuOption - a top-level IVR menu node
///
/// Carries an ordered list of embedded submenu labels (`sub_menus`); the
/// position of a label is its external addressing key for deletion. The
/// `parent_id` reference is untyped and unenforced - a dangling value is
/// not an error.
///
/// Named MenuOption rather than Option to stay clear of the prelude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOption {
    /// External identifier, generator-assigned and unique across options
    pub id: String,

    /// Menu label
    pub menu: String,

    /// Optional loose reference to another option's id
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Ordered submenu labels; order is significant
    pub sub_menus: Vec<String>,

    /// Optional dial target
    #[serde(default)]
    pub dial: Option<String>,

    /// Optional dial extension
    #[serde(default)]
    pub dial_extension: Option<String>,
}

impl MenuOption {
    /// Create a new MenuOption with the given id and menu label
    pub fn new(id: String, menu: String, sub_menus: Vec<String>) -> Self {
        Self {
            id,
            menu,
            parent_id: None,
            sub_menus,
            dial: None,
            dial_extension: None,
        }
    }

    /// Merge a partial update into this option
    ///
    /// Supplied fields overwrite, omitted fields are preserved. Both store
    /// implementations route updates through here so merge semantics cannot
    /// drift between them.
    pub fn apply(&mut self, patch: &OptionPatch) {
        if let Some(menu) = &patch.menu {
            self.menu = menu.clone();
        }
        if let Some(parent_id) = &patch.parent_id {
            self.parent_id = Some(parent_id.clone());
        }
        if let Some(sub_menus) = &patch.sub_menus {
            self.sub_menus = sub_menus.clone();
        }
        if let Some(dial) = &patch.dial {
            self.dial = Some(dial.clone());
        }
        if let Some(dial_extension) = &patch.dial_extension {
            self.dial_extension = Some(dial_extension.clone());
        }
    }
}

/// Partial update for a MenuOption
///
/// Every field is optional; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPatch {
    pub menu: Option<String>,
    pub parent_id: Option<String>,
    pub sub_menus: Option<Vec<String>>,
    pub dial: Option<String>,
    pub dial_extension: Option<String>,
}
