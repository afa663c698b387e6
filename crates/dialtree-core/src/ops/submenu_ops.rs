use tracing::{debug, info};

use super::store::EntityStore;
use crate::errors::{MenuError, Result};
use crate::idgen;
use crate::model::{MenuOption, OptionPatch, Submenu};
use crate::rules::parse_submenu_index;

/// Create a new submenu record referencing a parent option
///
/// `parent_id` is required but not resolved - it is a loose reference and a
/// dangling value is accepted. `sub_menu` defaults to the empty string when
/// omitted. The new record starts with no dials.
///
/// # Errors
/// * `MissingField` - if `parent_id` is absent
/// * `Persistence` - if the store write fails
pub fn create_submenu(
    store: &mut dyn EntityStore,
    parent_id: Option<String>,
    sub_menu: Option<String>,
) -> Result<Submenu> {
    let parent_id = parent_id.ok_or_else(|| MenuError::MissingField {
        field: "parentId".to_string(),
    })?;

    let submenu = Submenu::new(
        idgen::next_id(),
        Some(parent_id),
        sub_menu.unwrap_or_default(),
    );

    store.persist_submenu(&submenu)?;
    info!(sub_menu_id = %submenu.sub_menu_id, "submenu created");

    Ok(submenu)
}

/// Read a "submenu" by id - actually reads the option collection
///
/// The wire contract routes GET /submenus/{id} at option records; that
/// aliasing is deliberate. Misses are reported with a submenu-flavored
/// error to keep response wording stable.
///
/// # Errors
/// * `SubmenuNotFound` - if no option has this id
pub fn get_submenu(store: &dyn EntityStore, id: &str) -> Result<MenuOption> {
    store
        .get_option(id)?
        .ok_or_else(|| MenuError::SubmenuNotFound {
            submenu_id: id.to_string(),
        })
}

/// Apply a partial update to a "submenu" - actually updates an option record
///
/// Same aliasing as [`get_submenu`]; merge semantics follow
/// [`MenuOption::apply`].
///
/// # Errors
/// * `SubmenuNotFound` - if no option has this id
/// * `Persistence` - if the store write fails
pub fn update_submenu(
    store: &mut dyn EntityStore,
    id: &str,
    patch: &OptionPatch,
) -> Result<MenuOption> {
    let mut option = get_submenu(store, id)?;
    option.apply(patch);
    store.persist_option(&option)?;
    debug!(option_id = %id, "submenu alias updated");
    Ok(option)
}

/// Delete the submenu label at `raw_index` from an option's embedded list
///
/// Resolves the option first (absence is NotFound, not a validation error),
/// then parses and bounds-checks the index. Removes exactly one label,
/// shifting subsequent labels down, persists the option and returns the
/// removed label. An invalid index leaves the option unmodified.
///
/// Only the embedded labels change; separately stored Submenu records are
/// independent and untouched.
///
/// # Errors
/// * `OptionNotFound` - if no option has this id
/// * `SubmenuIndexNotNumeric` - if `raw_index` is not an integer
/// * `SubmenuIndexOutOfRange` - if the index is negative or past the end
/// * `Persistence` - if the store write fails
pub fn delete_submenu_at(
    store: &mut dyn EntityStore,
    option_id: &str,
    raw_index: &str,
) -> Result<String> {
    let mut option = store
        .get_option(option_id)?
        .ok_or_else(|| MenuError::OptionNotFound {
            option_id: option_id.to_string(),
        })?;

    let index = parse_submenu_index(raw_index, option.sub_menus.len())?;

    let removed = option.sub_menus.remove(index);
    store.persist_option(&option)?;
    info!(option_id = %option_id, index, label = %removed, "submenu label deleted");

    Ok(removed)
}
