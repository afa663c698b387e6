use serde_json::Value;
use tracing::{debug, info};

use super::store::EntityStore;
use crate::errors::{MenuError, Result};
use crate::idgen;
use crate::model::{MenuOption, OptionPatch};
use crate::rules::validate_option_input;

/// Create a new option
///
/// Validates input shape (menu present, subMenus an array of strings),
/// assigns a generated external id and persists the record. The returned
/// option's `sub_menus` preserves input order exactly.
///
/// # Arguments
/// * `store` - Mutable reference to the entity store
/// * `menu` - Menu label (required, non-empty)
/// * `sub_menus` - JSON value that must be an array of strings
/// * `dial` - Optional dial target
/// * `dial_extension` - Optional dial extension
///
/// # Errors
/// * `InvalidOption` - if `menu` is missing/empty or `sub_menus` is not an
///   array of strings (nothing is written)
/// * `Persistence` - if the store write fails
pub fn create_option(
    store: &mut dyn EntityStore,
    menu: Option<&str>,
    sub_menus: Option<&Value>,
    dial: Option<String>,
    dial_extension: Option<String>,
) -> Result<MenuOption> {
    let (menu, labels) = validate_option_input(menu, sub_menus)?;

    let mut option = MenuOption::new(idgen::next_id(), menu, labels);
    option.dial = dial;
    option.dial_extension = dial_extension;

    store.persist_option(&option)?;
    info!(option_id = %option.id, menu = %option.menu, "option created");

    Ok(option)
}

/// Read an option by external id
///
/// # Errors
/// * `OptionNotFound` - if no option has this id
pub fn get_option(store: &dyn EntityStore, id: &str) -> Result<MenuOption> {
    store
        .get_option(id)?
        .ok_or_else(|| MenuError::OptionNotFound {
            option_id: id.to_string(),
        })
}

/// List options, optionally filtered by exact `parent_id` match
///
/// An absent filter returns every option; a filter value that matches no
/// records (including a dangling parent id) returns an empty list, never an
/// error. Order is store iteration order.
pub fn list_options(
    store: &dyn EntityStore,
    parent_id: Option<&str>,
) -> Result<Vec<MenuOption>> {
    store.list_options(parent_id)
}

/// Apply a partial update to an option
///
/// Supplied fields overwrite, omitted fields are preserved. Returns the
/// updated record.
///
/// # Errors
/// * `OptionNotFound` - if no option has this id
/// * `Persistence` - if the store write fails
pub fn update_option(
    store: &mut dyn EntityStore,
    id: &str,
    patch: &OptionPatch,
) -> Result<MenuOption> {
    let mut option = get_option(store, id)?;
    option.apply(patch);
    store.persist_option(&option)?;
    debug!(option_id = %id, "option updated");
    Ok(option)
}

/// Hard-delete an option by external id
///
/// Idempotent: deleting an absent id succeeds silently. Submenu records
/// referencing this option are left untouched (no cascade).
pub fn delete_option(store: &mut dyn EntityStore, id: &str) -> Result<()> {
    store.delete_option(id)?;
    info!(option_id = %id, "option deleted");
    Ok(())
}
