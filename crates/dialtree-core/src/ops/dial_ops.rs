use tracing::{info, warn};

use super::store::EntityStore;
use crate::errors::{MenuError, Result};
use crate::idgen;
use crate::model::{Dial, DialPatch, ExpandedDial};

/// Create a new dial attached to an existing submenu
///
/// The `submenu` reference must resolve at creation time; on failure no dial
/// record is written. On success this performs two writes in order: the dial
/// first, then the parent submenu with the dial's id appended to its `dials`
/// sequence. The writes are not transactional - if the second fails the dial
/// stays persisted and the error propagates, so the caller reports a fault
/// rather than hiding the partial state.
///
/// # Arguments
/// * `store` - Mutable reference to the entity store
/// * `dial` - Phone number or routing code (stored as-is, empty if omitted)
/// * `dial_extension` - Optional extension
/// * `submenu` - External id of the owning submenu (required)
///
/// # Errors
/// * `MissingField` - if `submenu` is absent
/// * `SubmenuRefNotFound` - if the reference does not resolve (validation
///   failure, nothing written)
/// * `Persistence` - if either write fails
pub fn create_dial(
    store: &mut dyn EntityStore,
    dial: Option<String>,
    dial_extension: Option<String>,
    submenu: Option<String>,
) -> Result<Dial> {
    let submenu_id = submenu.ok_or_else(|| MenuError::MissingField {
        field: "submenu".to_string(),
    })?;

    let mut parent = store
        .get_submenu(&submenu_id)?
        .ok_or_else(|| MenuError::SubmenuRefNotFound {
            submenu_id: submenu_id.clone(),
        })?;

    let dial = Dial {
        id: idgen::next_id(),
        dial: dial.unwrap_or_default(),
        dial_extension,
        submenu: submenu_id,
    };

    // Dial first, then the membership append. A failure between the two
    // leaves a dial without a submenu entry, never the reverse.
    store.persist_dial(&dial)?;

    parent.dials.push(dial.id.clone());
    if let Err(err) = store.persist_submenu(&parent) {
        warn!(
            dial_id = %dial.id,
            sub_menu_id = %parent.sub_menu_id,
            "dial persisted but submenu membership write failed"
        );
        return Err(err);
    }

    info!(dial_id = %dial.id, sub_menu_id = %parent.sub_menu_id, "dial created");
    Ok(dial)
}

/// List all dials with their submenu references expanded
///
/// Expansion is a lazy lookup per dial; a dangling reference expands to
/// null rather than failing the listing.
pub fn list_dials(store: &dyn EntityStore) -> Result<Vec<ExpandedDial>> {
    let mut expanded = Vec::new();
    for dial in store.list_dials()? {
        let submenu = store.get_submenu(&dial.submenu)?;
        expanded.push(dial.expand(submenu));
    }
    Ok(expanded)
}

/// Apply a partial update to a dial, returning it with its submenu expanded
///
/// Changing the `submenu` field does not touch either submenu's `dials`
/// sequence - membership is only maintained at creation time (documented
/// limitation of the dual bookkeeping).
///
/// # Errors
/// * `DialNotFound` - if no dial has this id
/// * `Persistence` - if the store write fails
pub fn update_dial(
    store: &mut dyn EntityStore,
    id: &str,
    patch: &DialPatch,
) -> Result<ExpandedDial> {
    let mut dial = store
        .get_dial(id)?
        .ok_or_else(|| MenuError::DialNotFound {
            dial_id: id.to_string(),
        })?;

    dial.apply(patch);
    store.persist_dial(&dial)?;

    let submenu = store.get_submenu(&dial.submenu)?;
    Ok(dial.expand(submenu))
}
