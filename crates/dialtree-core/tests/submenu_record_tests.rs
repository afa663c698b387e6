mod common;

use common::new_store;
use dialtree_core::{
    ops::{option_ops, submenu_ops},
    MenuError, OptionPatch,
};
use serde_json::json;

#[test]
fn test_create_submenu_requires_parent_id() {
    let mut store = new_store();
    let result = submenu_ops::create_submenu(&mut store, None, Some("Billing".to_string()));
    assert!(matches!(
        result,
        Err(MenuError::MissingField { field }) if field == "parentId"
    ));
}

#[test]
fn test_create_submenu_accepts_dangling_parent() {
    let mut store = new_store();
    // Loose reference: the parent is never resolved
    let submenu = submenu_ops::create_submenu(
        &mut store,
        Some("no-such-option".to_string()),
        Some("Billing".to_string()),
    )
    .unwrap();

    assert_eq!(submenu.option.as_deref(), Some("no-such-option"));
    assert!(submenu.dials.is_empty());
}

#[test]
fn test_create_submenu_defaults_label_to_empty() {
    let mut store = new_store();
    let submenu =
        submenu_ops::create_submenu(&mut store, Some("opt-1".to_string()), None).unwrap();
    assert_eq!(submenu.sub_menu, "");
}

// The /submenus read path aliases the option collection; these tests pin
// that documented behavior.

#[test]
fn test_get_submenu_reads_option_collection() {
    let mut store = new_store();
    let sub_menus = json!(["Billing"]);
    let option =
        option_ops::create_option(&mut store, Some("Sales"), Some(&sub_menus), None, None)
            .unwrap();

    let via_alias = submenu_ops::get_submenu(&store, &option.id).unwrap();
    assert_eq!(via_alias, option);
}

#[test]
fn test_get_submenu_miss_reports_submenu_not_found() {
    let store = new_store();
    let result = submenu_ops::get_submenu(&store, "nonexistent");
    assert!(matches!(result, Err(MenuError::SubmenuNotFound { .. })));
}

#[test]
fn test_update_submenu_alias_updates_option() {
    let mut store = new_store();
    let sub_menus = json!(["Billing"]);
    let option =
        option_ops::create_option(&mut store, Some("Sales"), Some(&sub_menus), None, None)
            .unwrap();

    let updated = submenu_ops::update_submenu(
        &mut store,
        &option.id,
        &OptionPatch {
            menu: Some("Service".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.menu, "Service");

    // Visible through the option path too - same record
    let reread = option_ops::get_option(&store, &option.id).unwrap();
    assert_eq!(reread.menu, "Service");
}
