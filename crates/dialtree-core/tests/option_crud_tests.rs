mod common;

use common::new_store;
use dialtree_core::{
    ops::option_ops,
    MenuError, OptionPatch,
};
use serde_json::json;

// ===== CREATE OPTION TESTS =====

#[test]
fn test_create_option_preserves_submenu_order() {
    let mut store = new_store();
    let sub_menus = json!(["Billing", "Support", "Returns", "Escalations"]);

    let option = option_ops::create_option(
        &mut store,
        Some("Sales"),
        Some(&sub_menus),
        Some("100".to_string()),
        None,
    )
    .unwrap();

    assert_eq!(
        option.sub_menus,
        ["Billing", "Support", "Returns", "Escalations"]
    );
    assert_eq!(option.menu, "Sales");
    assert_eq!(option.dial.as_deref(), Some("100"));
    assert!(!option.id.is_empty());
}

#[test]
fn test_create_option_assigns_distinct_ids() {
    let mut store = new_store();
    let sub_menus = json!([]);

    let a = option_ops::create_option(&mut store, Some("A"), Some(&sub_menus), None, None)
        .unwrap();
    let b = option_ops::create_option(&mut store, Some("B"), Some(&sub_menus), None, None)
        .unwrap();

    assert_ne!(a.id, b.id);
}

#[test]
fn test_create_option_missing_menu_writes_nothing() {
    let mut store = new_store();
    let sub_menus = json!(["Billing"]);

    let result =
        option_ops::create_option(&mut store, None, Some(&sub_menus), None, None);

    assert!(matches!(result, Err(MenuError::InvalidOption { .. })));
    assert!(option_ops::list_options(&store, None).unwrap().is_empty());
}

#[test]
fn test_create_option_sub_menus_not_array_rejected() {
    let mut store = new_store();
    let sub_menus = json!({"0": "Billing"});

    let result =
        option_ops::create_option(&mut store, Some("Sales"), Some(&sub_menus), None, None);

    assert!(matches!(result, Err(MenuError::InvalidOption { .. })));
}

// ===== READ / LIST TESTS =====

#[test]
fn test_get_option_roundtrip() {
    let mut store = new_store();
    let sub_menus = json!(["Billing"]);
    let created =
        option_ops::create_option(&mut store, Some("Sales"), Some(&sub_menus), None, None)
            .unwrap();

    let fetched = option_ops::get_option(&store, &created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_get_option_missing_is_not_found() {
    let store = new_store();
    let result = option_ops::get_option(&store, "nonexistent");
    assert!(matches!(result, Err(MenuError::OptionNotFound { .. })));
}

#[test]
fn test_list_options_filters_by_parent_id_exactly() {
    let mut store = new_store();
    let sub_menus = json!([]);

    let root =
        option_ops::create_option(&mut store, Some("Root"), Some(&sub_menus), None, None)
            .unwrap();
    let mut child_ids = Vec::new();
    for i in 0..3 {
        let child = option_ops::create_option(
            &mut store,
            Some(&format!("Child {i}")),
            Some(&sub_menus),
            None,
            None,
        )
        .unwrap();
        option_ops::update_option(
            &mut store,
            &child.id,
            &OptionPatch {
                parent_id: Some(root.id.clone()),
                ..Default::default()
            },
        )
        .unwrap();
        child_ids.push(child.id);
    }
    // Unrelated sibling under a different parent
    let other =
        option_ops::create_option(&mut store, Some("Other"), Some(&sub_menus), None, None)
            .unwrap();
    option_ops::update_option(
        &mut store,
        &other.id,
        &OptionPatch {
            parent_id: Some("someone-else".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let listed: Vec<String> = option_ops::list_options(&store, Some(&root.id))
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();

    assert_eq!(listed, child_ids);
}

#[test]
fn test_list_options_dangling_parent_yields_empty() {
    let mut store = new_store();
    let sub_menus = json!([]);
    option_ops::create_option(&mut store, Some("Root"), Some(&sub_menus), None, None)
        .unwrap();

    let listed = option_ops::list_options(&store, Some("no-such-parent")).unwrap();
    assert!(listed.is_empty());
}

// ===== UPDATE TESTS =====

#[test]
fn test_update_option_merges_partial_fields() {
    let mut store = new_store();
    let sub_menus = json!(["Billing", "Support"]);
    let created = option_ops::create_option(
        &mut store,
        Some("Sales"),
        Some(&sub_menus),
        Some("100".to_string()),
        Some("12".to_string()),
    )
    .unwrap();

    let updated = option_ops::update_option(
        &mut store,
        &created.id,
        &OptionPatch {
            dial: Some("200".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.dial.as_deref(), Some("200"));
    // Omitted fields preserved
    assert_eq!(updated.menu, "Sales");
    assert_eq!(updated.sub_menus, ["Billing", "Support"]);
    assert_eq!(updated.dial_extension.as_deref(), Some("12"));
}

#[test]
fn test_update_option_missing_is_not_found() {
    let mut store = new_store();
    let result =
        option_ops::update_option(&mut store, "nonexistent", &OptionPatch::default());
    assert!(matches!(result, Err(MenuError::OptionNotFound { .. })));
}

// ===== DELETE TESTS =====

#[test]
fn test_delete_option_removes_record() {
    let mut store = new_store();
    let sub_menus = json!([]);
    let created =
        option_ops::create_option(&mut store, Some("Sales"), Some(&sub_menus), None, None)
            .unwrap();

    option_ops::delete_option(&mut store, &created.id).unwrap();

    let result = option_ops::get_option(&store, &created.id);
    assert!(matches!(result, Err(MenuError::OptionNotFound { .. })));
}

#[test]
fn test_delete_option_missing_is_idempotent_noop() {
    let mut store = new_store();
    assert!(option_ops::delete_option(&mut store, "nonexistent").is_ok());
}
