use serde_json::Value;

use crate::errors::{MenuError, Result};

/// Validate option-creation input and extract the typed submenu labels
///
/// `menu` must be present and non-empty; `sub_menus` must be a JSON array
/// whose elements are all strings. The element check is a type check only -
/// empty labels and duplicates are allowed.
///
/// # Errors
/// * `InvalidOption` - if `menu` is missing/empty or `sub_menus` is not an
///   array of strings
pub fn validate_option_input(
    menu: Option<&str>,
    sub_menus: Option<&Value>,
) -> Result<(String, Vec<String>)> {
    let menu = match menu {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => {
            return Err(MenuError::InvalidOption {
                reason: "Menu and subMenus (array) are required".to_string(),
            })
        }
    };

    let items = match sub_menus {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(MenuError::InvalidOption {
                reason: "Menu and subMenus (array) are required".to_string(),
            })
        }
    };

    let mut labels = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(label) => labels.push(label.clone()),
            other => {
                return Err(MenuError::InvalidOption {
                    reason: format!("subMenus must contain only strings, got {other}"),
                })
            }
        }
    }

    Ok((menu, labels))
}

/// Parse and bounds-check a submenu index path segment
///
/// The raw segment must parse as an integer and fall within `0..len`.
///
/// # Errors
/// * `SubmenuIndexNotNumeric` - if the segment is not an integer
/// * `SubmenuIndexOutOfRange` - if the index is negative or `>= len`
pub fn parse_submenu_index(raw: &str, len: usize) -> Result<usize> {
    let index: i64 = raw
        .parse()
        .map_err(|_| MenuError::SubmenuIndexNotNumeric {
            raw: raw.to_string(),
        })?;

    if index < 0 || index as usize >= len {
        return Err(MenuError::SubmenuIndexOutOfRange { index, len });
    }

    Ok(index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_input_preserves_label_order() {
        let sub_menus = json!(["Billing", "Support", "Returns"]);
        let (menu, labels) =
            validate_option_input(Some("Sales"), Some(&sub_menus)).unwrap();

        assert_eq!(menu, "Sales");
        assert_eq!(labels, ["Billing", "Support", "Returns"]);
    }

    #[test]
    fn test_missing_menu_rejected() {
        let sub_menus = json!([]);
        let result = validate_option_input(None, Some(&sub_menus));
        assert!(matches!(result, Err(MenuError::InvalidOption { .. })));
    }

    #[test]
    fn test_empty_menu_rejected() {
        let sub_menus = json!([]);
        let result = validate_option_input(Some(""), Some(&sub_menus));
        assert!(matches!(result, Err(MenuError::InvalidOption { .. })));
    }

    #[test]
    fn test_sub_menus_must_be_array() {
        let sub_menus = json!("Billing");
        let result = validate_option_input(Some("Sales"), Some(&sub_menus));
        assert!(matches!(result, Err(MenuError::InvalidOption { .. })));
    }

    #[test]
    fn test_sub_menus_elements_must_be_strings() {
        let sub_menus = json!(["Billing", 7]);
        let result = validate_option_input(Some("Sales"), Some(&sub_menus));
        assert!(matches!(result, Err(MenuError::InvalidOption { .. })));
    }

    #[test]
    fn test_index_parses_within_bounds() {
        assert_eq!(parse_submenu_index("0", 2).unwrap(), 0);
        assert_eq!(parse_submenu_index("1", 2).unwrap(), 1);
    }

    #[test]
    fn test_index_non_numeric_rejected() {
        let result = parse_submenu_index("abc", 2);
        assert!(matches!(
            result,
            Err(MenuError::SubmenuIndexNotNumeric { .. })
        ));
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        assert!(matches!(
            parse_submenu_index("2", 2),
            Err(MenuError::SubmenuIndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            parse_submenu_index("-1", 2),
            Err(MenuError::SubmenuIndexOutOfRange { index: -1, len: 2 })
        ));
    }
}
