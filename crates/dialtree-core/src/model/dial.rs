use serde::{Deserialize, Serialize};

use super::submenu::Submenu;

/// Dial - a routing target (phone number or routing code) attached to a submenu
///
/// The `submenu` reference must resolve at creation time; it is never
/// re-validated afterwards, so a dial can outlive its submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dial {
    /// External identifier, generator-assigned
    pub id: String,

    /// Phone number or routing code
    pub dial: String,

    /// Optional dial extension
    #[serde(default)]
    pub dial_extension: Option<String>,

    /// Reference to the owning submenu's external id
    pub submenu: String,
}

impl Dial {
    /// Merge a partial update into this dial
    ///
    /// Supplied fields overwrite, omitted fields are preserved.
    pub fn apply(&mut self, patch: &DialPatch) {
        if let Some(dial) = &patch.dial {
            self.dial = dial.clone();
        }
        if let Some(dial_extension) = &patch.dial_extension {
            self.dial_extension = Some(dial_extension.clone());
        }
        if let Some(submenu) = &patch.submenu {
            self.submenu = submenu.clone();
        }
    }

    /// Expand this dial's submenu reference into the full record
    ///
    /// A dangling reference expands to `None`, mirroring how a lazy lookup
    /// resolves a loose foreign key.
    pub fn expand(self, submenu: Option<Submenu>) -> ExpandedDial {
        ExpandedDial {
            id: self.id,
            dial: self.dial,
            dial_extension: self.dial_extension,
            submenu,
        }
    }
}

/// Partial update for a Dial
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPatch {
    pub dial: Option<String>,
    pub dial_extension: Option<String>,
    pub submenu: Option<String>,
}

/// Dial with its submenu reference resolved to the full record
///
/// Response projection for dial reads; `submenu` is null when the
/// reference dangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedDial {
    pub id: String,
    pub dial: String,
    #[serde(default)]
    pub dial_extension: Option<String>,
    pub submenu: Option<Submenu>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dial() -> Dial {
        Dial {
            id: "dial-1".to_string(),
            dial: "100".to_string(),
            dial_extension: None,
            submenu: "sub-1".to_string(),
        }
    }

    #[test]
    fn test_apply_preserves_omitted_fields() {
        let mut dial = sample_dial();
        dial.apply(&DialPatch {
            dial_extension: Some("22".to_string()),
            ..Default::default()
        });

        assert_eq!(dial.dial, "100");
        assert_eq!(dial.dial_extension.as_deref(), Some("22"));
        assert_eq!(dial.submenu, "sub-1");
    }

    #[test]
    fn test_expand_with_dangling_reference() {
        let expanded = sample_dial().expand(None);
        assert!(expanded.submenu.is_none());

        let json = serde_json::to_value(&expanded).unwrap();
        assert!(json["submenu"].is_null());
    }
}
