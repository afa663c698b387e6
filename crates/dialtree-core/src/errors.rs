use thiserror::Error;

/// Result type alias using MenuError
pub type Result<T> = std::result::Result<T, MenuError>;

/// Coarse classification of an error for response mapping
///
/// Validation errors are caller mistakes (malformed or missing input),
/// NotFound means a referenced entity id is absent, and Internal covers
/// persistence and other faults the caller cannot correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    NotFound,
    Internal,
}

/// Error taxonomy for dialtree operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    // ===== Validation Errors =====
    /// Option creation input is malformed
    #[error("Invalid option: {reason}")]
    InvalidOption { reason: String },

    /// A required field is absent from the request
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Submenu index path segment is not an integer
    #[error("Submenu index must be a number: {raw}")]
    SubmenuIndexNotNumeric { raw: String },

    /// Submenu index is outside the option's label list
    #[error("Invalid submenu index: {index} (option has {len} submenus)")]
    SubmenuIndexOutOfRange { index: i64, len: usize },

    /// Dial creation referenced a submenu that does not exist
    ///
    /// Distinct from `SubmenuNotFound`: an unresolved reference in a create
    /// body is a validation failure, not a missing resource.
    #[error("Submenu not found: {submenu_id}")]
    SubmenuRefNotFound { submenu_id: String },

    // ===== Not-Found Errors =====
    /// Option not found in store
    #[error("Option not found: {option_id}")]
    OptionNotFound { option_id: String },

    /// Submenu not found in store
    #[error("Submenu not found: {submenu_id}")]
    SubmenuNotFound { submenu_id: String },

    /// Dial not found in store
    #[error("Dial not found: {dial_id}")]
    DialNotFound { dial_id: String },

    // ===== Internal Errors =====
    /// Persistence layer failure (store unavailable or write failed)
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl MenuError {
    /// Classify this error for response mapping
    pub fn class(&self) -> ErrorClass {
        match self {
            MenuError::InvalidOption { .. }
            | MenuError::MissingField { .. }
            | MenuError::SubmenuIndexNotNumeric { .. }
            | MenuError::SubmenuIndexOutOfRange { .. }
            | MenuError::SubmenuRefNotFound { .. } => ErrorClass::Validation,

            MenuError::OptionNotFound { .. }
            | MenuError::SubmenuNotFound { .. }
            | MenuError::DialNotFound { .. } => ErrorClass::NotFound,

            MenuError::Persistence { .. } | MenuError::Serialization { .. } => {
                ErrorClass::Internal
            }
        }
    }
}

/// Conversion from serde_json::Error to MenuError
impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Serialization {
            message: err.to_string(),
        }
    }
}
