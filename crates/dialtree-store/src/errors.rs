//! Error handling for dialtree-store
//!
//! Wraps dialtree-core MenuError with store-specific helpers

use dialtree_core::errors::MenuError;

/// Result type alias using MenuError
pub type Result<T> = std::result::Result<T, MenuError>;

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> MenuError {
    MenuError::Persistence {
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> MenuError {
    MenuError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a serialization error for a malformed stored column
pub fn column_decode_error(column: &str, err: serde_json::Error) -> MenuError {
    MenuError::Serialization {
        message: format!("Failed to decode column {}: {}", column, err),
    }
}
