use crate::models::{Field, ItemId};
use rust_decimal::Decimal;
use thiserror::Error;

/// User input problems. Always recoverable, detected before any store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields must be filled in: {0} is empty")]
    MissingField(Field),
    #[error("Invalid number format for {0}")]
    InvalidNumber(Field),
    #[error("Thickness {requested} does not match existing code {code} (thickness {existing})")]
    ThicknessMismatch {
        code: String,
        existing: Decimal,
        requested: Decimal,
    },
    #[error("No item selected")]
    NoSelection,
    #[error("Total {0} would exceed the largest supported quantity")]
    QuantityOverflow(Field),
}

/// Failures of the persistence medium
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Steel item {0} no longer exists")]
    NotFound(ItemId),
    #[error("Stored {0} values exceed the largest supported total")]
    TotalsOverflow(Field),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Unified error type for inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Result type alias for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

impl InventoryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, InventoryError::Validation(_))
    }

    /// Builds the user-facing notification for this error
    pub fn notice(&self) -> Notice {
        match self {
            InventoryError::Validation(ValidationError::NoSelection) => {
                Notice::new("Nothing selected", self.to_string(), Severity::Warning)
            }
            InventoryError::Validation(_) => {
                Notice::new("Invalid input", self.to_string(), Severity::Warning)
            }
            InventoryError::Storage(_) => {
                Notice::new("Storage error", self.to_string(), Severity::Error)
            }
        }
    }
}

/// Login gate rejection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid login or password")]
    InvalidCredentials,
}

impl LoginError {
    pub fn notice(&self) -> Notice {
        Notice::new("Login failed", self.to_string(), Severity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A blocking message for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        let err = ValidationError::MissingField(Field::Weight);
        assert_eq!(err.to_string(), "All fields must be filled in: weight is empty");

        let err = ValidationError::InvalidNumber(Field::Thickness);
        assert_eq!(err.to_string(), "Invalid number format for thickness");
    }

    #[test]
    fn thickness_mismatch_message() {
        let err = ValidationError::ThicknessMismatch {
            code: "A1".to_string(),
            existing: Decimal::new(3, 0),
            requested: Decimal::new(5, 0),
        };
        assert_eq!(
            err.to_string(),
            "Thickness 5 does not match existing code A1 (thickness 3)"
        );
    }

    #[test]
    fn notice_severity_by_error_kind() {
        let validation: InventoryError = ValidationError::InvalidNumber(Field::Length).into();
        let notice = validation.notice();
        assert_eq!(notice.title, "Invalid input");
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.message, "Invalid number format for length");
        assert!(validation.is_validation());

        let none: InventoryError = ValidationError::NoSelection.into();
        assert_eq!(none.notice().title, "Nothing selected");

        let storage: InventoryError = StoreError::NotFound(ItemId(7)).into();
        let notice = storage.notice();
        assert_eq!(notice.title, "Storage error");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "Steel item 7 no longer exists");
        assert!(!storage.is_validation());
    }

    #[test]
    fn overflow_notices() {
        let rejected: InventoryError = ValidationError::QuantityOverflow(Field::Weight).into();
        let notice = rejected.notice();
        assert_eq!(notice.title, "Invalid input");
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(
            notice.message,
            "Total weight would exceed the largest supported quantity"
        );

        let stored: InventoryError = StoreError::TotalsOverflow(Field::Length).into();
        let notice = stored.notice();
        assert_eq!(notice.title, "Storage error");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(
            notice.message,
            "Stored length values exceed the largest supported total"
        );
    }

    #[test]
    fn login_error_notice() {
        let notice = LoginError::InvalidCredentials.notice();
        assert_eq!(notice.message, "Invalid login or password");
        assert_eq!(notice.severity, Severity::Error);
    }
}
