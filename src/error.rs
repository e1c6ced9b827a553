//! Error types for the pricing calculator
//!
//! The only error the wizard itself produces is a missing selection when the
//! user tries to move forward. Everything else here belongs to the ambient
//! layers (settings, export, terminal).

use thiserror::Error;

/// The selection a step requires before the wizard can move on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    Year,
    Consumption,
    Shift,
}

impl SelectionField {
    /// Human-readable name used in alerts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Year => "a year",
            Self::Consumption => "a consumption bracket",
            Self::Shift => "a shift model",
        }
    }
}

/// The main error type for calculator operations
#[derive(Error, Debug)]
pub enum CalcError {
    /// A guarded step was left without its selection
    #[error("Please select {}", .0.label())]
    MissingSelection(SelectionField),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid input values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CalcError {
    /// Check if this is a missing-selection error
    pub fn is_missing_selection(&self) -> bool {
        matches!(self, Self::MissingSelection(_))
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for CalcError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_selection_messages() {
        assert_eq!(
            CalcError::MissingSelection(SelectionField::Year).to_string(),
            "Please select a year"
        );
        assert_eq!(
            CalcError::MissingSelection(SelectionField::Consumption).to_string(),
            "Please select a consumption bracket"
        );
        assert_eq!(
            CalcError::MissingSelection(SelectionField::Shift).to_string(),
            "Please select a shift model"
        );
    }

    #[test]
    fn test_error_display() {
        let err = CalcError::Config("bad slider step".into());
        assert_eq!(err.to_string(), "Configuration error: bad slider step");
        assert!(!err.is_missing_selection());
    }

    #[test]
    fn test_tui_error_display() {
        let err = CalcError::Tui("terminal event stream closed".into());
        assert_eq!(err.to_string(), "TUI error: terminal event stream closed");
        assert!(CalcError::MissingSelection(SelectionField::Shift).is_missing_selection());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CalcError = io_err.into();
        assert!(matches!(err, CalcError::Io(_)));
    }
}
