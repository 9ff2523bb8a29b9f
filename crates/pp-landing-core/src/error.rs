//! Error types for the landing page core

use thiserror::Error;

/// Main error type for landing page component setup
#[derive(Error, Debug)]
pub enum LandingError {
    /// A component's required structure is absent from the page
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A browser bridge call failed
    #[error("Bridge error: {0}")]
    Bridge(String),
}

impl LandingError {
    /// Whether this error means "feature not on this page".
    ///
    /// Such errors are swallowed by the UI layer: the component stays inert.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, LandingError::MissingElement(_))
    }
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LandingError::MissingElement("carousel track".to_string());
        assert_eq!(format!("{}", err), "Missing element: carousel track");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: LandingError = json_err.into();
        assert!(matches!(err, LandingError::Serialization(_)));
        assert!(!err.is_missing_element());
    }

    #[test]
    fn test_missing_element_is_silent_kind() {
        assert!(LandingError::MissingElement("x".into()).is_missing_element());
        assert!(!LandingError::InvalidConfig("x".into()).is_missing_element());
    }
}
