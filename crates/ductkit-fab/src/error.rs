//! Error types for the fabrication pipeline.

use thiserror::Error;

/// Errors that can occur while generating fabrication files.
#[derive(Error, Debug)]
pub enum FabError {
    /// A part carries degenerate or contradictory dimensions.
    #[error("invalid part '{name}': {reason}")]
    InvalidPart { name: String, reason: String },

    /// The project record violates the input contract.
    #[error("invalid project data: {0}")]
    InvalidProject(String),
}

/// Result type alias for fabrication operations.
pub type FabResult<T> = Result<T, FabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FabError::InvalidPart {
            name: "Base_Tray".to_string(),
            reason: "width must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid part 'Base_Tray': width must be positive"
        );

        let err = FabError::InvalidProject("empty part list".to_string());
        assert_eq!(err.to_string(), "invalid project data: empty part list");
    }
}
