//! Cross-cutting error types for Atrium.
//!
//! Storage errors (`DatabaseError`) live in `atrium-db` and configuration
//! errors in `atrium-config`. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Atrium crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = CoreError::NotFound {
            entity_type: "research_project".into(),
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "Entity not found: research_project 42");
    }

    #[test]
    fn validation_message() {
        let err = CoreError::Validation("unknown status 'paused'".into());
        assert_eq!(err.to_string(), "Validation error: unknown status 'paused'");
    }
}
