//! Registry error types.

use thiserror::Error;

/// Errors that abort building the endpoint table.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two owners derived the same endpoint path.
    #[error("Endpoint path collision on {path}: already bound by {existing}, also claimed by {incoming}")]
    PathCollision {
        path: String,
        existing: String,
        incoming: String,
    },

    /// Derived path is not a valid route.
    #[error("Invalid endpoint path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_collision_display() {
        let err = RegistryError::PathCollision {
            path: "/api/a/b/execute".to_string(),
            existing: "a.b".to_string(),
            incoming: "a.b_copy".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("/api/a/b/execute"));
        assert!(display.contains("a.b"));
        assert!(display.contains("a.b_copy"));
    }

    #[test]
    fn test_invalid_path_display() {
        let err = RegistryError::InvalidPath("/api//x".to_string());
        assert!(err.to_string().contains("Invalid endpoint path"));
    }
}
