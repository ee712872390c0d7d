//! Error types for DistKit

use thiserror::Error;

/// DistKit error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested distribution family is not registered
    #[error("unknown distribution family: `{0}`")]
    UnknownFamily(String),

    /// A required parameter was not found under any of its aliases
    #[error("missing required parameter `{name}` for `{family}`")]
    MissingParameter {
        /// Canonical family name
        family: &'static str,
        /// Primary alias of the missing parameter
        name: &'static str,
    },

    /// A parameter value violates a family constraint
    #[error("invalid parameter for `{family}`: {reason}")]
    InvalidParameter {
        /// Canonical family name
        family: &'static str,
        /// Human-readable constraint violation
        reason: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::UnknownFamily("frobnitz".into());
        assert!(e.to_string().contains("frobnitz"));

        let e = Error::MissingParameter { family: "gamma", name: "shape" };
        assert!(e.to_string().contains("shape"));
        assert!(e.to_string().contains("gamma"));
    }
}
