//! Error types for lrucache

use thiserror::Error;

/// Result type alias for lrucache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction and lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction parameters were rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Key not found
    #[error("Key not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfiguration("capacity must be at least 1, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: capacity must be at least 1, got 0"
        );
        assert_eq!(Error::NotFound.to_string(), "Key not found");
    }
}
