//! Error types for catalog access.

use thiserror::Error;

/// Errors a catalog can report when its records are requested.
///
/// Both variants mean the catalog cannot be trusted for the current request.
/// Callers must not treat either one as "no data".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The backing store could not be reached or read.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The backing store answered, but with records that could not be decoded.
    #[error("malformed catalog data: {0}")]
    Malformed(String),
}

impl CatalogError {
    /// Creates an unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Creates a malformed-data error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unavailable() {
        let err = CatalogError::unavailable("connection refused");
        assert_eq!(err.to_string(), "catalog unavailable: connection refused");
    }

    #[test]
    fn test_error_display_malformed() {
        let err = CatalogError::malformed("missing field `id`");
        assert_eq!(err.to_string(), "malformed catalog data: missing field `id`");
    }
}
