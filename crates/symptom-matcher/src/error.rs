//! Error and warning types for symptom matching.

use symptom_catalog::CatalogError;
use thiserror::Error;

/// Errors that abort a diagnosis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    /// The catalog could not be read. Distinct from a diagnosis with no
    /// matches; presentation code must not show it as "nothing found".
    #[error("unable to analyze symptoms, try again: {0}")]
    CatalogUnavailable(#[from] CatalogError),
}

/// Result type for matcher operations.
pub type MatcherResult<T> = std::result::Result<T, MatcherError>;

/// A data-quality problem in a single catalog record.
///
/// The offending record is excluded and the rest of the ranking proceeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegrityWarning {
    /// The condition lists no symptoms and can never match.
    #[error("condition {condition_id} has no associated symptoms")]
    EmptySignature {
        /// Identifier of the offending condition.
        condition_id: String,
    },
}

impl IntegrityWarning {
    /// Identifier of the record the warning is about.
    pub fn condition_id(&self) -> &str {
        match self {
            Self::EmptySignature { condition_id } => condition_id,
        }
    }
}
