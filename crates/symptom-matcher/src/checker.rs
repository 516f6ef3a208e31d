//! One-call symptom check combining ranking and code cross-referencing.

use symptom_catalog::{StandardCodeEntry, SymptomCatalog};

use crate::codes::CodeLookup;
use crate::config::MatcherConfig;
use crate::error::MatcherResult;
use crate::matcher::ConditionMatcher;
use crate::resolver::CodeResolver;
use crate::result::Diagnosis;
use crate::selection::SymptomSelection;

/// What a person reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosisRequest {
    /// Selected symptom identifiers.
    pub selection: SymptomSelection,
    /// Selected duration identifier. Carried into the report, never scored.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<String>,
}

impl DiagnosisRequest {
    /// Creates a request without a duration.
    pub fn new(selection: SymptomSelection) -> Self {
        Self {
            selection,
            duration: None,
        }
    }

    /// Attaches the selected duration.
    pub fn with_duration(mut self, duration_id: impl Into<String>) -> Self {
        self.duration = Some(duration_id.into());
        self
    }
}

/// Ranked conditions and code cross-references for one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckReport {
    /// Ranked condition matches.
    pub diagnosis: Diagnosis,
    /// Standardized codes for the selected symptoms.
    pub codes: Vec<StandardCodeEntry>,
    /// Duration identifier from the request.
    pub duration: Option<String>,
}

/// Runs the condition matcher and the code resolver over the same request.
///
/// # Example
///
/// ```rust
/// use symptom_catalog::{Condition, InMemoryCatalog, Severity};
/// use symptom_matcher::{DiagnosisRequest, StaticCodeTable, SymptomChecker};
///
/// let catalog = InMemoryCatalog::new()
///     .with_condition(Condition::new("tension", "Tension headache", ["headache"], Severity::Mild));
/// let codes = StaticCodeTable::icd10();
/// let checker = SymptomChecker::new(&catalog, &codes);
///
/// let request = DiagnosisRequest::new(["headache"].into_iter().collect()).with_duration("1-3d");
/// let report = checker.check(&request).unwrap();
///
/// assert_eq!(report.diagnosis.len(), 1);
/// assert_eq!(report.codes.len(), 2);
/// assert_eq!(report.duration.as_deref(), Some("1-3d"));
/// ```
pub struct SymptomChecker<'a> {
    matcher: ConditionMatcher<'a>,
    resolver: CodeResolver<'a>,
}

impl<'a> SymptomChecker<'a> {
    /// Creates a checker with default ranking parameters.
    pub fn new(catalog: &'a dyn SymptomCatalog, codes: &'a dyn CodeLookup) -> Self {
        Self::with_config(catalog, codes, MatcherConfig::default())
    }

    /// Creates a checker with custom ranking parameters.
    pub fn with_config(
        catalog: &'a dyn SymptomCatalog,
        codes: &'a dyn CodeLookup,
        config: MatcherConfig,
    ) -> Self {
        Self {
            matcher: ConditionMatcher::with_config(catalog, config),
            resolver: CodeResolver::new(codes),
        }
    }

    /// Returns the underlying matcher.
    pub fn matcher(&self) -> &ConditionMatcher<'a> {
        &self.matcher
    }

    /// Ranks conditions and resolves codes for `request`.
    ///
    /// # Errors
    ///
    /// Fails only when the catalog cannot be read; no partial report is
    /// produced in that case.
    pub fn check(&self, request: &DiagnosisRequest) -> MatcherResult<CheckReport> {
        let diagnosis = self.matcher.diagnose(&request.selection)?;
        let codes = self.resolver.resolve(&request.selection);
        Ok(CheckReport {
            diagnosis,
            codes,
            duration: request.duration.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::StaticCodeTable;
    use crate::error::MatcherError;
    use symptom_catalog::{
        CatalogError, CatalogResult, Condition, InMemoryCatalog, Severity, Symptom,
        SymptomCategory, SymptomDuration,
    };

    struct DownCatalog;

    impl SymptomCatalog for DownCatalog {
        fn list_categories(&self) -> CatalogResult<Vec<SymptomCategory>> {
            Err(CatalogError::unavailable("down"))
        }

        fn list_symptoms(&self) -> CatalogResult<Vec<Symptom>> {
            Err(CatalogError::unavailable("down"))
        }

        fn list_durations(&self) -> CatalogResult<Vec<SymptomDuration>> {
            Err(CatalogError::unavailable("down"))
        }

        fn list_conditions(&self) -> CatalogResult<Vec<Condition>> {
            Err(CatalogError::unavailable("down"))
        }
    }

    #[test]
    fn test_check_empty_request() {
        let codes = StaticCodeTable::icd10();
        let checker = SymptomChecker::new(&DownCatalog, &codes);
        let report = checker.check(&DiagnosisRequest::default()).unwrap();

        assert!(report.diagnosis.is_empty());
        assert!(report.codes.is_empty());
        assert!(report.duration.is_none());
    }

    #[test]
    fn test_check_catalog_failure_is_not_empty_result() {
        let codes = StaticCodeTable::icd10();
        let checker = SymptomChecker::new(&DownCatalog, &codes);
        let request = DiagnosisRequest::new(["fever"].into_iter().collect());

        assert!(matches!(
            checker.check(&request),
            Err(MatcherError::CatalogUnavailable(_))
        ));
    }

    #[test]
    fn test_check_duration_does_not_affect_ranking() {
        let catalog = InMemoryCatalog::new()
            .with_condition(Condition::new("flu", "Flu", ["fever", "cough"], Severity::Moderate))
            .with_condition(Condition::new("cold", "Cold", ["cough"], Severity::Mild));
        let codes = StaticCodeTable::icd10();
        let checker = SymptomChecker::new(&catalog, &codes);
        let selection: SymptomSelection = ["cough"].into_iter().collect();

        let without = checker.check(&DiagnosisRequest::new(selection.clone())).unwrap();
        let with = checker
            .check(&DiagnosisRequest::new(selection).with_duration("over-week"))
            .unwrap();

        assert_eq!(without.diagnosis.matches, with.diagnosis.matches);
        assert_eq!(with.duration.as_deref(), Some("over-week"));
        assert_eq!(with.codes[0].code, "R05");
    }

    #[test]
    fn test_check_with_config() {
        let catalog = InMemoryCatalog::new();
        let codes = StaticCodeTable::new();
        let config = MatcherConfig::builder().with_max_results(1).build();
        let checker = SymptomChecker::with_config(&catalog, &codes, config);
        assert_eq!(checker.matcher().config().max_results, 1);
    }
}
