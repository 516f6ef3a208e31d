//! # symptom-matcher
//!
//! Deterministic ranking of candidate conditions for a set of selected
//! symptoms, with ICD-10 cross-references.
//!
//! This crate reads reference data through the
//! [`SymptomCatalog`](symptom_catalog::SymptomCatalog) trait and never writes
//! anything back. Results are computed fresh on every call.
//!
//! ## Key Features
//!
//! - **Explainable ranking** - `0.6 * matched count + 0.4 * matched percentage`,
//!   severity as tie-break, top 3 by default
//! - **Tunable** - weights and cutoff live in [`MatcherConfig`]
//! - **Pluggable codes** - any [`CodeLookup`] can back the [`CodeResolver`]
//! - **Distinct failures** - an unreachable catalog is a
//!   [`MatcherError::CatalogUnavailable`], never an empty result
//!
//! ## Quick Start
//!
//! ```rust
//! use symptom_catalog::{Condition, InMemoryCatalog, Severity};
//! use symptom_matcher::{DiagnosisRequest, StaticCodeTable, SymptomChecker, SymptomSelection};
//!
//! let catalog = InMemoryCatalog::new()
//!     .with_condition(Condition::new("cold", "Common cold", ["cough", "runny_nose"], Severity::Mild))
//!     .with_condition(Condition::new("flu", "Influenza", ["fever", "cough"], Severity::Moderate));
//! let codes = StaticCodeTable::icd10();
//!
//! let checker = SymptomChecker::new(&catalog, &codes);
//! let selection: SymptomSelection = ["fever", "cough"].into_iter().collect();
//! let report = checker.check(&DiagnosisRequest::new(selection)).unwrap();
//!
//! assert_eq!(report.diagnosis.condition_ids(), vec!["flu", "cold"]);
//! assert_eq!(report.codes[0].code, "R50.9");
//! ```
//!
//! ## Ranking
//!
//! | Step | Rule |
//! |------|------|
//! | Score | `count_weight * match_count + percentage_weight * match_percentage` |
//! | Filter | drop conditions with no matched symptom |
//! | Sort | score desc, then severity desc (severe, moderate, mild), then catalog order |
//! | Truncate | keep `max_results` (default 3) |
//!
//! ## Logging
//!
//! Emits `tracing` events: `warn` for each catalog record excluded for a
//! data-quality problem, `debug` summaries per call. Install a subscriber in
//! the host to see them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod checker;
mod codes;
mod config;
mod error;
mod matcher;
mod resolver;
mod result;
mod selection;

// Public re-exports
pub use checker::{CheckReport, DiagnosisRequest, SymptomChecker};
pub use codes::{CodeLookup, StaticCodeTable};
pub use config::{
    MatcherConfig, MatcherConfigBuilder, DEFAULT_COUNT_WEIGHT, DEFAULT_MAX_RESULTS,
    DEFAULT_PERCENTAGE_WEIGHT,
};
pub use error::{IntegrityWarning, MatcherError, MatcherResult};
pub use matcher::{rank_conditions, ConditionMatcher};
pub use resolver::CodeResolver;
pub use result::{Diagnosis, DiagnosisStats, ScoredCondition};
pub use selection::SymptomSelection;

// Re-export commonly used catalog types for convenience
pub use symptom_catalog::{CatalogError, Condition, Severity, StandardCodeEntry, SymptomCatalog};
