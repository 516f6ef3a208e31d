//! Condition matching and ranking.

use std::collections::HashSet;
use std::time::Instant;

use symptom_catalog::{Condition, SymptomCatalog};
use tracing::{debug, warn};

use crate::config::MatcherConfig;
use crate::error::{IntegrityWarning, MatcherResult};
use crate::result::{Diagnosis, DiagnosisStats, ScoredCondition};
use crate::selection::SymptomSelection;

/// Ranks catalog conditions against a symptom selection.
///
/// The matcher holds no mutable state. Every call reads the catalog afresh
/// and scores each condition; nothing is cached between calls, so one
/// matcher can be shared across threads.
///
/// # Example
///
/// ```rust
/// use symptom_catalog::{Condition, InMemoryCatalog, Severity};
/// use symptom_matcher::{ConditionMatcher, SymptomSelection};
///
/// let catalog = InMemoryCatalog::new()
///     .with_condition(Condition::new("a", "A", ["fever", "headache"], Severity::Mild))
///     .with_condition(Condition::new("b", "B", ["fever"], Severity::Severe));
///
/// let matcher = ConditionMatcher::new(&catalog);
/// let selection: SymptomSelection = ["fever", "headache"].into_iter().collect();
/// let diagnosis = matcher.diagnose(&selection).unwrap();
///
/// assert_eq!(diagnosis.condition_ids(), vec!["a", "b"]);
/// ```
pub struct ConditionMatcher<'a> {
    /// Catalog the conditions are read from.
    catalog: &'a dyn SymptomCatalog,
    /// Ranking parameters.
    config: MatcherConfig,
}

impl<'a> ConditionMatcher<'a> {
    /// Creates a matcher with default weights and a top-3 cutoff.
    pub fn new(catalog: &'a dyn SymptomCatalog) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    /// Creates a matcher with custom ranking parameters.
    pub fn with_config(catalog: &'a dyn SymptomCatalog, config: MatcherConfig) -> Self {
        Self { catalog, config }
    }

    /// Returns the ranking parameters.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Scores every catalog condition against `selection` and returns the
    /// best matches.
    ///
    /// An empty selection returns an empty diagnosis without reading the
    /// catalog.
    ///
    /// # Errors
    ///
    /// [`MatcherError::CatalogUnavailable`](crate::MatcherError::CatalogUnavailable)
    /// if the conditions cannot be listed.
    pub fn diagnose(&self, selection: &SymptomSelection) -> MatcherResult<Diagnosis> {
        if selection.is_empty() {
            return Ok(Diagnosis::empty());
        }

        let conditions = self.catalog.list_conditions()?;
        Ok(rank_conditions(conditions, selection, &self.config))
    }
}

/// Scores, filters, sorts and truncates `conditions` for `selection`.
///
/// This is the synchronous core of [`ConditionMatcher::diagnose`], usable
/// directly by hosts that fetch conditions themselves. `conditions` must be
/// in catalog order; equal-ranked conditions keep that order.
pub fn rank_conditions(
    conditions: Vec<Condition>,
    selection: &SymptomSelection,
    config: &MatcherConfig,
) -> Diagnosis {
    if selection.is_empty() {
        return Diagnosis::empty();
    }

    let start = Instant::now();
    let mut warnings = Vec::new();
    let mut scored = Vec::with_capacity(conditions.len());
    let total = conditions.len();

    for condition in conditions {
        match score(&condition, selection, config) {
            Some(figures) if figures.match_count > 0 => scored.push(ScoredCondition {
                condition,
                match_count: figures.match_count,
                match_percentage: figures.match_percentage,
                relevance_score: figures.relevance_score,
            }),
            Some(_) => {}
            None => {
                warn!(
                    condition_id = %condition.id,
                    "condition has no associated symptoms, excluded from ranking"
                );
                warnings.push(IntegrityWarning::EmptySignature {
                    condition_id: condition.id,
                });
            }
        }
    }

    // sort_by is stable: full ties keep catalog order
    scored.sort_by(|a, b| {
        b.relevance_score
            .total_cmp(&a.relevance_score)
            .then_with(|| b.severity().rank().cmp(&a.severity().rank()))
    });

    let candidates = scored.len();
    scored.truncate(config.max_results);

    let stats = DiagnosisStats {
        duration: start.elapsed(),
        conditions_scored: total - warnings.len(),
        conditions_skipped: warnings.len(),
        candidates,
    };

    debug!(
        selected = selection.len(),
        scored = stats.conditions_scored,
        skipped = stats.conditions_skipped,
        candidates,
        returned = scored.len(),
        elapsed_us = stats.duration.as_micros() as u64,
        "diagnosis complete"
    );

    Diagnosis {
        matches: scored,
        warnings,
        stats,
    }
}

/// Match figures for one condition.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Score {
    match_count: usize,
    match_percentage: u32,
    relevance_score: f64,
}

/// Scores one condition, or returns `None` if its signature is empty.
///
/// Repeated identifiers in a signature are counted once, in the match count
/// and in the denominator alike. This departs from dividing by the raw
/// signature length: `["fever", "fever", "cough"]` against `{fever}` scores
/// 1 match at 50% here, not 2 matches at 67%.
fn score(
    condition: &Condition,
    selection: &SymptomSelection,
    config: &MatcherConfig,
) -> Option<Score> {
    let mut signature = HashSet::with_capacity(condition.symptoms.len());
    let mut match_count = 0;
    for symptom_id in &condition.symptoms {
        if signature.insert(symptom_id.as_str()) && selection.contains(symptom_id) {
            match_count += 1;
        }
    }

    if signature.is_empty() {
        return None;
    }

    let match_percentage = percentage(match_count, signature.len());
    let relevance_score = config.count_weight * match_count as f64
        + config.percentage_weight * f64::from(match_percentage);

    Some(Score {
        match_count,
        match_percentage,
        relevance_score,
    })
}

/// `part / whole` as a whole percentage, halves rounded up.
fn percentage(part: usize, whole: usize) -> u32 {
    (part as f64 * 100.0 / whole as f64).round() as u32
}
