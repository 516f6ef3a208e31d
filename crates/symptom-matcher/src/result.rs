//! Diagnosis result types.

use std::time::Duration;

use symptom_catalog::{Condition, Severity, Urgency};

use crate::error::IntegrityWarning;

/// A condition together with how well it matched a selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCondition {
    /// The matched catalog condition.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub condition: Condition,
    /// Number of the condition's symptoms that were selected.
    pub match_count: usize,
    /// Share of the condition's symptoms that were selected, 0-100.
    pub match_percentage: u32,
    /// Weighted ranking score.
    pub relevance_score: f64,
}

impl ScoredCondition {
    /// Identifier of the underlying condition.
    pub fn id(&self) -> &str {
        &self.condition.id
    }

    /// Severity of the underlying condition.
    pub fn severity(&self) -> Severity {
        self.condition.severity
    }

    /// Returns true for severe conditions or those needing immediate care.
    pub fn is_urgent(&self) -> bool {
        self.condition.severity == Severity::Severe
            || self.condition.urgency == Some(Urgency::Immediate)
    }
}

/// Ranked outcome of a diagnosis request.
///
/// An empty `matches` list is a legitimate "nothing matched" answer. Catalog
/// failures never produce a `Diagnosis`; they surface as
/// [`MatcherError`](crate::MatcherError).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnosis {
    /// Best-first ranked conditions, each with at least one matched symptom.
    pub matches: Vec<ScoredCondition>,
    /// Records excluded because of data-quality problems.
    pub warnings: Vec<IntegrityWarning>,
    /// Execution statistics.
    pub stats: DiagnosisStats,
}

impl Diagnosis {
    /// Creates an empty diagnosis.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of ranked conditions.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if no condition matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterates ranked conditions best-first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredCondition> {
        self.matches.iter()
    }

    /// Identifiers of ranked conditions, best-first.
    pub fn condition_ids(&self) -> Vec<&str> {
        self.matches.iter().map(ScoredCondition::id).collect()
    }

    /// Returns true when any ranked condition is severe or needs immediate
    /// care, in which case the person should be told to see a doctor now.
    pub fn requires_urgent_care(&self) -> bool {
        self.matches.iter().any(ScoredCondition::is_urgent)
    }
}

impl IntoIterator for Diagnosis {
    type Item = ScoredCondition;
    type IntoIter = std::vec::IntoIter<ScoredCondition>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnosis {
    type Item = &'a ScoredCondition;
    type IntoIter = std::slice::Iter<'a, ScoredCondition>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Statistics from a diagnosis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosisStats {
    /// Time spent scoring and ranking, excluding the catalog read.
    pub duration: Duration,
    /// Conditions that were scored.
    pub conditions_scored: usize,
    /// Conditions skipped because of integrity warnings.
    pub conditions_skipped: usize,
    /// Conditions with at least one match, before truncation.
    pub candidates: usize,
}
