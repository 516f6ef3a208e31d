//! Symptom to standardized-code lookup.
//!
//! [`CodeLookup`] is the seam between the resolver and wherever codes come
//! from. [`StaticCodeTable`] is the bundled implementation; swap in a client
//! for a coded-terminology service by implementing the trait.

use std::collections::HashMap;

use symptom_catalog::{Severity, StandardCodeEntry};

/// Source of standardized code entries keyed by symptom identifier.
pub trait CodeLookup: Send + Sync {
    /// Entries associated with a symptom, in table order.
    ///
    /// Returns an empty Vec for unknown symptoms.
    fn codes_for(&self, symptom_id: &str) -> Vec<StandardCodeEntry>;
}

/// A fixed symptom-to-code table plus a searchable reference list.
///
/// # Example
///
/// ```rust
/// use symptom_matcher::{CodeLookup, StaticCodeTable};
///
/// let table = StaticCodeTable::icd10();
/// let codes: Vec<String> = table.codes_for("headache").into_iter().map(|e| e.code).collect();
/// assert_eq!(codes, vec!["R51", "G44.1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCodeTable {
    by_symptom: HashMap<String, Vec<StandardCodeEntry>>,
    reference: Vec<StandardCodeEntry>,
}

impl StaticCodeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a symptom to one more entry, after any already mapped.
    pub fn insert(&mut self, symptom_id: impl Into<String>, entry: StandardCodeEntry) {
        self.by_symptom
            .entry(symptom_id.into())
            .or_default()
            .push(entry);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_code(mut self, symptom_id: impl Into<String>, entry: StandardCodeEntry) -> Self {
        self.insert(symptom_id, entry);
        self
    }

    /// Adds an entry to the searchable reference list.
    pub fn with_reference(mut self, entry: StandardCodeEntry) -> Self {
        self.reference.push(entry);
        self
    }

    /// Number of symptoms with at least one mapped entry.
    pub fn symptom_count(&self) -> usize {
        self.by_symptom.len()
    }

    /// Searches the reference list.
    ///
    /// An entry matches when its description contains `term` ignoring case,
    /// or its code contains the upper-cased `term`.
    pub fn search(&self, term: &str) -> Vec<&StandardCodeEntry> {
        let lower = term.to_lowercase();
        let upper = term.to_uppercase();
        self.reference
            .iter()
            .filter(|e| e.description.to_lowercase().contains(&lower) || e.code.contains(&upper))
            .collect()
    }

    /// The bundled ICD-10 subset covering common self-reported symptoms.
    pub fn icd10() -> Self {
        let general = "Symptoms and signs, general";
        let nervous = "Symptoms and signs involving the nervous system";
        let respiratory = "Symptoms and signs involving the respiratory system";
        let digestive = "Symptoms and signs involving the digestive system";

        Self::new()
            .with_code(
                "fever",
                StandardCodeEntry::new("R50.9", "Fever, unspecified", general)
                    .with_severity(Severity::Mild),
            )
            .with_code(
                "headache",
                StandardCodeEntry::new("R51", "Headache", nervous).with_severity(Severity::Mild),
            )
            .with_code(
                "headache",
                StandardCodeEntry::new(
                    "G44.1",
                    "Vascular headache, not elsewhere classified",
                    "Diseases of the nervous system",
                )
                .with_severity(Severity::Moderate),
            )
            .with_code(
                "cough",
                StandardCodeEntry::new("R05", "Cough", respiratory).with_severity(Severity::Mild),
            )
            .with_code(
                "abdominal_pain",
                StandardCodeEntry::new("R10.9", "Unspecified abdominal pain", digestive)
                    .with_severity(Severity::Moderate),
            )
            .with_reference(
                StandardCodeEntry::new("R50.9", "Fever, unspecified", general)
                    .with_severity(Severity::Mild)
                    .with_symptoms(["fever", "headache"]),
            )
            .with_reference(
                StandardCodeEntry::new("R51", "Headache", nervous)
                    .with_severity(Severity::Mild)
                    .with_symptoms(["headache"]),
            )
            .with_reference(
                StandardCodeEntry::new(
                    "K59.00",
                    "Constipation, unspecified",
                    "Diseases of the digestive system",
                )
                .with_severity(Severity::Mild)
                .with_symptoms(["constipation", "abdominal_pain"]),
            )
            .with_reference(
                StandardCodeEntry::new(
                    "J06.9",
                    "Acute upper respiratory infection, unspecified",
                    "Diseases of the respiratory system",
                )
                .with_severity(Severity::Mild)
                .with_symptoms(["cough", "sore_throat", "runny_nose"]),
            )
            .with_reference(
                StandardCodeEntry::new(
                    "M25.50",
                    "Pain in unspecified joint",
                    "Diseases of the musculoskeletal system",
                )
                .with_severity(Severity::Mild)
                .with_symptoms(["joint_pain"]),
            )
    }
}

impl CodeLookup for StaticCodeTable {
    fn codes_for(&self, symptom_id: &str) -> Vec<StandardCodeEntry> {
        self.by_symptom.get(symptom_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(entries: &[StandardCodeEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn test_icd10_table_mappings() {
        let table = StaticCodeTable::icd10();
        assert_eq!(table.symptom_count(), 4);
        assert_eq!(codes(&table.codes_for("fever")), vec!["R50.9"]);
        assert_eq!(codes(&table.codes_for("headache")), vec!["R51", "G44.1"]);
        assert_eq!(codes(&table.codes_for("abdominal_pain")), vec!["R10.9"]);
    }

    #[test]
    fn test_unknown_symptom_has_no_codes() {
        let table = StaticCodeTable::icd10();
        assert!(table.codes_for("joint_pain").is_empty());
        assert!(table.codes_for("Headache").is_empty());
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut table = StaticCodeTable::new();
        table.insert("rash", StandardCodeEntry::new("R21", "Rash", "Skin"));
        table.insert("rash", StandardCodeEntry::new("L30.9", "Dermatitis", "Skin"));
        assert_eq!(codes(&table.codes_for("rash")), vec!["R21", "L30.9"]);
    }

    #[test]
    fn test_search_by_description() {
        let table = StaticCodeTable::icd10();
        let found: Vec<&str> = table
            .search("RESPIRATORY")
            .into_iter()
            .map(|e| e.code.as_str())
            .collect();
        assert_eq!(found, vec!["J06.9"]);
    }

    #[test]
    fn test_search_by_code() {
        let table = StaticCodeTable::icd10();
        let found: Vec<&str> = table.search("r5").into_iter().map(|e| e.code.as_str()).collect();
        assert_eq!(found, vec!["R50.9", "R51"]);
    }

    #[test]
    fn test_search_no_match() {
        let table = StaticCodeTable::icd10();
        assert!(table.search("fracture").is_empty());
    }
}
