//! In-memory catalog implementation.

#[cfg(feature = "serde")]
use std::path::Path;

use crate::error::CatalogResult;
#[cfg(feature = "serde")]
use crate::error::CatalogError;
use crate::model::{Condition, LocalizedText, Symptom, SymptomCategory, SymptomDuration};
use crate::traits::SymptomCatalog;

/// A catalog held entirely in memory.
///
/// Records are kept ordered by primary display name as they are added, so the
/// `list_*` methods return them in catalog order without re-sorting. Records
/// with equal names keep their insertion order.
///
/// # Example
///
/// ```rust
/// use symptom_catalog::{Condition, InMemoryCatalog, Severity, Symptom, SymptomCatalog};
///
/// let catalog = InMemoryCatalog::new()
///     .with_symptom(Symptom::new("fever", "Fever"))
///     .with_condition(Condition::new("flu", "Influenza", ["fever"], Severity::Moderate));
///
/// assert_eq!(catalog.list_conditions().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InMemoryCatalog {
    #[cfg_attr(feature = "serde", serde(default))]
    categories: Vec<SymptomCategory>,
    #[cfg_attr(feature = "serde", serde(default))]
    symptoms: Vec<Symptom>,
    #[cfg_attr(feature = "serde", serde(default))]
    durations: Vec<SymptomDuration>,
    #[cfg_attr(feature = "serde", serde(default))]
    conditions: Vec<Condition>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category.
    pub fn add_category(&mut self, category: SymptomCategory) {
        insert_by_name(&mut self.categories, category, |c| &c.name);
    }

    /// Adds a symptom.
    pub fn add_symptom(&mut self, symptom: Symptom) {
        insert_by_name(&mut self.symptoms, symptom, |s| &s.name);
    }

    /// Adds a duration option.
    pub fn add_duration(&mut self, duration: SymptomDuration) {
        insert_by_name(&mut self.durations, duration, |d| &d.name);
    }

    /// Adds a condition.
    pub fn add_condition(&mut self, condition: Condition) {
        insert_by_name(&mut self.conditions, condition, |c| &c.name);
    }

    /// Builder form of [`add_category`](Self::add_category).
    pub fn with_category(mut self, category: SymptomCategory) -> Self {
        self.add_category(category);
        self
    }

    /// Builder form of [`add_symptom`](Self::add_symptom).
    pub fn with_symptom(mut self, symptom: Symptom) -> Self {
        self.add_symptom(symptom);
        self
    }

    /// Builder form of [`add_duration`](Self::add_duration).
    pub fn with_duration(mut self, duration: SymptomDuration) -> Self {
        self.add_duration(duration);
        self
    }

    /// Builder form of [`add_condition`](Self::add_condition).
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.add_condition(condition);
        self
    }

    /// Parses a catalog from a JSON document with optional `categories`,
    /// `symptoms`, `durations` and `conditions` arrays.
    ///
    /// Decoding failures are reported as [`CatalogError::Malformed`].
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let raw: InMemoryCatalog =
            serde_json::from_str(json).map_err(|e| CatalogError::malformed(e.to_string()))?;
        Ok(raw.reordered())
    }

    /// Reads and parses a JSON catalog file.
    ///
    /// A file that cannot be read is reported as [`CatalogError::Unavailable`].
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::unavailable(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Re-inserts every record so document order becomes name order.
    #[cfg(feature = "serde")]
    fn reordered(self) -> Self {
        let mut catalog = Self::new();
        self.categories.into_iter().for_each(|c| catalog.add_category(c));
        self.symptoms.into_iter().for_each(|s| catalog.add_symptom(s));
        self.durations.into_iter().for_each(|d| catalog.add_duration(d));
        self.conditions.into_iter().for_each(|c| catalog.add_condition(c));
        catalog
    }
}

/// Inserts after every record whose name sorts at or before the new one.
fn insert_by_name<T>(records: &mut Vec<T>, record: T, name: impl Fn(&T) -> &LocalizedText) {
    let key = name(&record).primary.clone();
    let at = records.partition_point(|existing| name(existing).primary <= key);
    records.insert(at, record);
}

impl SymptomCatalog for InMemoryCatalog {
    fn list_categories(&self) -> CatalogResult<Vec<SymptomCategory>> {
        Ok(self.categories.clone())
    }

    fn list_symptoms(&self) -> CatalogResult<Vec<Symptom>> {
        Ok(self.symptoms.clone())
    }

    fn list_durations(&self) -> CatalogResult<Vec<SymptomDuration>> {
        Ok(self.durations.clone())
    }

    fn list_conditions(&self) -> CatalogResult<Vec<Condition>> {
        Ok(self.conditions.clone())
    }
}
