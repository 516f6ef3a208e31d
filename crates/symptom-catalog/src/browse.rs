//! Browsing helpers for symptom pickers.
//!
//! Narrow the symptom list by category and by a free-text search over the
//! primary display name. The pseudo-category [`ALL_CATEGORY_ID`] stands for
//! "every symptom" and is never stored in a catalog.

use crate::model::{Symptom, SymptomCategory};

/// Identifier of the synthetic category that matches every symptom.
pub const ALL_CATEGORY_ID: &str = "all";

/// A view over catalog categories and symptoms for symptom pickers.
///
/// Categories with no symptoms are hidden.
///
/// # Example
///
/// ```rust
/// use symptom_catalog::{Symptom, SymptomBrowser, SymptomCategory, ALL_CATEGORY_ID};
///
/// let categories = vec![
///     SymptomCategory::new("resp", "Respiratory"),
///     SymptomCategory::new("skin", "Skin"),
/// ];
/// let symptoms = vec![
///     Symptom::new("cough", "Cough").in_category("resp"),
///     Symptom::new("fever", "Fever"),
/// ];
///
/// let browser = SymptomBrowser::new(&categories, &symptoms);
/// assert_eq!(browser.categories().len(), 1);
/// assert_eq!(browser.category_count(ALL_CATEGORY_ID), 2);
/// assert_eq!(browser.filter("resp", "").len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SymptomBrowser<'a> {
    categories: Vec<&'a SymptomCategory>,
    symptoms: &'a [Symptom],
}

impl<'a> SymptomBrowser<'a> {
    /// Creates a browser, dropping categories that contain no symptoms.
    pub fn new(categories: &'a [SymptomCategory], symptoms: &'a [Symptom]) -> Self {
        let categories = categories
            .iter()
            .filter(|category| {
                symptoms
                    .iter()
                    .any(|s| s.category.as_deref() == Some(category.id.as_str()))
            })
            .collect();
        Self {
            categories,
            symptoms,
        }
    }

    /// Categories that have at least one symptom, in catalog order.
    pub fn categories(&self) -> &[&'a SymptomCategory] {
        &self.categories
    }

    /// Number of symptoms in a category. [`ALL_CATEGORY_ID`] counts all of them.
    pub fn category_count(&self, category_id: &str) -> usize {
        if category_id == ALL_CATEGORY_ID {
            return self.symptoms.len();
        }
        self.symptoms
            .iter()
            .filter(|s| s.category.as_deref() == Some(category_id))
            .count()
    }

    /// Number of symptoms whose name contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search_match_count(&self, query: &str) -> usize {
        let needle = query.to_lowercase();
        self.symptoms
            .iter()
            .filter(|s| name_matches(s, &needle))
            .count()
    }

    /// Symptoms in `category_id` whose name contains `query`, ignoring case.
    ///
    /// A category that is not visible in this browser (removed, merged or
    /// empty) is treated as [`ALL_CATEGORY_ID`].
    pub fn filter(&self, category_id: &str, query: &str) -> Vec<&'a Symptom> {
        let known = category_id == ALL_CATEGORY_ID
            || self.categories.iter().any(|c| c.id == category_id);
        let category = if known { category_id } else { ALL_CATEGORY_ID };
        let needle = query.to_lowercase();

        self.symptoms
            .iter()
            .filter(|s| {
                category == ALL_CATEGORY_ID || s.category.as_deref() == Some(category)
            })
            .filter(|s| name_matches(s, &needle))
            .collect()
    }
}

fn name_matches(symptom: &Symptom, lowercase_needle: &str) -> bool {
    lowercase_needle.is_empty() || symptom.name.primary.to_lowercase().contains(lowercase_needle)
}
