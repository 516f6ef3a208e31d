//! The set of symptoms a person selected.

use std::collections::HashSet;

/// An ordered, duplicate-free set of selected symptom identifiers.
///
/// Membership checks are constant time; iteration follows the order in which
/// symptoms were first selected, which is the order code cross-references
/// are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct SymptomSelection {
    order: Vec<String>,
    members: HashSet<String>,
}

impl SymptomSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symptom. Returns false if it was already selected.
    pub fn insert(&mut self, symptom_id: impl Into<String>) -> bool {
        let symptom_id = symptom_id.into();
        if self.members.contains(&symptom_id) {
            return false;
        }
        self.members.insert(symptom_id.clone());
        self.order.push(symptom_id);
        true
    }

    /// Checks whether a symptom is selected.
    pub fn contains(&self, symptom_id: &str) -> bool {
        self.members.contains(symptom_id)
    }

    /// Number of selected symptoms.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates selected identifiers in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl From<Vec<String>> for SymptomSelection {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SymptomSelection> for Vec<String> {
    fn from(selection: SymptomSelection) -> Self {
        selection.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_deduplicates_in_order() {
        let selection: SymptomSelection = ["headache", "fever", "headache"].into_iter().collect();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["headache", "fever"]);
    }

    #[test]
    fn test_selection_contains() {
        let mut selection = SymptomSelection::new();
        assert!(selection.is_empty());
        assert!(selection.insert("cough"));
        assert!(!selection.insert("cough"));
        assert!(selection.contains("cough"));
        assert!(!selection.contains("Cough"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_selection_serde_as_list() {
        let selection: SymptomSelection =
            serde_json::from_str(r#"["fever", "cough", "fever"]"#).unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["fever","cough"]"#);
    }
}
