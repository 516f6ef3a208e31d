//! Cross-referencing selected symptoms to standardized codes.

use std::collections::HashSet;

use symptom_catalog::StandardCodeEntry;
use tracing::debug;

use crate::codes::CodeLookup;
use crate::selection::SymptomSelection;

/// Resolves a symptom selection to a duplicate-free list of code entries.
///
/// # Example
///
/// ```rust
/// use symptom_matcher::{CodeResolver, StaticCodeTable, SymptomSelection};
///
/// let table = StaticCodeTable::icd10();
/// let resolver = CodeResolver::new(&table);
/// let selection: SymptomSelection = ["fever", "headache"].into_iter().collect();
///
/// let codes: Vec<String> = resolver.resolve(&selection).into_iter().map(|e| e.code).collect();
/// assert_eq!(codes, vec!["R50.9", "R51", "G44.1"]);
/// ```
pub struct CodeResolver<'a> {
    lookup: &'a dyn CodeLookup,
}

impl<'a> CodeResolver<'a> {
    /// Creates a resolver over a code lookup.
    pub fn new(lookup: &'a dyn CodeLookup) -> Self {
        Self { lookup }
    }

    /// Collects the entries of every selected symptom, in selection order.
    ///
    /// Entries whose `code` was already collected are dropped, so the first
    /// occurrence wins. Symptoms unknown to the lookup contribute nothing.
    pub fn resolve(&self, selection: &SymptomSelection) -> Vec<StandardCodeEntry> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();

        for symptom_id in selection.iter() {
            for entry in self.lookup.codes_for(symptom_id) {
                if seen.insert(entry.code.clone()) {
                    resolved.push(entry);
                }
            }
        }

        debug!(
            selected = selection.len(),
            resolved = resolved.len(),
            "code cross-reference complete"
        );
        resolved
    }
}
