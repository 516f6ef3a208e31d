//! The read-only catalog contract.
//!
//! The matcher only ever reads from a catalog, through [`SymptomCatalog`].
//! Implement it for whatever actually stores the records (a database client,
//! a remote API, or the bundled [`InMemoryCatalog`](crate::InMemoryCatalog)).
//!
//! # Example: wrapping a remote store
//!
//! ```ignore
//! use symptom_catalog::{CatalogError, CatalogResult, Condition, SymptomCatalog};
//!
//! impl SymptomCatalog for RemoteCatalog {
//!     fn list_conditions(&self) -> CatalogResult<Vec<Condition>> {
//!         self.client
//!             .select("conditions")
//!             .order("name")
//!             .fetch()
//!             .map_err(|e| CatalogError::unavailable(e.to_string()))
//!     }
//!     // ...
//! }
//! ```

use crate::error::CatalogResult;
use crate::model::{Condition, Symptom, SymptomCategory, SymptomDuration};

/// Read access to symptom reference data.
///
/// Every list is ordered by primary display name. A failure to reach or decode
/// the store is reported as a [`CatalogError`](crate::CatalogError) and must
/// never be turned into an empty list, since an empty list is a valid answer.
///
/// Implementations own any retry or timeout policy.
pub trait SymptomCatalog: Send + Sync {
    /// Lists symptom categories.
    fn list_categories(&self) -> CatalogResult<Vec<SymptomCategory>>;

    /// Lists symptoms.
    fn list_symptoms(&self) -> CatalogResult<Vec<Symptom>>;

    /// Lists duration options.
    fn list_durations(&self) -> CatalogResult<Vec<SymptomDuration>>;

    /// Lists conditions.
    fn list_conditions(&self) -> CatalogResult<Vec<Condition>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::Severity;

    /// Store that is always offline.
    struct OfflineStore;

    impl SymptomCatalog for OfflineStore {
        fn list_categories(&self) -> CatalogResult<Vec<SymptomCategory>> {
            Err(CatalogError::unavailable("offline"))
        }

        fn list_symptoms(&self) -> CatalogResult<Vec<Symptom>> {
            Err(CatalogError::unavailable("offline"))
        }

        fn list_durations(&self) -> CatalogResult<Vec<SymptomDuration>> {
            Err(CatalogError::unavailable("offline"))
        }

        fn list_conditions(&self) -> CatalogResult<Vec<Condition>> {
            Err(CatalogError::unavailable("offline"))
        }
    }

    /// Store with a single condition.
    struct SingleConditionStore;

    impl SymptomCatalog for SingleConditionStore {
        fn list_categories(&self) -> CatalogResult<Vec<SymptomCategory>> {
            Ok(Vec::new())
        }

        fn list_symptoms(&self) -> CatalogResult<Vec<Symptom>> {
            Ok(vec![Symptom::new("fever", "Fever")])
        }

        fn list_durations(&self) -> CatalogResult<Vec<SymptomDuration>> {
            Ok(Vec::new())
        }

        fn list_conditions(&self) -> CatalogResult<Vec<Condition>> {
            Ok(vec![Condition::new("flu", "Influenza", ["fever"], Severity::Moderate)])
        }
    }

    #[test]
    fn test_trait_object_errors_propagate() {
        let store: &dyn SymptomCatalog = &OfflineStore;
        assert!(matches!(
            store.list_conditions(),
            Err(CatalogError::Unavailable(_))
        ));
        assert!(store.list_symptoms().is_err());
    }

    #[test]
    fn test_trait_object_lists() {
        let store: &dyn SymptomCatalog = &SingleConditionStore;
        assert_eq!(store.list_conditions().unwrap().len(), 1);
        assert_eq!(store.list_symptoms().unwrap()[0].id, "fever");
        assert!(store.list_categories().unwrap().is_empty());
    }
}
