//! # symptom-catalog
//!
//! Reference data model and read-only access contract for symptom matching.
//!
//! This crate provides:
//! - **Records**: [`Symptom`], [`SymptomCategory`], [`SymptomDuration`],
//!   [`Condition`] and [`StandardCodeEntry`], each carrying its display text
//!   as a primary/secondary [`LocalizedText`] pair
//! - **Access contract**: the [`SymptomCatalog`] trait the matcher reads from
//! - **In-memory store**: [`InMemoryCatalog`], loadable from JSON with the
//!   `serde` feature
//! - **Browsing**: [`SymptomBrowser`] for category and name filtering
//!
//! ## Usage
//!
//! ```rust
//! use symptom_catalog::{
//!     Condition, InMemoryCatalog, Severity, Symptom, SymptomCatalog, Urgency,
//! };
//!
//! let catalog = InMemoryCatalog::new()
//!     .with_symptom(Symptom::new("fever", "Fever").in_category("general"))
//!     .with_condition(
//!         Condition::new("dengue", "Dengue fever", ["fever", "rash"], Severity::Severe)
//!             .with_attention(Some(Urgency::Immediate)),
//!     );
//!
//! let conditions = catalog.list_conditions().unwrap();
//! assert_eq!(conditions[0].severity, Severity::Severe);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Serde derives on every record and JSON catalog loading

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod browse;
mod error;
mod memory;
mod model;
mod traits;

pub use browse::{SymptomBrowser, ALL_CATEGORY_ID};
pub use error::{CatalogError, CatalogResult};
pub use memory::InMemoryCatalog;
pub use model::{
    Condition, Language, LocalizedText, Severity, StandardCodeEntry, Symptom, SymptomCategory,
    SymptomDuration, Urgency,
};
pub use traits::SymptomCatalog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        let _: Option<InMemoryCatalog> = None;
        let _: Option<CatalogResult<()>> = None;
        let _: Option<StandardCodeEntry> = None;
        let _: Option<Box<dyn SymptomCatalog>> = None;
    }
}
