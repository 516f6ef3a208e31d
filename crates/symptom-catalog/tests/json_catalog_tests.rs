//! Integration tests for loading catalogs from JSON files.

#![cfg(feature = "serde")]

use std::io::Write;

use symptom_catalog::{
    CatalogError, InMemoryCatalog, Language, Severity, SymptomBrowser, SymptomCatalog, Urgency,
    ALL_CATEGORY_ID,
};

const CATALOG_JSON: &str = r#"{
    "categories": [
        {"id": "resp", "name": {"primary": "ระบบทางเดินหายใจ", "secondary": "Respiratory"}},
        {"id": "general", "name": {"primary": "ทั่วไป", "secondary": "General"}},
        {"id": "skin", "name": {"primary": "ผิวหนัง", "secondary": "Skin"}}
    ],
    "symptoms": [
        {"id": "fever", "name": {"primary": "ไข้", "secondary": "Fever"}, "category": "general"},
        {"id": "cough", "name": {"primary": "ไอ", "secondary": "Cough"}, "category": "resp"},
        {"id": "fatigue", "name": {"primary": "อ่อนเพลีย"}}
    ],
    "durations": [
        {"id": "lt-1d", "name": {"primary": "Less than a day"}},
        {"id": "1-3d", "name": {"primary": "1-3 days"}}
    ],
    "conditions": [
        {
            "id": "dengue",
            "name": {"primary": "ไข้เลือดออก", "secondary": "Dengue fever"},
            "description": {"primary": "Mosquito-borne viral infection"},
            "symptoms": ["fever", "fatigue"],
            "severity": "severe",
            "self_care": {"primary": "Drink fluids, avoid NSAIDs"},
            "medications": ["paracetamol"],
            "seek_medical_attention": true,
            "urgency": "immediate"
        },
        {
            "id": "cold",
            "name": {"primary": "Common cold"},
            "symptoms": ["cough"],
            "severity": "mild"
        }
    ]
}"#;

fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_catalog_from_file() {
    let file = write_catalog(CATALOG_JSON);
    let catalog = InMemoryCatalog::from_json_file(file.path()).unwrap();

    assert_eq!(catalog.list_categories().unwrap().len(), 3);
    assert_eq!(catalog.list_symptoms().unwrap().len(), 3);
    assert_eq!(catalog.list_durations().unwrap()[0].id, "1-3d");

    let conditions = catalog.list_conditions().unwrap();
    assert_eq!(conditions[0].id, "cold");
    let dengue = &conditions[1];
    assert_eq!(dengue.severity, Severity::Severe);
    assert_eq!(dengue.urgency, Some(Urgency::Immediate));
    assert!(dengue.seek_medical_attention);
    assert_eq!(dengue.name.resolve(Language::Secondary), "Dengue fever");
}

#[test]
fn test_malformed_file_is_distinguishable() {
    let file = write_catalog(r#"{"conditions": [{"id": "x", "name": {"primary": "X"}, "symptoms": [], "severity": "critical"}]}"#);
    let err = InMemoryCatalog::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
}

#[test]
fn test_condition_with_empty_signature_still_loads() {
    let file = write_catalog(
        r#"{"conditions": [{"id": "x", "name": {"primary": "X"}, "symptoms": [], "severity": "mild"}]}"#,
    );
    let catalog = InMemoryCatalog::from_json_file(file.path()).unwrap();
    assert!(!catalog.list_conditions().unwrap()[0].has_signature());
}

#[test]
fn test_browse_loaded_catalog() {
    let catalog = InMemoryCatalog::from_json_str(CATALOG_JSON).unwrap();
    let categories = catalog.list_categories().unwrap();
    let symptoms = catalog.list_symptoms().unwrap();
    let browser = SymptomBrowser::new(&categories, &symptoms);

    let visible: Vec<&str> = browser.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(visible.len(), 2);
    assert!(!visible.contains(&"skin"));
    assert_eq!(browser.category_count(ALL_CATEGORY_ID), 3);
    assert_eq!(browser.filter("skin", "").len(), 3);
}

#[test]
fn test_loose_condition_columns_load() {
    let file = write_catalog(
        r#"{"conditions": [
            {"id": "tension", "name": {"primary": "Tension headache"}, "symptoms": ["headache"],
             "severity": "mild", "medications": null, "urgency": "routine"},
            {"id": "migraine", "name": {"primary": "Migraine"}, "symptoms": ["headache", "nausea"],
             "severity": "moderate", "medications": ["ibuprofen"], "urgency": "soon"}
        ]}"#,
    );
    let catalog = InMemoryCatalog::from_json_file(file.path()).unwrap();
    let conditions = catalog.list_conditions().unwrap();

    assert_eq!(conditions.len(), 2);
    let migraine = &conditions[0];
    assert_eq!(migraine.urgency, Some(Urgency::Soon));
    assert_eq!(migraine.medications, vec!["ibuprofen"]);
    let tension = &conditions[1];
    assert_eq!(tension.urgency, None);
    assert!(tension.medications.is_empty());
}
