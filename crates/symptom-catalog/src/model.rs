//! Reference records held by a symptom catalog.
//!
//! Every record here is immutable reference data. Display text is carried as
//! [`LocalizedText`] so that a primary and a secondary language travel
//! together; nothing in this crate picks between them except
//! [`LocalizedText::resolve`], which exists for presentation code.

use std::fmt;

/// Which of the two carried display languages to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// The catalog's primary language.
    #[default]
    Primary,
    /// The optional secondary language.
    Secondary,
}

/// Display text in a primary language with an optional secondary translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedText {
    /// Text in the primary language. Always present.
    pub primary: String,
    /// Text in the secondary language, if translated.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub secondary: Option<String>,
}

impl LocalizedText {
    /// Creates text with only the primary language filled in.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
        }
    }

    /// Adds a secondary-language translation.
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Returns the text for `language`, falling back to primary when the
    /// secondary translation is missing.
    pub fn resolve(&self, language: Language) -> &str {
        match language {
            Language::Primary => &self.primary,
            Language::Secondary => self.secondary.as_deref().unwrap_or(&self.primary),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(primary: &str) -> Self {
        Self::new(primary)
    }
}

impl From<String> for LocalizedText {
    fn from(primary: String) -> Self {
        Self::new(primary)
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary)
    }
}

/// How serious a condition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Usually resolves with self-care.
    Mild,
    /// May need a consultation.
    Moderate,
    /// Needs medical attention.
    Severe,
}

impl Severity {
    /// Ordering rank used for tie-breaking: severe 3, moderate 2, mild 1.
    pub fn rank(self) -> u8 {
        match self {
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }

    /// Lowercase storage form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How quickly care should be sought. Absent urgency means routine.
///
/// Stored as a free-form string; any value other than `immediate` or `soon`
/// (including `routine`) reads back as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// Go to an emergency department now.
    Immediate,
    /// See a doctor within a day or two.
    Soon,
}

impl Urgency {
    /// Parses the lowercase storage form. Routine and unknown values give
    /// `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "immediate" => Some(Self::Immediate),
            "soon" => Some(Self::Soon),
            _ => None,
        }
    }

    /// Lowercase storage form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Soon => "soon",
        }
    }
}

/// A grouping of symptoms, e.g. "respiratory".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymptomCategory {
    /// Unique category identifier.
    pub id: String,
    /// Display name.
    pub name: LocalizedText,
}

impl SymptomCategory {
    /// Creates a category.
    pub fn new(id: impl Into<String>, name: impl Into<LocalizedText>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A selectable symptom.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symptom {
    /// Unique symptom identifier, e.g. `"fever"`.
    pub id: String,
    /// Display name.
    pub name: LocalizedText,
    /// Owning category; `None` means uncategorized.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
}

impl Symptom {
    /// Creates an uncategorized symptom.
    pub fn new(id: impl Into<String>, name: impl Into<LocalizedText>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
        }
    }

    /// Places the symptom in a category.
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// How long symptoms have lasted. Display-only; never used in scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymptomDuration {
    /// Unique duration identifier.
    pub id: String,
    /// Display name.
    pub name: LocalizedText,
}

impl SymptomDuration {
    /// Creates a duration option.
    pub fn new(id: impl Into<String>, name: impl Into<LocalizedText>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A candidate condition and the symptoms associated with it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    /// Unique condition identifier.
    pub id: String,
    /// Display name.
    pub name: LocalizedText,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<LocalizedText>,
    /// Symptom signature. Expected to be non-empty.
    pub symptoms: Vec<String>,
    /// Severity of the condition.
    pub severity: Severity,
    /// Self-care guidance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub self_care: Option<LocalizedText>,
    /// Suggested over-the-counter medication names. A stored `null` reads
    /// back as an empty list.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "storage::nullable_list")
    )]
    pub medications: Vec<String>,
    /// Whether the person should see a clinician.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seek_medical_attention: bool,
    /// How urgently care is needed; `None` means routine.
    #[cfg_attr(feature = "serde", serde(default, with = "storage::urgency"))]
    pub urgency: Option<Urgency>,
}

impl Condition {
    /// Creates a condition with the given signature and no guidance text.
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<LocalizedText>,
        symptoms: I,
        severity: Severity,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            severity,
            self_care: None,
            medications: Vec::new(),
            seek_medical_attention: false,
            urgency: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<LocalizedText>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the self-care guidance.
    pub fn with_self_care(mut self, self_care: impl Into<LocalizedText>) -> Self {
        self.self_care = Some(self_care.into());
        self
    }

    /// Sets the medication list.
    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medications = medications.into_iter().map(Into::into).collect();
        self
    }

    /// Flags the condition as needing a clinician, with an optional urgency.
    pub fn with_attention(mut self, urgency: Option<Urgency>) -> Self {
        self.seek_medical_attention = true;
        self.urgency = urgency;
        self
    }

    /// Returns true when the symptom signature is non-empty.
    pub fn has_signature(&self) -> bool {
        !self.symptoms.is_empty()
    }
}

/// A standardized disease-classification code tied to one or more symptoms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardCodeEntry {
    /// The code, e.g. `"R51"`. Compared exactly.
    pub code: String,
    /// Human-readable description.
    pub description: String,
    /// Classification chapter or group label.
    pub category: String,
    /// Optional severity tag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub severity: Option<Severity>,
    /// Symptom identifiers this entry is keyed by.
    #[cfg_attr(feature = "serde", serde(default))]
    pub symptoms: Vec<String>,
}

impl StandardCodeEntry {
    /// Creates an entry without severity or symptom keys.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            category: category.into(),
            severity: None,
            symptoms: Vec::new(),
        }
    }

    /// Sets the severity tag.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the symptom keys.
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }
}

/// Serde adapters for columns whose stored form is looser than the model.
#[cfg(feature = "serde")]
mod storage {
    use serde::{Deserialize, Deserializer};

    /// `null` or a missing list becomes an empty Vec.
    pub(super) fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub(super) mod urgency {
        use serde::{Deserialize, Deserializer, Serializer};

        use crate::model::Urgency;

        pub(crate) fn serialize<S>(
            urgency: &Option<Urgency>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match urgency {
                Some(urgency) => serializer.serialize_some(urgency.as_str()),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Urgency>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Option::<String>::deserialize(deserializer)?;
            Ok(raw.as_deref().and_then(Urgency::parse))
        }
    }
}
