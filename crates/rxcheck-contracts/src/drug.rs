//! Drug entries as entered on the medication list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, unique identifier for one entry on a medication list.
///
/// Two entries for the same drug name still carry distinct ids, so removal
/// by id never touches a sibling entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrugEntryId(pub uuid::Uuid);

impl DrugEntryId {
    /// Create a new, unique entry id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for DrugEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DrugEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One drug the user has entered.
///
/// `dosage` and `frequency` are display strings and are never parsed.
/// `name` is whatever the producer supplied; `MedicationList::add` stores it
/// trimmed and lowercased, while the matcher accepts any casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugEntry {
    pub id: DrugEntryId,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl DrugEntry {
    /// Build an entry with a fresh id. The name is stored as given.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            id: DrugEntryId::new(),
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
        }
    }
}

/// Case-fold a drug name into its canonical lookup form.
///
/// Surrounding whitespace is not significant for lookups.
pub fn normalize_drug_name(name: &str) -> String {
    name.trim().to_lowercase()
}
