//! Entities recognized in clinical free text.

use serde::{Deserialize, Serialize};

use crate::drug::DrugEntry;

/// What an extracted span denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Medication,
    Dosage,
    Frequency,
}

/// One recognized span. `start` and `end` are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub kind: EntityKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// A drug mention with the dosage and frequency that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMedication {
    /// Lowercased drug name.
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
}

/// Everything one extraction pass found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// All spans, sorted by start offset.
    pub entities: Vec<ExtractedEntity>,
    /// One record per drug mention, in text order.
    pub medications: Vec<ExtractedMedication>,
}

impl ExtractionResult {
    /// Spans of a single kind, in text order.
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &ExtractedEntity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    /// Convert extracted medications into drug entries for interaction analysis.
    ///
    /// Missing dosage or frequency becomes an empty display string.
    pub fn to_entries(&self) -> Vec<DrugEntry> {
        self.medications
            .iter()
            .map(|m| {
                DrugEntry::new(
                    m.name.clone(),
                    m.dosage.clone().unwrap_or_default(),
                    m.frequency.clone().unwrap_or_default(),
                )
            })
            .collect()
    }
}
