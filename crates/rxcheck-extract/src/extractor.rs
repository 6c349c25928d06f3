//! Pattern-based entity extraction from clinical free text.
//!
//! Three patterns run over the text:
//!
//! - medication names: a word-bounded alternation over a closed vocabulary
//!   of known drug names, built when the extractor is constructed
//! - dosages: `<number> <unit>`, e.g. `500 mg`, `0.5mcg`, `10 units`
//! - frequencies: `once daily`, `twice a day`, `bid`, `every 6 hours`, `prn`
//!
//! This is vocabulary matching, not language understanding. A drug absent
//! from the vocabulary is never found, and nothing reports a confidence.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use rxcheck_contracts::{
    drug::normalize_drug_name,
    error::{RxError, RxResult},
    extraction::{EntityKind, ExtractedEntity, ExtractedMedication, ExtractionResult},
};

// Compiled once; the patterns are literals so compilation cannot fail.
static DOSAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*(?:mcg|mg|g|ml|units?|iu)\b").expect("dosage pattern")
});

static FREQUENCY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:once|twice|three times|four times)\s+(?:a\s+)?(?:daily|day|weekly|week)\b|\bevery\s+\d+\s+hours?\b|\bas needed\b|\bat bedtime\b|\b(?:daily|nightly|weekly|bid|tid|qid|qhs|qd|prn)\b",
    )
    .expect("frequency pattern")
});

/// Finds medications, dosages, and frequencies in free text.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    /// `None` when the vocabulary is empty.
    drug_pattern: Option<Regex>,
    vocabulary_size: usize,
}

impl EntityExtractor {
    /// Build an extractor for the given drug vocabulary.
    ///
    /// Names are case-folded and deduplicated. Longer names are tried first
    /// so `"insulin glargine"` wins over `"insulin"`.
    ///
    /// # Errors
    ///
    /// Returns `RxError::ConfigError` if the combined pattern cannot be
    /// compiled (for example, it exceeds the regex size limit).
    pub fn new<'a>(known_drugs: impl IntoIterator<Item = &'a str>) -> RxResult<Self> {
        let mut names: Vec<String> = known_drugs
            .into_iter()
            .map(normalize_drug_name)
            .filter(|n| !n.is_empty())
            .collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let vocabulary_size = names.len();
        let drug_pattern = if names.is_empty() {
            None
        } else {
            let alternation = names
                .iter()
                .map(|n| regex::escape(n))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)\b(?:{alternation})\b");
            Some(Regex::new(&pattern).map_err(|e| RxError::ConfigError {
                reason: format!("failed to compile drug vocabulary pattern: {e}"),
            })?)
        };

        debug!(vocabulary = vocabulary_size, "entity extractor built");
        Ok(Self {
            drug_pattern,
            vocabulary_size,
        })
    }

    /// Number of distinct drug names the extractor recognizes.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Run all patterns over `text`.
    ///
    /// # Errors
    ///
    /// Returns `RxError::InvalidInput` when `text` is blank.
    pub fn extract(&self, text: &str) -> RxResult<ExtractionResult> {
        if text.trim().is_empty() {
            return Err(RxError::InvalidInput {
                reason: "text to analyze must not be blank".to_string(),
            });
        }

        let mut entities = Vec::new();
        if let Some(pattern) = &self.drug_pattern {
            collect(pattern, EntityKind::Medication, text, &mut entities);
        }
        collect(&DOSAGE_PATTERN, EntityKind::Dosage, text, &mut entities);
        collect(&FREQUENCY_PATTERN, EntityKind::Frequency, text, &mut entities);
        entities.sort_by_key(|e| (e.start, e.end));

        let medications = group_medications(&entities);

        debug!(
            entities = entities.len(),
            medications = medications.len(),
            "text extraction complete"
        );

        Ok(ExtractionResult {
            entities,
            medications,
        })
    }
}

fn collect(pattern: &Regex, kind: EntityKind, text: &str, out: &mut Vec<ExtractedEntity>) {
    out.extend(pattern.find_iter(text).map(|m| ExtractedEntity {
        kind,
        text: m.as_str().to_string(),
        start: m.start(),
        end: m.end(),
    }));
}

/// Attach to each medication mention the first dosage and first frequency
/// that follow it, stopping at the next medication mention.
fn group_medications(entities: &[ExtractedEntity]) -> Vec<ExtractedMedication> {
    let mut medications: Vec<ExtractedMedication> = Vec::new();
    for entity in entities {
        match entity.kind {
            EntityKind::Medication => medications.push(ExtractedMedication {
                name: normalize_drug_name(&entity.text),
                dosage: None,
                frequency: None,
            }),
            EntityKind::Dosage => {
                if let Some(current) = medications.last_mut() {
                    current.dosage.get_or_insert_with(|| entity.text.clone());
                }
            }
            EntityKind::Frequency => {
                if let Some(current) = medications.last_mut() {
                    current.frequency.get_or_insert_with(|| entity.text.clone());
                }
            }
        }
    }
    medications
}
