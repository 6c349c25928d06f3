//! # rxcheck-extract
//!
//! Medication, dosage, and frequency extraction from clinical free text.
//!
//! [`EntityExtractor`] is built from a drug vocabulary (typically
//! `Formulary::known_drugs()`) and returns byte-offset spans plus one
//! grouped record per medication mention. Extracted medications convert
//! straight into drug entries for interaction analysis via
//! `ExtractionResult::to_entries`.

pub mod extractor;

pub use extractor::EntityExtractor;
