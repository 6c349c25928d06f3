//! Alternative-medication records.

use serde::{Deserialize, Serialize};

/// One substitute for a drug, with the reason it is suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub drug_class: String,
    pub reason: String,
}

/// All alternatives the formulary lists for one drug, in formulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSet {
    /// Canonical (lowercase) drug name. Normalized at load time.
    pub drug: String,
    #[serde(default)]
    pub options: Vec<Alternative>,
}

/// The alternatives finder's answer for one drug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeReport {
    /// The drug name as the caller supplied it.
    pub drug: String,
    pub alternatives: Vec<Alternative>,
}
