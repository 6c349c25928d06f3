//! Formulary configuration schema.
//!
//! A `FormularyConfig` is deserialized from TOML and holds three tables:
//! interaction rules, dosage guidelines, and alternative-medication sets.
//! Each table may be omitted; an omitted table is empty.

use serde::{Deserialize, Serialize};

use rxcheck_contracts::{
    alternative::AlternativeSet, dosage::DosageGuideline, interaction::Severity,
};

/// One interaction rule as written in TOML.
///
/// `drugs` must hold exactly two names; any other length is a parse error.
/// The pair is unordered and case-insensitive once loaded.
///
/// Example in TOML:
/// ```toml
/// [[interactions]]
/// drugs = ["warfarin", "aspirin"]
/// severity = "high"
/// description = "Additive bleeding risk"
/// recommendation = "Avoid combination or monitor INR closely"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRuleConfig {
    pub drugs: [String; 2],

    /// One of `low`, `moderate`, `high`, `severe`.
    pub severity: Severity,

    pub description: String,

    pub recommendation: String,
}

/// The top-level structure deserialized from a TOML formulary file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormularyConfig {
    #[serde(default)]
    pub interactions: Vec<InteractionRuleConfig>,

    #[serde(default)]
    pub dosages: Vec<DosageGuideline>,

    #[serde(default)]
    pub alternatives: Vec<AlternativeSet>,
}
