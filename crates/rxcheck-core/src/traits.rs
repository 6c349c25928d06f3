//! Lookup traits for the RXCHECK reference data.
//!
//! These three traits are the seam between the analysis logic in this crate
//! and wherever the reference data actually comes from:
//!
//! - `InteractionSource`: pairwise interaction rules
//! - `DosageSource`: per-drug dosing guidelines
//! - `AlternativeSource`: per-drug substitute lists
//!
//! Implementations must be read-only after construction. All lookups take
//! names in any casing; implementations case-fold before comparing.

use rxcheck_contracts::{
    alternative::AlternativeSet, dosage::DosageGuideline, interaction::InteractionRule,
};

/// A static table of interaction rules keyed by unordered drug pair.
pub trait InteractionSource: Send + Sync {
    /// Return the rule whose pair is exactly `{drug_a, drug_b}`, if any.
    ///
    /// Must be symmetric: `lookup(a, b)` and `lookup(b, a)` return the same
    /// rule. Must never match a drug against itself unless a rule for that
    /// exact self-pair exists.
    fn lookup(&self, drug_a: &str, drug_b: &str) -> Option<&InteractionRule>;

    /// Number of rules in the table.
    fn rule_count(&self) -> usize;
}

/// A static table of dosing guidelines keyed by drug name.
pub trait DosageSource: Send + Sync {
    fn guideline(&self, drug: &str) -> Option<&DosageGuideline>;
}

/// A static table of alternative medications keyed by drug name.
pub trait AlternativeSource: Send + Sync {
    fn alternatives(&self, drug: &str) -> Option<&AlternativeSet>;
}
