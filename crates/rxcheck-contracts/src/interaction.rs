//! Interaction rules, findings, and reports.
//!
//! An `InteractionRule` is static reference data keyed by a `PairKey`.
//! The matcher turns rules into `InteractionFinding`s, one per matching
//! position pair, and the checker wraps them in an `InteractionReport`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::drug::normalize_drug_name;

/// Four-level ordinal classification of an interaction's clinical risk.
///
/// Declaration order is the ordering: `Low < Moderate < High < Severe`.
/// Written in TOML and JSON as the lowercase variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical unordered pair of case-folded drug names.
///
/// The two names are stored sorted, so `PairKey::new("Aspirin", "warfarin")`
/// and `PairKey::new("warfarin", "ASPIRIN")` are equal and hash identically.
/// Serialized as a two-element array; deserialization goes back through
/// `PairKey::new`, so a decoded key is always canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[String; 2]", into = "[String; 2]")]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        let a = normalize_drug_name(a);
        let b = normalize_drug_name(b);
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lexicographically smaller name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger name.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// True when both sides name the same drug (not a valid rule pair).
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }

    /// True if `name` (any casing) is one side of this pair.
    pub fn contains(&self, name: &str) -> bool {
        let name = normalize_drug_name(name);
        self.first == name || self.second == name
    }
}

impl From<[String; 2]> for PairKey {
    fn from([a, b]: [String; 2]) -> Self {
        Self::new(&a, &b)
    }
}

impl From<PairKey> for [String; 2] {
    fn from(key: PairKey) -> Self {
        [key.first, key.second]
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}

/// A documented clinical risk for one specific pair of drugs.
///
/// Read-only once the formulary has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRule {
    pub drug_pair: PairKey,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// One matching pair found during analysis.
///
/// `drug1` and `drug2` are the display names from the input entries, in
/// input order, exactly as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionFinding {
    pub drug1: String,
    pub drug2: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

impl InteractionFinding {
    /// Pair the two display names with the rule's clinical content.
    pub fn from_rule(drug1: &str, drug2: &str, rule: &InteractionRule) -> Self {
        Self {
            drug1: drug1.to_string(),
            drug2: drug2.to_string(),
            severity: rule.severity,
            description: rule.description.clone(),
            recommendation: rule.recommendation.clone(),
        }
    }
}

/// The outcome of one completed interaction analysis.
///
/// An empty `findings` list is the "clear" outcome. "Not yet analyzed" is
/// represented by the absence of a report, never by an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionReport {
    /// Number of entries that were analyzed.
    pub drugs_checked: usize,
    /// Number of position pairs that were evaluated, `n * (n - 1) / 2`.
    pub pairs_evaluated: usize,
    /// Findings in canonical nested-iteration order.
    pub findings: Vec<InteractionFinding>,
    /// Wall-clock time the analysis completed (UTC).
    pub analyzed_at: DateTime<Utc>,
}

impl InteractionReport {
    /// True when no pair matched any rule.
    pub fn is_clear(&self) -> bool {
        self.findings.is_empty()
    }

    /// The most severe finding's severity, if any finding exists.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// Findings at or above `threshold`, preserving report order.
    pub fn at_least(&self, threshold: Severity) -> impl Iterator<Item = &InteractionFinding> {
        self.findings.iter().filter(move |f| f.severity >= threshold)
    }
}
