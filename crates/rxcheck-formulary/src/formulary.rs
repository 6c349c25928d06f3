//! TOML-driven reference formulary.
//!
//! `Formulary` loads a `FormularyConfig` from a TOML string or file,
//! validates it once, and implements the three lookup traits from
//! rxcheck-core. After construction it is immutable.
//!
//! Load-time validation rejects:
//!
//! 1. Blank drug names anywhere in the document.
//! 2. Interaction pairs whose two names case-fold to the same drug.
//! 3. Two interaction rules for the same unordered pair.
//! 4. Two dosage guidelines, or two alternative sets, for the same drug.
//! 5. Non-positive or non-finite `mg_per_kg` / `max_single_dose_mg`.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, info};

use rxcheck_contracts::{
    alternative::AlternativeSet,
    dosage::DosageGuideline,
    drug::normalize_drug_name,
    error::{RxError, RxResult},
    interaction::{InteractionRule, PairKey},
};
use rxcheck_core::traits::{AlternativeSource, DosageSource, InteractionSource};

use crate::config::FormularyConfig;

/// Immutable reference data keyed for constant-time lookup.
///
/// ```rust,ignore
/// use rxcheck_formulary::Formulary;
///
/// let formulary = Formulary::from_file(Path::new("data/formulary.toml"))?;
/// ```
#[derive(Debug, Default)]
pub struct Formulary {
    interactions: HashMap<PairKey, InteractionRule>,
    dosages: HashMap<String, DosageGuideline>,
    alternatives: HashMap<String, AlternativeSet>,
    known_drugs: BTreeSet<String>,
}

fn config_error(reason: String) -> RxError {
    RxError::ConfigError { reason }
}

fn require_name(raw: &str, context: &str) -> RxResult<String> {
    let name = normalize_drug_name(raw);
    if name.is_empty() {
        return Err(config_error(format!("{context}: drug name must not be blank")));
    }
    Ok(name)
}

fn require_positive(value: Option<f64>, field: &str, drug: &str) -> RxResult<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(config_error(format!(
            "dosage for '{drug}': {field} must be a positive number, got {v}"
        ))),
        _ => Ok(()),
    }
}

impl Formulary {
    /// Parse `s` as TOML and build a validated `Formulary`.
    ///
    /// Returns `RxError::ConfigError` if the TOML is malformed, does not
    /// match `FormularyConfig`, or fails validation.
    pub fn from_toml_str(s: &str) -> RxResult<Self> {
        let config: FormularyConfig = toml::from_str(s)
            .map_err(|e| config_error(format!("failed to parse formulary TOML: {}", e)))?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML formulary.
    pub fn from_file(path: &Path) -> RxResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            config_error(format!(
                "failed to read formulary file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate an already-deserialized configuration and index it.
    pub fn from_config(config: FormularyConfig) -> RxResult<Self> {
        let mut formulary = Formulary::default();

        for (index, rule) in config.interactions.into_iter().enumerate() {
            let context = format!("interaction #{}", index + 1);
            let a = require_name(&rule.drugs[0], &context)?;
            let b = require_name(&rule.drugs[1], &context)?;
            let key = PairKey::new(&a, &b);

            if key.is_self_pair() {
                return Err(config_error(format!(
                    "{context}: pair must name two different drugs, got '{a}' twice"
                )));
            }
            if formulary.interactions.contains_key(&key) {
                return Err(config_error(format!(
                    "{context}: duplicate interaction rule for {key}"
                )));
            }

            debug!(pair = %key, severity = %rule.severity, "interaction rule loaded");
            formulary.known_drugs.insert(a);
            formulary.known_drugs.insert(b);
            formulary.interactions.insert(
                key.clone(),
                InteractionRule {
                    drug_pair: key,
                    severity: rule.severity,
                    description: rule.description,
                    recommendation: rule.recommendation,
                },
            );
        }

        for mut guideline in config.dosages {
            let drug = require_name(&guideline.drug, "dosage guideline")?;
            require_positive(guideline.mg_per_kg, "mg_per_kg", &drug)?;
            require_positive(guideline.max_single_dose_mg, "max_single_dose_mg", &drug)?;
            if formulary.dosages.contains_key(&drug) {
                return Err(config_error(format!("duplicate dosage guideline for '{drug}'")));
            }

            guideline.drug = drug.clone();
            formulary.known_drugs.insert(drug.clone());
            formulary.dosages.insert(drug, guideline);
        }

        for mut set in config.alternatives {
            let drug = require_name(&set.drug, "alternative set")?;
            if formulary.alternatives.contains_key(&drug) {
                return Err(config_error(format!("duplicate alternative set for '{drug}'")));
            }
            for option in &set.options {
                let name = require_name(&option.name, &format!("alternative for '{drug}'"))?;
                formulary.known_drugs.insert(name);
            }

            set.drug = drug.clone();
            formulary.known_drugs.insert(drug.clone());
            formulary.alternatives.insert(drug, set);
        }

        info!(
            interactions = formulary.interactions.len(),
            dosages = formulary.dosages.len(),
            alternatives = formulary.alternatives.len(),
            known_drugs = formulary.known_drugs.len(),
            "formulary loaded"
        );

        Ok(formulary)
    }

    /// Every drug name mentioned anywhere in the formulary, lowercased and sorted.
    pub fn known_drugs(&self) -> impl Iterator<Item = &str> {
        self.known_drugs.iter().map(String::as_str)
    }

    /// Interaction rules sorted by pair, for listing.
    pub fn interaction_rules(&self) -> Vec<&InteractionRule> {
        let mut rules: Vec<&InteractionRule> = self.interactions.values().collect();
        rules.sort_by(|a, b| a.drug_pair.cmp(&b.drug_pair));
        rules
    }

    pub fn dosage_count(&self) -> usize {
        self.dosages.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }
}

impl InteractionSource for Formulary {
    fn lookup(&self, drug_a: &str, drug_b: &str) -> Option<&InteractionRule> {
        self.interactions.get(&PairKey::new(drug_a, drug_b))
    }

    fn rule_count(&self) -> usize {
        self.interactions.len()
    }
}

impl DosageSource for Formulary {
    fn guideline(&self, drug: &str) -> Option<&DosageGuideline> {
        self.dosages.get(&normalize_drug_name(drug))
    }
}

impl AlternativeSource for Formulary {
    fn alternatives(&self, drug: &str) -> Option<&AlternativeSet> {
        self.alternatives.get(&normalize_drug_name(drug))
    }
}
