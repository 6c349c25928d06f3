//! In-memory lookup tables shared by the unit tests in this crate.

use std::collections::HashMap;

use rxcheck_contracts::{
    alternative::{Alternative, AlternativeSet},
    dosage::DosageGuideline,
    drug::{normalize_drug_name, DrugEntry},
    interaction::{InteractionRule, PairKey, Severity},
};

use crate::traits::{AlternativeSource, DosageSource, InteractionSource};

pub(crate) fn entries(names: &[&str]) -> Vec<DrugEntry> {
    names.iter().map(|n| DrugEntry::new(*n, "", "")).collect()
}

/// Interaction rules built from `(drug_a, drug_b, severity)` triples.
pub(crate) struct MockTable {
    rules: HashMap<PairKey, InteractionRule>,
}

impl MockTable {
    pub(crate) fn new(rules: &[(&str, &str, Severity)]) -> Self {
        let rules = rules
            .iter()
            .map(|(a, b, severity)| {
                let key = PairKey::new(a, b);
                let rule = InteractionRule {
                    drug_pair: key.clone(),
                    severity: *severity,
                    description: format!("{a} with {b}"),
                    recommendation: format!("monitor {a} and {b}"),
                };
                (key, rule)
            })
            .collect();
        Self { rules }
    }
}

impl InteractionSource for MockTable {
    fn lookup(&self, drug_a: &str, drug_b: &str) -> Option<&InteractionRule> {
        self.rules.get(&PairKey::new(drug_a, drug_b))
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Dosage and alternative lookups over a fixed pair of drugs.
pub(crate) struct MockReference {
    dosages: HashMap<String, DosageGuideline>,
    alternatives: HashMap<String, AlternativeSet>,
}

impl MockReference {
    pub(crate) fn new() -> Self {
        let amoxicillin = DosageGuideline {
            drug: "amoxicillin".to_string(),
            drug_class: "penicillin antibiotic".to_string(),
            adult_dose: "500 mg every 8 hours".to_string(),
            pediatric_dose: "25 mg/kg every 12 hours".to_string(),
            max_daily: "3 g/day".to_string(),
            mg_per_kg: Some(25.0),
            max_single_dose_mg: Some(500.0),
            renal_adjustment: Some("extend interval if CrCl < 30".to_string()),
            notes: None,
        };
        let lisinopril = DosageGuideline {
            drug: "lisinopril".to_string(),
            drug_class: "ACE inhibitor".to_string(),
            adult_dose: "10 mg once daily".to_string(),
            pediatric_dose: "0.07 mg/kg once daily".to_string(),
            max_daily: "80 mg/day".to_string(),
            mg_per_kg: None,
            max_single_dose_mg: None,
            renal_adjustment: None,
            notes: Some("check potassium".to_string()),
        };
        let ibuprofen = AlternativeSet {
            drug: "ibuprofen".to_string(),
            options: vec![
                Alternative {
                    name: "acetaminophen".to_string(),
                    drug_class: "analgesic".to_string(),
                    reason: "no antiplatelet effect".to_string(),
                },
                Alternative {
                    name: "naproxen".to_string(),
                    drug_class: "NSAID".to_string(),
                    reason: "longer dosing interval".to_string(),
                },
            ],
        };

        Self {
            dosages: [amoxicillin, lisinopril]
                .into_iter()
                .map(|g| (g.drug.clone(), g))
                .collect(),
            alternatives: [ibuprofen].into_iter().map(|a| (a.drug.clone(), a)).collect(),
        }
    }
}

impl DosageSource for MockReference {
    fn guideline(&self, drug: &str) -> Option<&DosageGuideline> {
        self.dosages.get(&normalize_drug_name(drug))
    }
}

impl AlternativeSource for MockReference {
    fn alternatives(&self, drug: &str) -> Option<&AlternativeSet> {
        self.alternatives.get(&normalize_drug_name(drug))
    }
}
