//! # rxcheck-formulary
//!
//! A TOML-driven reference formulary for RXCHECK.
//!
//! ## Overview
//!
//! This crate provides [`Formulary`], which implements the
//! [`InteractionSource`](rxcheck_core::traits::InteractionSource),
//! [`DosageSource`](rxcheck_core::traits::DosageSource) and
//! [`AlternativeSource`](rxcheck_core::traits::AlternativeSource) traits.
//! The document is parsed and validated once; lookups afterwards are
//! case-insensitive hash-map reads.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::{path::Path, sync::Arc};
//! use rxcheck_core::InteractionChecker;
//! use rxcheck_formulary::Formulary;
//!
//! let formulary = Arc::new(Formulary::from_file(Path::new("data/formulary.toml"))?);
//! let checker = InteractionChecker::new(formulary.clone());
//! ```
//!
//! ## Interaction keys
//!
//! Each rule is stored under the sorted, case-folded pair of its two drug
//! names, so `["Warfarin", "aspirin"]` and `["aspirin", "WARFARIN"]` are the
//! same rule and a lookup in either order finds it.

pub mod config;
pub mod formulary;

pub use config::{FormularyConfig, InteractionRuleConfig};
pub use formulary::Formulary;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rxcheck_contracts::{
        drug::DrugEntry,
        error::RxError,
        interaction::Severity,
    };
    use rxcheck_core::{
        traits::{AlternativeSource, DosageSource, InteractionSource},
        InteractionChecker,
    };

    use crate::Formulary;

    const SAMPLE: &str = r#"
        [[interactions]]
        drugs = ["warfarin", "aspirin"]
        severity = "high"
        description = "Additive bleeding risk"
        recommendation = "Avoid or monitor INR"

        [[interactions]]
        drugs = ["Lisinopril", "POTASSIUM"]
        severity = "moderate"
        description = "Hyperkalemia"
        recommendation = "Monitor serum potassium"

        [[dosages]]
        drug = "Amoxicillin"
        drug_class = "penicillin antibiotic"
        adult_dose = "500 mg every 8 hours"
        pediatric_dose = "25 mg/kg every 12 hours"
        max_daily = "3 g/day"
        mg_per_kg = 25.0
        max_single_dose_mg = 500.0

        [[alternatives]]
        drug = "ibuprofen"

        [[alternatives.options]]
        name = "acetaminophen"
        drug_class = "analgesic"
        reason = "No antiplatelet effect"
    "#;

    fn expect_config_error(toml: &str, needle: &str) {
        match Formulary::from_toml_str(toml) {
            Err(RxError::ConfigError { reason }) => assert!(
                reason.contains(needle),
                "expected '{needle}' in reason, got: {reason}"
            ),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 1. loading ────────────────────────────────────────────────────────────

    #[test]
    fn test_sample_loads_all_tables() {
        let f = Formulary::from_toml_str(SAMPLE).unwrap();
        assert_eq!(f.rule_count(), 2);
        assert_eq!(f.dosage_count(), 1);
        assert_eq!(f.alternative_count(), 1);

        let known: Vec<&str> = f.known_drugs().collect();
        assert_eq!(
            known,
            vec!["acetaminophen", "amoxicillin", "aspirin", "ibuprofen", "lisinopril", "potassium", "warfarin"]
        );
    }

    #[test]
    fn test_empty_document_is_valid() {
        let f = Formulary::from_toml_str("").unwrap();
        assert_eq!(f.rule_count(), 0);
        assert!(f.lookup("warfarin", "aspirin").is_none());
    }

    // ── 2. lookups ────────────────────────────────────────────────────────────

    #[test]
    fn test_lookup_is_symmetric_and_case_insensitive() {
        let f = Formulary::from_toml_str(SAMPLE).unwrap();
        let forward = f.lookup("warfarin", "aspirin").unwrap();
        let reverse = f.lookup("ASPIRIN", "Warfarin").unwrap();
        assert_eq!(forward, reverse);
        assert_eq!(forward.severity, Severity::High);

        // Rule declared in mixed case is stored canonically.
        let rule = f.lookup("potassium", "lisinopril").unwrap();
        assert_eq!(rule.drug_pair.first(), "lisinopril");
        assert_eq!(rule.drug_pair.second(), "potassium");
    }

    #[test]
    fn test_lookup_never_matches_partial_pairs() {
        let f = Formulary::from_toml_str(SAMPLE).unwrap();
        assert!(f.lookup("warfarin", "potassium").is_none());
        assert!(f.lookup("warfarin", "warfarin").is_none());
        assert!(f.lookup("warf", "aspirin").is_none());
    }

    #[test]
    fn test_dosage_and_alternative_lookups() {
        let f = Formulary::from_toml_str(SAMPLE).unwrap();
        let g = f.guideline("AMOXICILLIN").unwrap();
        assert_eq!(g.drug, "amoxicillin");
        assert_eq!(g.mg_per_kg, Some(25.0));
        assert!(f.guideline("warfarin").is_none());

        let alts = f.alternatives("Ibuprofen").unwrap();
        assert_eq!(alts.options.len(), 1);
        assert_eq!(alts.options[0].name, "acetaminophen");
    }

    #[test]
    fn test_interaction_rules_listing_is_sorted() {
        let f = Formulary::from_toml_str(SAMPLE).unwrap();
        let pairs: Vec<String> = f
            .interaction_rules()
            .iter()
            .map(|r| r.drug_pair.to_string())
            .collect();
        assert_eq!(pairs, vec!["aspirin + warfarin", "lisinopril + potassium"]);
    }

    // ── 3. drives the checker ─────────────────────────────────────────────────

    #[test]
    fn test_formulary_backs_interaction_checker() {
        let f = Arc::new(Formulary::from_toml_str(SAMPLE).unwrap());
        let checker = InteractionChecker::new(f);
        let entries = vec![
            DrugEntry::new("Warfarin", "5 mg", "daily"),
            DrugEntry::new("aspirin", "81 mg", "daily"),
            DrugEntry::new("lisinopril", "10 mg", "daily"),
        ];
        let report = checker.analyze(&entries).unwrap();
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].drug1, "Warfarin");
        assert_eq!(report.findings[0].severity, Severity::High);
    }

    // ── 4. validation ─────────────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        expect_config_error("this is not valid toml ][[[", "failed to parse formulary TOML");
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let toml = r#"
            [[interactions]]
            drugs = ["a", "b"]
            severity = "critical"
            description = ""
            recommendation = ""
        "#;
        expect_config_error(toml, "failed to parse formulary TOML");
    }

    #[test]
    fn test_pair_must_have_exactly_two_drugs() {
        let toml = r#"
            [[interactions]]
            drugs = ["a", "b", "c"]
            severity = "low"
            description = ""
            recommendation = ""
        "#;
        expect_config_error(toml, "failed to parse formulary TOML");
    }

    #[test]
    fn test_self_pair_rejected() {
        let toml = r#"
            [[interactions]]
            drugs = ["Metformin", "metformin"]
            severity = "low"
            description = ""
            recommendation = ""
        "#;
        expect_config_error(toml, "two different drugs");
    }

    #[test]
    fn test_duplicate_pair_rejected_in_either_order() {
        let toml = r#"
            [[interactions]]
            drugs = ["warfarin", "aspirin"]
            severity = "high"
            description = ""
            recommendation = ""

            [[interactions]]
            drugs = ["Aspirin", "warfarin"]
            severity = "low"
            description = ""
            recommendation = ""
        "#;
        expect_config_error(toml, "duplicate interaction rule for aspirin + warfarin");
    }

    #[test]
    fn test_blank_name_rejected() {
        let toml = r#"
            [[interactions]]
            drugs = ["  ", "aspirin"]
            severity = "high"
            description = ""
            recommendation = ""
        "#;
        expect_config_error(toml, "must not be blank");
    }

    #[test]
    fn test_non_positive_weight_factor_rejected() {
        let toml = r#"
            [[dosages]]
            drug = "amoxicillin"
            drug_class = ""
            adult_dose = ""
            pediatric_dose = ""
            max_daily = ""
            mg_per_kg = 0.0
        "#;
        expect_config_error(toml, "mg_per_kg must be a positive number");
    }

    #[test]
    fn test_duplicate_dosage_rejected() {
        let toml = r#"
            [[dosages]]
            drug = "amoxicillin"
            drug_class = ""
            adult_dose = ""
            pediatric_dose = ""
            max_daily = ""

            [[dosages]]
            drug = "AMOXICILLIN"
            drug_class = ""
            adult_dose = ""
            pediatric_dose = ""
            max_daily = ""
        "#;
        expect_config_error(toml, "duplicate dosage guideline for 'amoxicillin'");
    }

    #[test]
    fn test_non_positive_single_dose_cap_rejected() {
        let toml = r#"
            [[dosages]]
            drug = "ibuprofen"
            drug_class = ""
            adult_dose = ""
            pediatric_dose = ""
            max_daily = ""
            mg_per_kg = 10.0
            max_single_dose_mg = -1.0
        "#;
        expect_config_error(toml, "max_single_dose_mg must be a positive number");
    }

    #[test]
    fn test_duplicate_alternative_set_rejected() {
        let toml = r#"
            [[alternatives]]
            drug = "x"

            [[alternatives]]
            drug = "X"
        "#;
        expect_config_error(toml, "duplicate alternative set for 'x'");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::path::Path::new("/nonexistent/rxcheck/formulary.toml");
        match Formulary::from_file(path) {
            Err(RxError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read formulary file"));
                assert!(reason.contains("formulary.toml"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
