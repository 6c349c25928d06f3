//! The four RXCHECK reference panels.
//!
//! Each panel is a self-contained module that drives one component against
//! a shared `PanelContext` and prints its result:
//!
//! - `interaction_checker`: pairwise interaction analysis of a drug list
//! - `dosage_calculator`: guideline lookup with weight-based dosing
//! - `alternatives`: substitute medications for one drug
//! - `entity_extraction`: medications, doses, and frequencies in free text

pub mod alternatives;
pub mod dosage_calculator;
pub mod entity_extraction;
pub mod interaction_checker;

use std::sync::Arc;

use rxcheck_contracts::error::RxResult;
use rxcheck_core::{AlternativesFinder, DosageCalculator, InteractionChecker};
use rxcheck_extract::EntityExtractor;
use rxcheck_formulary::Formulary;

use crate::seed_data::seed_formulary;

/// One formulary wired to every component the panels use.
///
/// All components share the same `Arc<Formulary>`.
#[derive(Clone)]
pub struct PanelContext {
    formulary: Arc<Formulary>,
    checker: InteractionChecker,
    calculator: DosageCalculator,
    finder: AlternativesFinder,
    extractor: EntityExtractor,
}

impl PanelContext {
    /// Wire every component to `formulary`.
    ///
    /// The extractor's vocabulary is every drug the formulary mentions.
    pub fn new(formulary: Formulary) -> RxResult<Self> {
        let formulary = Arc::new(formulary);
        let extractor = EntityExtractor::new(formulary.known_drugs())?;
        Ok(Self {
            checker: InteractionChecker::new(formulary.clone()),
            calculator: DosageCalculator::new(formulary.clone()),
            finder: AlternativesFinder::new(formulary.clone()),
            extractor,
            formulary,
        })
    }

    /// Context over the embedded seed formulary.
    pub fn seeded() -> RxResult<Self> {
        Self::new(seed_formulary()?)
    }

    pub fn formulary(&self) -> &Formulary {
        &self.formulary
    }

    pub fn checker(&self) -> &InteractionChecker {
        &self.checker
    }

    pub fn calculator(&self) -> &DosageCalculator {
        &self.calculator
    }

    pub fn finder(&self) -> &AlternativesFinder {
        &self.finder
    }

    pub fn extractor(&self) -> &EntityExtractor {
        &self.extractor
    }
}
