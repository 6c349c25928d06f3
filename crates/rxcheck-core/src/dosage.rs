//! Dosage calculation over a guideline table.
//!
//! The calculator picks the adult or pediatric guideline text by age and,
//! when the guideline is weight-based and a weight is supplied, computes a
//! per-administration dose capped at the guideline's single-dose maximum.

use std::sync::Arc;

use tracing::{debug, info};

use rxcheck_contracts::{
    dosage::{DosageRecommendation, DosageRequest, PatientGroup},
    error::{RxError, RxResult},
};

use crate::traits::DosageSource;

#[derive(Clone)]
pub struct DosageCalculator {
    source: Arc<dyn DosageSource>,
}

impl DosageCalculator {
    pub fn new(source: Arc<dyn DosageSource>) -> Self {
        Self { source }
    }

    /// Produce a dosing recommendation for `request`.
    ///
    /// # Errors
    ///
    /// - `RxError::InvalidInput` if the drug name is blank, the weight is
    ///   not a finite positive number, or the weight-based dose overflows.
    /// - `RxError::UnknownDrug` if the formulary has no guideline for the drug.
    pub fn calculate(&self, request: &DosageRequest) -> RxResult<DosageRecommendation> {
        if request.drug.trim().is_empty() {
            return Err(RxError::InvalidInput {
                reason: "drug name must not be blank".to_string(),
            });
        }
        if let Some(weight) = request.weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(RxError::InvalidInput {
                    reason: format!("weight must be a positive number of kg, got {weight}"),
                });
            }
        }

        let guideline = self
            .source
            .guideline(&request.drug)
            .ok_or_else(|| RxError::UnknownDrug {
                name: request.drug.clone(),
            })?;

        let patient_group = PatientGroup::for_age(request.age_years);
        let standard_dose = match patient_group {
            PatientGroup::Adult => guideline.adult_dose.clone(),
            PatientGroup::Pediatric => guideline.pediatric_dose.clone(),
        };

        let (calculated_dose_mg, capped) = match (guideline.mg_per_kg, request.weight_kg) {
            (Some(mg_per_kg), Some(weight)) => {
                let raw = weight * mg_per_kg;
                if !raw.is_finite() {
                    return Err(RxError::InvalidInput {
                        reason: format!(
                            "weight {weight} kg at {mg_per_kg} mg/kg does not give a finite dose"
                        ),
                    });
                }
                match guideline.max_single_dose_mg {
                    Some(max) if raw > max => (Some(max), true),
                    _ => (Some(raw), false),
                }
            }
            _ => (None, false),
        };

        debug!(
            drug = %guideline.drug,
            group = %patient_group,
            calculated_mg = ?calculated_dose_mg,
            capped,
            "dosage calculated"
        );
        info!(drug = %guideline.drug, "dosage lookup complete");

        Ok(DosageRecommendation {
            drug: guideline.drug.clone(),
            drug_class: guideline.drug_class.clone(),
            patient_group,
            standard_dose,
            max_daily: guideline.max_daily.clone(),
            calculated_dose_mg,
            capped,
            renal_adjustment: guideline.renal_adjustment.clone(),
            notes: guideline.notes.clone(),
        })
    }
}
