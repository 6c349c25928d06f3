//! Dosage guideline records and calculation request/response types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference dosing information for one drug, as written in the formulary.
///
/// Text fields are displayed verbatim. Only `mg_per_kg` and
/// `max_single_dose_mg` take part in arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageGuideline {
    /// Canonical (lowercase) drug name. Normalized at load time.
    pub drug: String,
    pub drug_class: String,
    pub adult_dose: String,
    pub pediatric_dose: String,
    pub max_daily: String,
    /// Weight-based dose per administration, in mg per kg of body weight.
    #[serde(default)]
    pub mg_per_kg: Option<f64>,
    /// Upper bound applied to a weight-based dose.
    #[serde(default)]
    pub max_single_dose_mg: Option<f64>,
    #[serde(default)]
    pub renal_adjustment: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A request to the dosage calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageRequest {
    pub drug: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub age_years: Option<u32>,
}

impl DosageRequest {
    pub fn new(drug: impl Into<String>) -> Self {
        Self {
            drug: drug.into(),
            weight_kg: None,
            age_years: None,
        }
    }

    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_age_years(mut self, age_years: u32) -> Self {
        self.age_years = Some(age_years);
        self
    }
}

/// Which dosing column of a guideline applies to the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientGroup {
    Adult,
    Pediatric,
}

impl PatientGroup {
    /// Patients under this age use the pediatric column.
    pub const ADULT_AGE_YEARS: u32 = 18;

    /// Classify by age. An unknown age is treated as adult.
    pub fn for_age(age_years: Option<u32>) -> Self {
        match age_years {
            Some(age) if age < Self::ADULT_AGE_YEARS => PatientGroup::Pediatric,
            _ => PatientGroup::Adult,
        }
    }
}

impl fmt::Display for PatientGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientGroup::Adult => f.write_str("adult"),
            PatientGroup::Pediatric => f.write_str("pediatric"),
        }
    }
}

/// The calculator's answer for one `DosageRequest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageRecommendation {
    pub drug: String,
    pub drug_class: String,
    pub patient_group: PatientGroup,
    /// The guideline text for `patient_group`.
    pub standard_dose: String,
    pub max_daily: String,
    /// `weight_kg * mg_per_kg`, capped at `max_single_dose_mg`. Present only
    /// when the guideline is weight-based and a weight was supplied.
    pub calculated_dose_mg: Option<f64>,
    /// True when the cap reduced the weight-based dose.
    pub capped: bool,
    pub renal_adjustment: Option<String>,
    pub notes: Option<String>,
}
