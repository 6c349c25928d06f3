//! Built-in reference data for the RXCHECK panels.
//!
//! Everything in this module is hardcoded and fictional. The seed
//! formulary stands in for a real pharmacological knowledge base and is
//! embedded at compile time, so the panels run with no files on disk.

use rxcheck_contracts::error::RxResult;
use rxcheck_formulary::Formulary;

/// The embedded seed formulary document.
pub const SEED_FORMULARY: &str = include_str!("../data/formulary.toml");

/// Parse and validate the embedded seed formulary.
pub fn seed_formulary() -> RxResult<Formulary> {
    Formulary::from_toml_str(SEED_FORMULARY)
}

/// A fictional clinical note used by the extraction panel when the caller
/// supplies no text.
pub const SAMPLE_NOTE: &str = "Patient is a 64-year-old on warfarin 5 mg once daily for atrial \
fibrillation and lisinopril 10 mg daily for hypertension. Reports taking aspirin 81 mg daily \
and ibuprofen 400 mg as needed for knee pain. Metformin 500 mg twice daily continued.";

/// Drug list the interaction panel demo analyzes.
pub const DEMO_MEDICATIONS: &[(&str, &str, &str)] = &[
    ("Warfarin", "5 mg", "once daily"),
    ("Aspirin", "81 mg", "once daily"),
    ("Lisinopril", "10 mg", "once daily"),
];

/// `(drug, weight_kg, age_years)` requests the dosage panel demo runs.
pub const DEMO_DOSAGE_REQUESTS: &[(&str, Option<f64>, Option<u32>)] = &[
    ("amoxicillin", Some(18.0), Some(5)),
    ("ibuprofen", Some(70.0), Some(42)),
    ("lisinopril", None, None),
];

/// Drugs the alternatives panel demo looks up.
pub const DEMO_ALTERNATIVE_QUERIES: &[&str] = &["ibuprofen", "simvastatin"];
