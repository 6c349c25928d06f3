//! Panel 2: Dosage Calculator
//!
//! Looks up a drug's dosing guideline, chooses the adult or pediatric
//! column by age, and computes a weight-based dose where the guideline
//! defines one.

use rxcheck_contracts::{
    dosage::{DosageRecommendation, DosageRequest},
    error::RxResult,
};

use crate::{panels::PanelContext, seed_data::DEMO_DOSAGE_REQUESTS};

pub fn calculate(ctx: &PanelContext, request: &DosageRequest) -> RxResult<DosageRecommendation> {
    ctx.calculator().calculate(request)
}

pub fn print_recommendation(request: &DosageRequest, rec: &DosageRecommendation) {
    println!("  Drug:                   {} ({})", rec.drug, rec.drug_class);
    match (request.weight_kg, request.age_years) {
        (Some(w), Some(a)) => println!("  Patient:                {} kg, {} years ({})", w, a, rec.patient_group),
        (Some(w), None) => println!("  Patient:                {} kg ({})", w, rec.patient_group),
        (None, Some(a)) => println!("  Patient:                {} years ({})", a, rec.patient_group),
        (None, None) => println!("  Patient:                unspecified ({})", rec.patient_group),
    }
    println!("  Standard dose:          {}", rec.standard_dose);
    println!("  Maximum daily:          {}", rec.max_daily);
    if let Some(mg) = rec.calculated_dose_mg {
        let cap = if rec.capped { " (capped at single-dose maximum)" } else { "" };
        println!("  Weight-based dose:      {:.1} mg{}", mg, cap);
    }
    if let Some(renal) = &rec.renal_adjustment {
        println!("  Renal adjustment:       {}", renal);
    }
    if let Some(notes) = &rec.notes {
        println!("  Notes:                  {}", notes);
    }
}

/// Run the canned dosage-calculator demo.
pub fn run_demo(ctx: &PanelContext) -> RxResult<()> {
    println!("=== Panel 2: Dosage Calculator ===");
    println!();

    for (drug, weight_kg, age_years) in DEMO_DOSAGE_REQUESTS {
        let request = DosageRequest {
            drug: drug.to_string(),
            weight_kg: *weight_kg,
            age_years: *age_years,
        };
        let rec = calculate(ctx, &request)?;
        print_recommendation(&request, &rec);
        println!();
    }

    println!("  Panel 2 complete.");
    println!();
    Ok(())
}
