//! Panel 4: Medical Entity Extraction
//!
//! Runs the pattern extractor over a clinical note, groups each medication
//! with its dose and frequency, and optionally feeds the extracted
//! medications to the interaction checker.
//!
//! The extractor only knows the drugs named in the formulary; anything else
//! in the note is invisible to it.

use rxcheck_contracts::{
    error::{RxError, RxResult},
    extraction::{EntityKind, ExtractionResult},
    interaction::InteractionReport,
};

use crate::{
    panels::{interaction_checker, PanelContext},
    seed_data::SAMPLE_NOTE,
};

pub fn extract(ctx: &PanelContext, text: &str) -> RxResult<ExtractionResult> {
    ctx.extractor().extract(text)
}

/// Analyze the medications found in `result` for interactions.
///
/// Returns `RxError::NotEnoughDrugs` when fewer than two were extracted.
pub fn check_extracted(ctx: &PanelContext, result: &ExtractionResult) -> RxResult<InteractionReport> {
    ctx.checker().analyze(&result.to_entries())
}

/// Like [`check_extracted`], but fewer than two extracted medications is
/// reported as `None` instead of an error.
pub fn check_if_enough(
    ctx: &PanelContext,
    result: &ExtractionResult,
) -> RxResult<Option<InteractionReport>> {
    match check_extracted(ctx, result) {
        Ok(report) => Ok(Some(report)),
        Err(RxError::NotEnoughDrugs { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Print the interaction findings, or why the check was skipped.
pub fn print_check(result: &ExtractionResult, report: Option<&InteractionReport>) {
    match report {
        Some(report) => interaction_checker::print_findings(report),
        None => println!(
            "  Interaction check:      {}",
            RxError::NotEnoughDrugs {
                count: result.medications.len()
            }
        ),
    }
}

pub fn print_result(result: &ExtractionResult) {
    let count = |kind| result.of_kind(kind).count();
    println!(
        "  Entities:               {} medication(s), {} dosage(s), {} frequency(ies)",
        count(EntityKind::Medication),
        count(EntityKind::Dosage),
        count(EntityKind::Frequency)
    );
    for med in &result.medications {
        println!(
            "    - {:<16} dose: {:<10} frequency: {}",
            med.name,
            med.dosage.as_deref().unwrap_or("-"),
            med.frequency.as_deref().unwrap_or("-")
        );
    }
}

/// Run the canned extraction demo over the built-in sample note.
pub fn run_demo(ctx: &PanelContext) -> RxResult<()> {
    println!("=== Panel 4: Medical Entity Extraction ===");
    println!();
    println!("  Note: \"{}\"", SAMPLE_NOTE);
    println!();

    let result = extract(ctx, SAMPLE_NOTE)?;
    print_result(&result);
    println!();

    let report = check_if_enough(ctx, &result)?;
    print_check(&result, report.as_ref());

    println!();
    println!("  Panel 4 complete.");
    println!();
    Ok(())
}
