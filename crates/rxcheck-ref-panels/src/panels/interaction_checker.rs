//! Panel 1: Drug Interaction Checker
//!
//! Builds a medication list, runs the pairwise matcher over it, and prints
//! each finding with its severity and recommendation.
//!
//! Demo walk-through:
//!   1. Add warfarin, aspirin, and lisinopril to the list
//!   2. Analyze: warfarin + aspirin matches (HIGH); lisinopril has no partner
//!   3. Show the validation signal for a single-drug list

use tracing::warn;

use rxcheck_contracts::{
    error::{RxError, RxResult},
    interaction::InteractionReport,
};
use rxcheck_core::MedicationList;

use crate::{panels::PanelContext, seed_data::DEMO_MEDICATIONS};

/// Build a list from `names` (no dosage or frequency) and analyze it.
pub fn check(ctx: &PanelContext, names: &[String]) -> RxResult<InteractionReport> {
    let mut list = MedicationList::new();
    for name in names {
        list.add(name, "", "")?;
    }
    let report = list.analyze(ctx.checker())?.clone();
    Ok(report)
}

/// Print the list and its report.
pub fn print_report(list: &MedicationList, report: &InteractionReport) {
    println!("  Medications ({}):", list.len());
    for entry in list.entries() {
        println!("    - {} {} {}", entry.name, entry.dosage, entry.frequency);
    }
    println!();
    print_findings(report);
}

/// Print only the findings section of a report.
pub fn print_findings(report: &InteractionReport) {
    println!(
        "  Pairs evaluated:        {} ({} drug(s))",
        report.pairs_evaluated, report.drugs_checked
    );

    if report.is_clear() {
        println!("  Result:                 no known interactions");
        return;
    }

    println!("  Interactions found:     {}", report.findings.len());
    for finding in &report.findings {
        println!();
        println!(
            "    [{}] {} + {}",
            finding.severity.as_str().to_uppercase(),
            finding.drug1,
            finding.drug2
        );
        println!("      {}", finding.description);
        println!("      Recommendation: {}", finding.recommendation);
    }
}

/// Run the canned interaction-checker demo.
pub fn run_demo(ctx: &PanelContext) -> RxResult<()> {
    println!("=== Panel 1: Drug Interaction Checker ===");
    println!();

    let mut list = MedicationList::new();
    for (name, dosage, frequency) in DEMO_MEDICATIONS {
        list.add(name, dosage, frequency)?;
    }

    let report = list.analyze(ctx.checker())?.clone();
    print_report(&list, &report);
    println!();

    // A single drug cannot be analyzed; the checker reports a validation error.
    let mut single = MedicationList::new();
    single.add("warfarin", "5 mg", "once daily")?;
    match single.analyze(ctx.checker()) {
        Err(e @ RxError::NotEnoughDrugs { .. }) => {
            println!("  Single-drug list:       {}", e);
        }
        Err(e) => return Err(e),
        Ok(_) => warn!("single-drug list was analyzed unexpectedly"),
    }

    println!();
    println!("  Panel 1 complete.");
    println!();
    Ok(())
}
