//! Panel 3: Alternative Medications

use rxcheck_contracts::{alternative::AlternativeReport, error::RxResult};

use crate::{panels::PanelContext, seed_data::DEMO_ALTERNATIVE_QUERIES};

pub fn find(ctx: &PanelContext, drug: &str) -> RxResult<AlternativeReport> {
    ctx.finder().find(drug)
}

pub fn print_report(report: &AlternativeReport) {
    println!("  Alternatives to {}:", report.drug);
    if report.alternatives.is_empty() {
        println!("    (none listed)");
    }
    for alt in &report.alternatives {
        println!("    - {} [{}]", alt.name, alt.drug_class);
        println!("      {}", alt.reason);
    }
}

/// Run the canned alternatives demo.
pub fn run_demo(ctx: &PanelContext) -> RxResult<()> {
    println!("=== Panel 3: Alternative Medications ===");
    println!();

    for drug in DEMO_ALTERNATIVE_QUERIES {
        print_report(&find(ctx, drug)?);
        println!();
    }

    println!("  Panel 3 complete.");
    println!();
    Ok(())
}
