//! RXCHECK: Medication-safety reference panels CLI
//!
//! Runs one panel with caller-supplied input, or every panel with canned
//! demo input. All reference data comes from the embedded seed formulary
//! unless `--formulary` points at another TOML document.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- interactions --drug warfarin --drug aspirin
//!   cargo run -p demo -- dosage --drug amoxicillin --weight-kg 18 --age 5
//!   cargo run -p demo -- alternatives --drug ibuprofen
//!   cargo run -p demo -- extract --check
//!   cargo run -p demo -- --json rules

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use rxcheck_contracts::{
    dosage::DosageRequest, error::RxError, extraction::ExtractionResult,
    interaction::InteractionReport,
};
use rxcheck_formulary::Formulary;
use rxcheck_ref_panels::{
    panels::{alternatives, dosage_calculator, entity_extraction, interaction_checker},
    seed_data::{seed_formulary, SAMPLE_NOTE},
    PanelContext,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// RXCHECK: drug interaction, dosage, alternatives, and extraction panels.
#[derive(Parser)]
#[command(
    name = "rxcheck",
    about = "RXCHECK medication-safety reference panels",
    long_about = "Checks drug lists for known interactions, looks up dosing guidelines\n\
                  and alternatives, and extracts medications from clinical text,\n\
                  all against a static reference formulary."
)]
struct Cli {
    /// Load the formulary from this TOML file instead of the built-in seed data.
    #[arg(long, global = true, value_name = "PATH")]
    formulary: Option<PathBuf>,

    /// Print results as JSON instead of text (single-panel subcommands only).
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four panels with demo input.
    RunAll,
    /// Panel 1: check a drug list for pairwise interactions (needs two or more drugs).
    Interactions {
        /// A drug to include; repeat for each drug.
        #[arg(long = "drug", value_name = "NAME", required = true)]
        drugs: Vec<String>,
    },
    /// Panel 2: dosing guideline, with weight-based dose when available.
    Dosage {
        #[arg(long, value_name = "NAME")]
        drug: String,
        #[arg(long, value_name = "KG")]
        weight_kg: Option<f64>,
        #[arg(long, value_name = "YEARS")]
        age: Option<u32>,
    },
    /// Panel 3: alternative medications for one drug.
    Alternatives {
        #[arg(long, value_name = "NAME")]
        drug: String,
    },
    /// Panel 4: extract medications, doses, and frequencies from text.
    Extract {
        /// Text to analyze; defaults to a built-in sample note.
        #[arg(long)]
        text: Option<String>,
        /// Also check the extracted medications for interactions.
        #[arg(long)]
        check: bool,
    },
    /// List the interaction rules in the loaded formulary.
    Rules,
}

/// JSON shape of the `extract` subcommand.
#[derive(Serialize)]
struct ExtractOutput<'a> {
    extraction: &'a ExtractionResult,
    interactions: Option<&'a InteractionReport>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Rx(#[from] RxError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("--json is not supported by run-all; use a single-panel subcommand")]
    JsonWithRunAll,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("rxcheck: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.json && matches!(cli.command, Command::RunAll) {
        return Err(CliError::JsonWithRunAll);
    }

    let formulary = match &cli.formulary {
        Some(path) => Formulary::from_file(path)?,
        None => seed_formulary()?,
    };
    let ctx = PanelContext::new(formulary)?;

    match cli.command {
        Command::RunAll => run_all(&ctx)?,
        Command::Interactions { drugs } => {
            let report = interaction_checker::check(&ctx, &drugs)?;
            if cli.json {
                emit_json(&report)?;
            } else {
                interaction_checker::print_findings(&report);
            }
        }
        Command::Dosage { drug, weight_kg, age } => {
            let request = DosageRequest {
                drug,
                weight_kg,
                age_years: age,
            };
            let rec = dosage_calculator::calculate(&ctx, &request)?;
            if cli.json {
                emit_json(&rec)?;
            } else {
                dosage_calculator::print_recommendation(&request, &rec);
            }
        }
        Command::Alternatives { drug } => {
            let report = alternatives::find(&ctx, &drug)?;
            if cli.json {
                emit_json(&report)?;
            } else {
                alternatives::print_report(&report);
            }
        }
        Command::Extract { text, check } => {
            let text = text.as_deref().unwrap_or(SAMPLE_NOTE);
            let result = entity_extraction::extract(&ctx, text)?;
            let report = if check {
                entity_extraction::check_if_enough(&ctx, &result)?
            } else {
                None
            };
            if cli.json {
                emit_json(&ExtractOutput {
                    extraction: &result,
                    interactions: report.as_ref(),
                })?;
            } else {
                entity_extraction::print_result(&result);
                if check {
                    println!();
                    entity_extraction::print_check(&result, report.as_ref());
                }
            }
        }
        Command::Rules => {
            let rules = ctx.formulary().interaction_rules();
            if cli.json {
                emit_json(&rules)?;
            } else {
                for rule in rules {
                    println!(
                        "  {:<9} {}",
                        rule.severity.as_str().to_uppercase(),
                        rule.drug_pair
                    );
                }
            }
        }
    }

    Ok(())
}

// ── Panel dispatch ────────────────────────────────────────────────────────────

fn run_all(ctx: &PanelContext) -> Result<(), RxError> {
    print_banner();
    interaction_checker::run_demo(ctx)?;
    dosage_calculator::run_demo(ctx)?;
    alternatives::run_demo(ctx)?;
    entity_extraction::run_demo(ctx)?;
    println!("All panels completed successfully.");
    Ok(())
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("RXCHECK: Medication Safety Reference Panels");
    println!("============================================");
    println!();
    println!("All reference data is fictional and for demonstration only.");
    println!();
}
