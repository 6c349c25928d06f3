//! # rxcheck-ref-panels
//!
//! Reference panels for RXCHECK, wired to a built-in seed formulary.
//!
//! Four panels mirror the four forms of a medication-safety assistant:
//!
//! 1. **Drug Interaction Checker**: pairwise analysis of a medication list.
//! 2. **Dosage Calculator**: guideline lookup with weight-based dosing.
//! 3. **Alternative Medications**: substitutes for a single drug.
//! 4. **Medical Entity Extraction**: medications, doses, and frequencies
//!    found in a clinical note, optionally checked for interactions.
//!
//! All data is hardcoded and fictional. No external calls are made.

pub mod panels;
pub mod seed_data;

pub use panels::PanelContext;
