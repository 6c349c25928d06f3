//! # rxcheck-core
//!
//! Analysis logic for RXCHECK, independent of where reference data lives.
//!
//! This crate provides:
//! - The three lookup traits (`InteractionSource`, `DosageSource`, `AlternativeSource`)
//! - The pairwise interaction matcher and the `InteractionChecker` around it
//! - `MedicationList`, the ordered list of entries with its analysis state
//! - `DosageCalculator` and `AlternativesFinder`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rxcheck_core::{InteractionChecker, MedicationList};
//!
//! let checker = InteractionChecker::new(Arc::new(formulary));
//! let mut list = MedicationList::new();
//! list.add("warfarin", "5 mg", "once daily")?;
//! list.add("aspirin", "81 mg", "once daily")?;
//! let report = list.analyze(&checker)?;
//! ```

pub mod alternatives;
pub mod checker;
pub mod dosage;
pub mod matcher;
pub mod medication_list;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use alternatives::AlternativesFinder;
pub use checker::InteractionChecker;
pub use dosage::DosageCalculator;
pub use matcher::match_interactions;
pub use medication_list::{AnalysisStatus, MedicationList};
