//! # rxcheck-contracts
//!
//! Shared types, reference-data records, and error types for RXCHECK.
//!
//! All crates in the workspace import from here. No lookup or matching
//! logic lives in this crate, only data definitions and error types.

pub mod alternative;
pub mod dosage;
pub mod drug;
pub mod error;
pub mod extraction;
pub mod interaction;
