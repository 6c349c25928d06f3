//! Alternative-medication lookup.

use std::sync::Arc;

use tracing::debug;

use rxcheck_contracts::{
    alternative::AlternativeReport,
    error::{RxError, RxResult},
};

use crate::traits::AlternativeSource;

#[derive(Clone)]
pub struct AlternativesFinder {
    source: Arc<dyn AlternativeSource>,
}

impl AlternativesFinder {
    pub fn new(source: Arc<dyn AlternativeSource>) -> Self {
        Self { source }
    }

    /// List the formulary's alternatives for `drug`, in formulary order.
    ///
    /// # Errors
    ///
    /// Returns `RxError::InvalidInput` for a blank name and
    /// `RxError::UnknownDrug` when the formulary has no entry for the drug.
    pub fn find(&self, drug: &str) -> RxResult<AlternativeReport> {
        if drug.trim().is_empty() {
            return Err(RxError::InvalidInput {
                reason: "drug name must not be blank".to_string(),
            });
        }

        let set = self
            .source
            .alternatives(drug)
            .ok_or_else(|| RxError::UnknownDrug {
                name: drug.to_string(),
            })?;

        debug!(drug = %set.drug, count = set.options.len(), "alternatives found");

        Ok(AlternativeReport {
            drug: drug.to_string(),
            alternatives: set.options.clone(),
        })
    }
}
