//! The interaction checker: validation and reporting around the matcher.
//!
//! The checker owns the pipeline for one analysis request:
//!
//!   Validate (≥ 2 entries) → Match all pairs → Report
//!
//! The matcher is only reachable after validation passes. Fewer than two
//! entries is a validation signal returned to the caller, not a fault, and
//! no matching is attempted in that case.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use rxcheck_contracts::{
    drug::DrugEntry,
    error::{RxError, RxResult},
    interaction::InteractionReport,
};

use crate::{
    matcher::{match_interactions, pair_count},
    traits::InteractionSource,
};

/// Minimum number of entries for an interaction analysis.
pub const MIN_ENTRIES: usize = 2;

/// Runs interaction analyses against one shared rule table.
///
/// Cheap to clone; clones share the same table.
#[derive(Clone)]
pub struct InteractionChecker {
    source: Arc<dyn InteractionSource>,
}

impl InteractionChecker {
    /// Create a checker over the given rule table.
    pub fn new(source: Arc<dyn InteractionSource>) -> Self {
        Self { source }
    }

    /// Number of rules the checker matches against.
    pub fn rule_count(&self) -> usize {
        self.source.rule_count()
    }

    /// Analyze every pair of `entries`.
    ///
    /// # Errors
    ///
    /// Returns `RxError::NotEnoughDrugs` when fewer than two entries are
    /// supplied. A result with no findings is `Ok` and means "clear".
    pub fn analyze(&self, entries: &[DrugEntry]) -> RxResult<InteractionReport> {
        if entries.len() < MIN_ENTRIES {
            warn!(count = entries.len(), "interaction analysis needs at least two drugs");
            return Err(RxError::NotEnoughDrugs { count: entries.len() });
        }

        debug!(
            drugs = entries.len(),
            rules = self.source.rule_count(),
            "matching drug pairs"
        );

        let findings = match_interactions(entries, self.source.as_ref());

        for finding in &findings {
            debug!(
                drug1 = %finding.drug1,
                drug2 = %finding.drug2,
                severity = %finding.severity,
                "interaction found"
            );
        }

        let report = InteractionReport {
            drugs_checked: entries.len(),
            pairs_evaluated: pair_count(entries.len()),
            findings,
            analyzed_at: Utc::now(),
        };

        info!(
            drugs = report.drugs_checked,
            pairs = report.pairs_evaluated,
            findings = report.findings.len(),
            "interaction analysis complete"
        );

        Ok(report)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
