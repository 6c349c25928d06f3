//! The pairwise interaction matcher.
//!
//! Every unordered pair of distinct positions `(i, j)`, `i < j`, is looked up
//! in the rule table. Findings come out in nested-iteration order: outer
//! index ascending, inner index ascending. Repeated names are not
//! deduplicated; each position pair is evaluated on its own.

use rxcheck_contracts::{drug::DrugEntry, interaction::InteractionFinding};

use crate::traits::InteractionSource;

/// Match every pair of `entries` against `source`.
///
/// Pure function: the same entries and table always give the same findings.
/// Findings carry the entries' display names unchanged; case-folding only
/// happens inside the lookup.
pub fn match_interactions(
    entries: &[DrugEntry],
    source: &dyn InteractionSource,
) -> Vec<InteractionFinding> {
    let mut findings = Vec::new();
    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            if let Some(rule) = source.lookup(&first.name, &second.name) {
                findings.push(InteractionFinding::from_rule(&first.name, &second.name, rule));
            }
        }
    }
    findings
}

/// Number of position pairs the matcher evaluates for `n` entries.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
