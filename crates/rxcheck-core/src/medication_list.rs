//! The user's working list of drugs and its analysis state.
//!
//! Entries keep insertion order. Any change to the list invalidates the
//! previous report, so the list moves back to "not yet analyzed" until the
//! next successful analysis.

use tracing::debug;

use rxcheck_contracts::{
    drug::{normalize_drug_name, DrugEntry, DrugEntryId},
    error::{RxError, RxResult},
    interaction::InteractionReport,
};

use crate::checker::InteractionChecker;

/// Where the list stands relative to its last analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    /// No analysis since the list was created or last changed.
    NotAnalyzed,
    /// Analyzed, and no pair matched a rule.
    Clear,
    /// Analyzed, with this many findings.
    InteractionsFound(usize),
}

/// An ordered, mutable list of drug entries.
#[derive(Debug, Clone, Default)]
pub struct MedicationList {
    entries: Vec<DrugEntry>,
    last_report: Option<InteractionReport>,
}

impl MedicationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drug and return its id.
    ///
    /// The name is trimmed and lowercased before it is stored. Dosage and
    /// frequency are trimmed display strings.
    ///
    /// # Errors
    ///
    /// Returns `RxError::InvalidInput` when the name is blank.
    pub fn add(&mut self, name: &str, dosage: &str, frequency: &str) -> RxResult<DrugEntryId> {
        let name = normalize_drug_name(name);
        if name.is_empty() {
            return Err(RxError::InvalidInput {
                reason: "drug name must not be blank".to_string(),
            });
        }

        let entry = DrugEntry::new(name, dosage.trim(), frequency.trim());
        let id = entry.id;
        debug!(id = %id, name = %entry.name, "drug added");

        self.entries.push(entry);
        self.last_report = None;
        Ok(id)
    }

    /// Remove the entry with `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns `RxError::EntryNotFound` when no entry has that id.
    pub fn remove(&mut self, id: DrugEntryId) -> RxResult<DrugEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RxError::EntryNotFound { id: id.to_string() })?;

        let removed = self.entries.remove(pos);
        debug!(id = %id, name = %removed.name, "drug removed");
        self.last_report = None;
        Ok(removed)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_report = None;
    }

    pub fn entries(&self) -> &[DrugEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run `checker` over the current entries and keep the report.
    ///
    /// On error the previous state is left untouched.
    pub fn analyze(&mut self, checker: &InteractionChecker) -> RxResult<&InteractionReport> {
        let report = checker.analyze(&self.entries)?;
        Ok(self.last_report.insert(report))
    }

    /// The report from the last analysis, if the list has not changed since.
    pub fn last_report(&self) -> Option<&InteractionReport> {
        self.last_report.as_ref()
    }

    pub fn status(&self) -> AnalysisStatus {
        match &self.last_report {
            None => AnalysisStatus::NotAnalyzed,
            Some(r) if r.is_clear() => AnalysisStatus::Clear,
            Some(r) => AnalysisStatus::InteractionsFound(r.findings.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rxcheck_contracts::{drug::DrugEntryId, error::RxError, interaction::Severity};

    use crate::{checker::InteractionChecker, test_support::MockTable};

    use super::{AnalysisStatus, MedicationList};

    fn checker() -> InteractionChecker {
        InteractionChecker::new(Arc::new(MockTable::new(&[(
            "warfarin",
            "aspirin",
            Severity::High,
        )])))
    }

    #[test]
    fn add_normalizes_name_and_keeps_order() {
        let mut list = MedicationList::new();
        list.add("  Warfarin ", " 5 mg ", "once daily").unwrap();
        list.add("ASPIRIN", "81 mg", "daily").unwrap();

        let names: Vec<&str> = list.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["warfarin", "aspirin"]);
        assert_eq!(list.entries()[0].dosage, "5 mg");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut list = MedicationList::new();
        match list.add("   ", "5 mg", "daily") {
            Err(RxError::InvalidInput { reason }) => assert!(reason.contains("blank")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(list.is_empty());
    }

    #[test]
    fn remove_by_id_leaves_duplicates_alone() {
        let mut list = MedicationList::new();
        let first = list.add("metformin", "500 mg", "bid").unwrap();
        let second = list.add("metformin", "1000 mg", "daily").unwrap();

        let removed = list.remove(first).unwrap();
        assert_eq!(removed.dosage, "500 mg");
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].id, second);
    }

    #[test]
    fn remove_unknown_id_errors() {
        let mut list = MedicationList::new();
        list.add("metformin", "", "").unwrap();
        match list.remove(DrugEntryId::new()) {
            Err(RxError::EntryNotFound { .. }) => {}
            other => panic!("expected EntryNotFound, got {:?}", other),
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn status_moves_through_analysis_states() {
        let checker = checker();
        let mut list = MedicationList::new();
        assert_eq!(list.status(), AnalysisStatus::NotAnalyzed);

        list.add("warfarin", "5 mg", "daily").unwrap();
        list.add("metformin", "500 mg", "bid").unwrap();
        list.analyze(&checker).unwrap();
        assert_eq!(list.status(), AnalysisStatus::Clear);

        let aspirin = list.add("aspirin", "81 mg", "daily").unwrap();
        // Any change invalidates the previous report.
        assert_eq!(list.status(), AnalysisStatus::NotAnalyzed);
        assert!(list.last_report().is_none());

        list.analyze(&checker).unwrap();
        assert_eq!(list.status(), AnalysisStatus::InteractionsFound(1));

        list.remove(aspirin).unwrap();
        assert_eq!(list.status(), AnalysisStatus::NotAnalyzed);
    }

    #[test]
    fn failed_analysis_keeps_not_analyzed() {
        let mut list = MedicationList::new();
        list.add("warfarin", "", "").unwrap();
        assert!(matches!(
            list.analyze(&checker()),
            Err(RxError::NotEnoughDrugs { count: 1 })
        ));
        assert_eq!(list.status(), AnalysisStatus::NotAnalyzed);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = MedicationList::new();
        list.add("warfarin", "", "").unwrap();
        list.add("aspirin", "", "").unwrap();
        list.analyze(&checker()).unwrap();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.status(), AnalysisStatus::NotAnalyzed);
    }
}
