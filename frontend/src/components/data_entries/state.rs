//! State and form validation for the data-entries panel.

use std::fmt;

use common::model::company::Company;
use common::model::data_entry::{DataEntry, EntryFilter, NewDataEntry};
use yew::prelude::*;

use crate::api::ApiError;
use crate::seq::{FetchOutcome, SeqGate};
use crate::status::StatusMessage;

/// Holds the cached entry list, the companies backing both dropdowns, the
/// active filters, and the create/upload UI state.
pub struct DataEntriesPanel {
    pub entries: Vec<DataEntry>,
    pub companies: Vec<Company>,
    pub filters: EntryFilter,
    pub list_gate: SeqGate,
    pub loading: bool,
    pub status: Option<StatusMessage>,
    pub status_seq: u64,
    /// Upload feedback line, kept until the next upload attempt.
    pub upload_status: Option<String>,
    /// Drop-zone hover highlight. Purely visual.
    pub drag_hover: bool,
    pub loaded: bool,

    // Create-form controls.
    pub company_select_ref: NodeRef,
    pub uid_input_ref: NodeRef,
    pub device_type_input_ref: NodeRef,
    pub data_type_input_ref: NodeRef,
    pub data_set_input_ref: NodeRef,
    pub data_going_to_input_ref: NodeRef,

    // Filter controls.
    pub filter_company_ref: NodeRef,
    pub filter_uid_ref: NodeRef,
    pub filter_data_set_ref: NodeRef,

    pub file_input_ref: NodeRef,
}

impl DataEntriesPanel {
    pub fn new() -> Self {
        DataEntriesPanel {
            entries: Vec::new(),
            companies: Vec::new(),
            filters: EntryFilter::default(),
            list_gate: SeqGate::default(),
            loading: false,
            status: None,
            status_seq: 0,
            upload_status: None,
            drag_hover: false,
            loaded: false,
            company_select_ref: NodeRef::default(),
            uid_input_ref: NodeRef::default(),
            device_type_input_ref: NodeRef::default(),
            data_type_input_ref: NodeRef::default(),
            data_set_input_ref: NodeRef::default(),
            data_going_to_input_ref: NodeRef::default(),
            filter_company_ref: NodeRef::default(),
            filter_uid_ref: NodeRef::default(),
            filter_data_set_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    /// Commits a fetched entry list; stale responses are refused.
    pub fn commit_entries(&mut self, seq: u64, entries: Vec<DataEntry>) -> bool {
        if self.list_gate.try_commit(seq) {
            self.entries = entries;
            true
        } else {
            false
        }
    }

    /// Commits the joined tab load: the entry list (gated) plus the
    /// company dropdown options.
    pub fn commit_all(&mut self, seq: u64, entries: Vec<DataEntry>, companies: Vec<Company>) -> bool {
        if self.commit_entries(seq, entries) {
            self.companies = companies;
            true
        } else {
            false
        }
    }

    /// Applies a completed entry-list fetch. Only the latest fetch clears
    /// the loading indicator or earns an error banner; a superseded
    /// failure surfaces nothing and leaves the cache alone.
    pub fn apply_list_result(
        &mut self,
        seq: u64,
        result: Result<Vec<DataEntry>, ApiError>,
    ) -> FetchOutcome {
        let latest = self.list_gate.is_latest(seq);
        if latest {
            self.loading = false;
        }
        match result {
            Ok(entries) => {
                if self.commit_entries(seq, entries) {
                    FetchOutcome::Committed
                } else {
                    FetchOutcome::Stale
                }
            }
            Err(_) if latest => FetchOutcome::Failed,
            Err(_) => FetchOutcome::Stale,
        }
    }

    /// Same, for the joined tab load.
    pub fn apply_all_result(
        &mut self,
        seq: u64,
        result: Result<(Vec<DataEntry>, Vec<Company>), ApiError>,
    ) -> FetchOutcome {
        let latest = self.list_gate.is_latest(seq);
        if latest {
            self.loading = false;
        }
        match result {
            Ok((entries, companies)) => {
                if self.commit_all(seq, entries, companies) {
                    FetchOutcome::Committed
                } else {
                    FetchOutcome::Stale
                }
            }
            Err(_) if latest => FetchOutcome::Failed,
            Err(_) => FetchOutcome::Stale,
        }
    }
}

/// Why the create form was rejected client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFormError {
    CompanyMissing,
    UidMissing,
}

impl fmt::Display for EntryFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryFormError::CompanyMissing => write!(f, "Please select a company"),
            EntryFormError::UidMissing => write!(f, "UID is required"),
        }
    }
}

/// Validates raw form values into a POST body. `company_id_raw` is the
/// select value, empty while the placeholder option is active. Optional
/// fields pass through as-is and default to the empty string.
pub fn build_new_entry(
    company_id_raw: &str,
    uid: &str,
    device_type: &str,
    data_type: &str,
    data_set: &str,
    data_going_to: &str,
) -> Result<NewDataEntry, EntryFormError> {
    let company_id: i64 = company_id_raw
        .parse()
        .map_err(|_| EntryFormError::CompanyMissing)?;
    let uid = uid.trim();
    if uid.is_empty() {
        return Err(EntryFormError::UidMissing);
    }
    Ok(NewDataEntry {
        company_id,
        uid: uid.to_string(),
        device_type: device_type.to_string(),
        data_type: data_type.to_string(),
        data_set: data_set.to_string(),
        data_going_to: data_going_to.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> DataEntry {
        DataEntry {
            id,
            company_id: 1,
            company_name: Some("Acme".to_string()),
            uid: Some(format!("u-{}", id)),
            device_type: None,
            data_type: None,
            data_set: None,
            data_going_to: None,
            created_at: None,
        }
    }

    #[test]
    fn missing_company_is_rejected_first() {
        assert_eq!(
            build_new_entry("", "u-1", "", "", "", ""),
            Err(EntryFormError::CompanyMissing)
        );
    }

    #[test]
    fn blank_uid_is_rejected() {
        assert_eq!(
            build_new_entry("3", "   ", "", "", "", ""),
            Err(EntryFormError::UidMissing)
        );
    }

    #[test]
    fn valid_form_builds_a_body_with_defaults() {
        let body = build_new_entry("3", " u-9 ", "sensor", "", "", "").unwrap();
        assert_eq!(body.company_id, 3);
        assert_eq!(body.uid, "u-9");
        assert_eq!(body.device_type, "sensor");
        assert_eq!(body.data_set, "");
    }

    #[test]
    fn stale_entry_list_is_discarded() {
        let mut panel = DataEntriesPanel::new();
        let first = panel.list_gate.issue();
        let second = panel.list_gate.issue();
        assert!(panel.commit_entries(second, vec![entry(2)]));
        assert!(!panel.commit_entries(first, vec![entry(1)]));
        assert_eq!(panel.entries[0].id, 2);
    }

    #[test]
    fn joined_commit_updates_both_caches_together() {
        let mut panel = DataEntriesPanel::new();
        let seq = panel.list_gate.issue();
        let companies = vec![Company {
            id: 1,
            name: "Acme".to_string(),
            created_at: "2026-01-01T00:00:00".to_string(),
        }];
        assert!(panel.commit_all(seq, vec![entry(1)], companies));
        assert_eq!(panel.entries.len(), 1);
        assert_eq!(panel.companies.len(), 1);
    }

    #[test]
    fn stale_joined_commit_leaves_both_caches() {
        let mut panel = DataEntriesPanel::new();
        let first = panel.list_gate.issue();
        let second = panel.list_gate.issue();
        assert!(panel.commit_entries(second, vec![entry(2)]));
        assert!(!panel.commit_all(first, vec![entry(1)], Vec::new()));
        assert_eq!(panel.entries[0].id, 2);
        assert!(panel.companies.is_empty());
    }

    #[test]
    fn stale_list_failure_surfaces_nothing() {
        let mut panel = DataEntriesPanel::new();
        let first = panel.list_gate.issue();
        let second = panel.list_gate.issue();
        panel.loading = true;

        assert_eq!(
            panel.apply_list_result(first, Err(ApiError::Network("timeout".to_string()))),
            FetchOutcome::Stale
        );
        assert!(panel.loading);

        assert_eq!(
            panel.apply_list_result(second, Ok(vec![entry(2)])),
            FetchOutcome::Committed
        );
        assert!(!panel.loading);
        assert_eq!(panel.entries[0].id, 2);
    }

    #[test]
    fn failure_of_the_latest_joined_load_is_surfaced() {
        let mut panel = DataEntriesPanel::new();
        let seq = panel.list_gate.issue();
        panel.loading = true;
        assert_eq!(
            panel.apply_all_result(seq, Err(ApiError::Network("timeout".to_string()))),
            FetchOutcome::Failed
        );
        assert!(!panel.loading);
        assert!(panel.entries.is_empty());
    }

    #[test]
    fn stale_joined_failure_leaves_newer_caches_in_place() {
        let mut panel = DataEntriesPanel::new();
        let first = panel.list_gate.issue();
        let second = panel.list_gate.issue();
        let companies = vec![Company {
            id: 1,
            name: "Acme".to_string(),
            created_at: "2026-01-01T00:00:00".to_string(),
        }];
        assert_eq!(
            panel.apply_all_result(second, Ok((vec![entry(2)], companies))),
            FetchOutcome::Committed
        );

        assert_eq!(
            panel.apply_all_result(first, Err(ApiError::Network("timeout".to_string()))),
            FetchOutcome::Stale
        );
        assert_eq!(panel.entries[0].id, 2);
        assert_eq!(panel.companies.len(), 1);
    }
}
