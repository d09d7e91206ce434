//! State for the companies panel.

use common::model::company::Company;
use yew::prelude::*;

use crate::api::ApiError;
use crate::seq::{FetchOutcome, SeqGate};
use crate::status::StatusMessage;

/// Holds the cached company list plus form and banner state.
///
/// The cache always reflects the most recent gate-accepted fetch; a failed
/// fetch surfaces a banner and leaves the cache untouched.
pub struct CompaniesPanel {
    pub companies: Vec<Company>,
    pub list_gate: SeqGate,
    pub loading: bool,
    pub status: Option<StatusMessage>,
    pub status_seq: u64,
    /// Reference to the company-name input.
    pub name_input_ref: NodeRef,
    /// Guard so the first-render load runs once.
    pub loaded: bool,
}

impl CompaniesPanel {
    pub fn new() -> Self {
        CompaniesPanel {
            companies: Vec::new(),
            list_gate: SeqGate::default(),
            loading: false,
            status: None,
            status_seq: 0,
            name_input_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Commits a fetched list into the cache; stale responses are refused
    /// and the cache keeps its previous contents.
    pub fn commit_companies(&mut self, seq: u64, companies: Vec<Company>) -> bool {
        if self.list_gate.try_commit(seq) {
            self.companies = companies;
            true
        } else {
            false
        }
    }

    /// Applies a completed list fetch. A failure belonging to a superseded
    /// fetch surfaces nothing; only the latest fetch clears the loading
    /// indicator or earns an error banner.
    pub fn apply_list_result(
        &mut self,
        seq: u64,
        result: Result<Vec<Company>, ApiError>,
    ) -> FetchOutcome {
        let latest = self.list_gate.is_latest(seq);
        if latest {
            self.loading = false;
        }
        match result {
            Ok(companies) => {
                if self.commit_companies(seq, companies) {
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

/// Client-side gate for `create`: the trimmed name must be non-empty.
pub fn validate_company_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        Err("Please enter a company name")
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: i64, name: &str) -> Company {
        Company {
            id,
            name: name.to_string(),
            created_at: "2026-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn blank_names_are_rejected_before_any_request() {
        assert!(validate_company_name("").is_err());
        assert!(validate_company_name("   ").is_err());
        assert_eq!(validate_company_name("  Acme "), Ok("Acme".to_string()));
    }

    #[test]
    fn stale_list_response_does_not_replace_newer_cache() {
        let mut panel = CompaniesPanel::new();
        let first = panel.list_gate.issue();
        let second = panel.list_gate.issue();

        // Second-issued fetch resolves first and wins.
        assert!(panel.commit_companies(second, vec![company(2, "Globex")]));
        assert!(!panel.commit_companies(first, vec![company(1, "Acme")]));

        assert_eq!(panel.companies.len(), 1);
        assert_eq!(panel.companies[0].name, "Globex");
    }

    #[test]
    fn accepted_commit_replaces_cache_atomically() {
        let mut panel = CompaniesPanel::new();
        let seq = panel.list_gate.issue();
        assert!(panel.commit_companies(seq, vec![company(1, "Acme"), company(2, "Globex")]));
        assert_eq!(panel.companies.len(), 2);
    }

    #[test]
    fn stale_failure_surfaces_nothing() {
        let mut panel = CompaniesPanel::new();
        let first = panel.list_gate.issue();
        let second = panel.list_gate.issue();
        panel.loading = true;

        // The superseded fetch fails while the newer one is in flight;
        // the loading indicator stays up and no banner is earned.
        assert_eq!(
            panel.apply_list_result(first, Err(ApiError::Network("timeout".to_string()))),
            FetchOutcome::Stale
        );
        assert!(panel.loading);

        assert_eq!(
            panel.apply_list_result(second, Ok(vec![company(2, "Globex")])),
            FetchOutcome::Committed
        );
        assert!(!panel.loading);
        assert_eq!(panel.companies[0].name, "Globex");
    }

    #[test]
    fn failure_of_the_latest_fetch_is_surfaced() {
        let mut panel = CompaniesPanel::new();
        let seq = panel.list_gate.issue();
        panel.loading = true;
        assert_eq!(
            panel.apply_list_result(seq, Err(ApiError::Network("timeout".to_string()))),
            FetchOutcome::Failed
        );
        assert!(!panel.loading);
        assert!(panel.companies.is_empty());
    }
}
