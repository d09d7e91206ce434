//! State for the statistics panel.

use common::model::company::Company;
use common::model::stats::StatsReport;
use yew::prelude::*;

use crate::api::ApiError;
use crate::seq::{FetchOutcome, SeqGate};
use crate::status::StatusMessage;

/// Reports are fetched fresh per selection and never cached across
/// company changes; only the gate keeps rapid re-selections in order.
pub struct StatisticsPanel {
    pub companies: Vec<Company>,
    /// The company id the report was requested for, `None` while the
    /// placeholder option is active.
    pub selection: Option<i64>,
    pub report: Option<StatsReport>,
    pub stats_gate: SeqGate,
    pub loading: bool,
    pub status: Option<StatusMessage>,
    pub status_seq: u64,
    pub select_ref: NodeRef,
    pub loaded: bool,
}

impl StatisticsPanel {
    pub fn new() -> Self {
        StatisticsPanel {
            companies: Vec::new(),
            selection: None,
            report: None,
            stats_gate: SeqGate::default(),
            loading: false,
            status: None,
            status_seq: 0,
            select_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Commits a fetched report; a stale response is dropped so a slow
    /// fetch for a previously selected company never overwrites the
    /// current one.
    pub fn commit_report(&mut self, seq: u64, report: StatsReport) -> bool {
        if self.stats_gate.try_commit(seq) {
            self.report = Some(report);
            true
        } else {
            false
        }
    }

    /// Applies a completed stats fetch. Success goes through the gate as
    /// usual; failure clears the report only when it belongs to the latest
    /// fetch, so a slow error for a previously selected company never
    /// wipes the report the current selection already committed. The
    /// loading flag stays up while a newer fetch is still in flight.
    pub fn apply_stats_result(
        &mut self,
        seq: u64,
        result: Result<StatsReport, ApiError>,
    ) -> FetchOutcome {
        let latest = self.stats_gate.is_latest(seq);
        if latest {
            self.loading = false;
        }
        match result {
            Ok(report) => {
                if self.commit_report(seq, report) {
                    FetchOutcome::Committed
                } else {
                    FetchOutcome::Stale
                }
            }
            Err(_) if latest => {
                self.report = None;
                FetchOutcome::Failed
            }
            Err(_) => FetchOutcome::Stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_for(total: u64) -> StatsReport {
        StatsReport {
            company: None,
            total_entries: total,
            data_set_counts: vec![],
            device_type_counts: vec![],
        }
    }

    fn network_err() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }

    #[test]
    fn stale_report_for_previous_selection_is_dropped() {
        let mut panel = StatisticsPanel::new();
        let first = panel.stats_gate.issue();
        let second = panel.stats_gate.issue();
        assert!(panel.commit_report(second, report_for(5)));
        assert!(!panel.commit_report(first, report_for(9)));
        assert_eq!(panel.report.as_ref().unwrap().total_entries, 5);
    }

    #[test]
    fn stale_failure_leaves_newer_report_in_place() {
        let mut panel = StatisticsPanel::new();
        let first = panel.stats_gate.issue();
        let second = panel.stats_gate.issue();

        assert_eq!(
            panel.apply_stats_result(second, Ok(report_for(5))),
            FetchOutcome::Committed
        );
        // The fetch for the previously selected company fails afterwards.
        assert_eq!(
            panel.apply_stats_result(first, Err(network_err())),
            FetchOutcome::Stale
        );

        assert_eq!(panel.report.as_ref().unwrap().total_entries, 5);
        assert!(!panel.loading);
    }

    #[test]
    fn failure_of_the_latest_fetch_clears_the_report() {
        let mut panel = StatisticsPanel::new();
        let first = panel.stats_gate.issue();
        assert_eq!(
            panel.apply_stats_result(first, Ok(report_for(5))),
            FetchOutcome::Committed
        );

        let second = panel.stats_gate.issue();
        panel.loading = true;
        assert_eq!(
            panel.apply_stats_result(second, Err(network_err())),
            FetchOutcome::Failed
        );
        assert!(panel.report.is_none());
        assert!(!panel.loading);
    }

    #[test]
    fn stale_failure_keeps_the_loading_indicator_up() {
        let mut panel = StatisticsPanel::new();
        let first = panel.stats_gate.issue();
        let second = panel.stats_gate.issue();
        panel.loading = true;

        // The superseded fetch fails while the newer one is in flight.
        assert_eq!(
            panel.apply_stats_result(first, Err(network_err())),
            FetchOutcome::Stale
        );
        assert!(panel.loading);

        assert_eq!(
            panel.apply_stats_result(second, Ok(report_for(7))),
            FetchOutcome::Committed
        );
        assert!(!panel.loading);
        assert_eq!(panel.report.as_ref().unwrap().total_entries, 7);
    }
}
