//! Update logic for the statistics panel.

use gloo_console::error;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::company::Company;
use common::model::stats::StatsReport;

use crate::api;
use crate::seq::FetchOutcome;
use crate::status::{schedule_dismiss, StatusMessage};

use super::export::download_csv;
use super::messages::Msg;
use super::state::StatisticsPanel;

pub fn update(panel: &mut StatisticsPanel, ctx: &Context<StatisticsPanel>, msg: Msg) -> bool {
    match msg {
        Msg::LoadCompanies => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::get_json::<Vec<Company>>("/companies").await;
                link.send_message(Msg::CompaniesLoaded(result));
            });
            false
        }
        Msg::CompaniesLoaded(result) => {
            match result {
                Ok(companies) => {
                    panel.companies = companies;
                }
                Err(err) => {
                    error!(format!("Failed to load companies for stats: {}", err));
                    show_status(
                        panel,
                        ctx,
                        StatusMessage::error("Failed to load companies for dropdown"),
                    );
                }
            }
            true
        }
        Msg::LoadStats => {
            let raw = panel
                .select_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            match raw.parse::<i64>() {
                Err(_) => {
                    // Placeholder selected: back to the neutral prompt.
                    panel.selection = None;
                    panel.report = None;
                    panel.loading = false;
                }
                Ok(company_id) => {
                    panel.selection = Some(company_id);
                    panel.loading = true;
                    let seq = panel.stats_gate.issue();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::get_json::<StatsReport>(&format!(
                            "/stats/company/{}",
                            company_id
                        ))
                        .await;
                        link.send_message(Msg::StatsLoaded { seq, result });
                    });
                }
            }
            true
        }
        Msg::StatsLoaded { seq, result } => {
            if let Err(err) = &result {
                error!(format!("Error loading company stats: {}", err));
            }
            match panel.apply_stats_result(seq, result) {
                FetchOutcome::Committed => true,
                FetchOutcome::Stale => false,
                FetchOutcome::Failed => {
                    show_status(panel, ctx, StatusMessage::error("Failed to load statistics"));
                    true
                }
            }
        }
        Msg::ExportCsv => {
            if let Some(report) = &panel.report {
                let company_tag = report
                    .company
                    .as_ref()
                    .map(|company| company.id.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let filename = format!("company_{}_stats.csv", company_tag);
                if let Err(err) = download_csv(&filename, &report.to_csv()) {
                    error!("Failed to export stats CSV:", err);
                    show_status(panel, ctx, StatusMessage::error("Failed to export statistics"));
                    return true;
                }
            }
            false
        }
        Msg::DismissStatus(seq) => {
            if seq == panel.status_seq {
                panel.status = None;
                true
            } else {
                false
            }
        }
    }
}

fn show_status(panel: &mut StatisticsPanel, ctx: &Context<StatisticsPanel>, message: StatusMessage) {
    panel.status_seq += 1;
    panel.status = Some(message);
    schedule_dismiss(ctx.link(), Msg::DismissStatus(panel.status_seq));
}
