//! View rendering for the statistics panel.
//!
//! The report rendering is split into pure helpers over `StatsReport` so
//! the layout mirrors the data: an overview card, one distribution table
//! per non-empty dimension, a derived-summary block, and the export
//! button. Percentages use the zero-guard convention from
//! `common::model::stats::percentage`.

use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;

use common::model::stats::{percentage, StatsReport, StatsSummary};

use crate::components::{company_options, loading_indicator};
use crate::status::status_area;

use super::messages::Msg;
use super::state::StatisticsPanel;

pub fn view(panel: &StatisticsPanel, ctx: &Context<StatisticsPanel>) -> Html {
    let link = ctx.link();
    html! {
        <div class="panel" id="statistics-panel">
            <h2>{ "Statistics" }</h2>
            { status_area(&panel.status) }
            <div class="form-row">
                <select
                    ref={panel.select_ref.clone()}
                    onchange={link.callback(|_| Msg::LoadStats)}
                >
                    { company_options(&panel.companies, "Select a company", |company| company.id.to_string()) }
                </select>
            </div>
            { content(panel, link) }
        </div>
    }
}

fn content(panel: &StatisticsPanel, link: &Scope<StatisticsPanel>) -> Html {
    if panel.selection.is_none() {
        return html! {
            <div class="loading">{ "Select a company to view statistics" }</div>
        };
    }
    if panel.loading {
        return loading_indicator("Loading statistics...");
    }
    match &panel.report {
        Some(report) => render_report(report, link),
        None => html! { <div class="error">{ "Failed to load statistics" }</div> },
    }
}

fn render_report(report: &StatsReport, link: &Scope<StatisticsPanel>) -> Html {
    let company_name = report
        .company
        .as_ref()
        .map(|company| company.name.as_str())
        .unwrap_or("Unknown Company");

    html! {
        <>
            <div class="stats-overview">
                <h3>{ format!("Statistics for {}", company_name) }</h3>
                <div class="stats-card">
                    <div class="stats-number">
                        { report.total_entries.to_formatted_string(&Locale::en) }
                    </div>
                    <div class="stats-label">{ "Total Data Entries" }</div>
                </div>
            </div>
            {
                if report.data_set_counts.is_empty() {
                    html! {}
                } else {
                    distribution_table(
                        "Data Set Distribution",
                        "Data Set",
                        report.total_entries,
                        report
                            .data_set_counts
                            .iter()
                            .map(|item| (item.data_set.as_deref(), item.count)),
                    )
                }
            }
            {
                if report.device_type_counts.is_empty() {
                    html! {}
                } else {
                    distribution_table(
                        "Device Type Distribution",
                        "Device Type",
                        report.total_entries,
                        report
                            .device_type_counts
                            .iter()
                            .map(|item| (item.device_type.as_deref(), item.count)),
                    )
                }
            }
            {
                if report.has_no_breakdowns() {
                    html! {
                        <div class="stats-section">
                            <p class="no-data">
                                { "No detailed statistics available for this company." }
                            </p>
                        </div>
                    }
                } else {
                    summary_section(&StatsSummary::from_report(report))
                }
            }
            <button class="action-btn" onclick={link.callback(|_| Msg::ExportCsv)}>
                { "Export CSV" }
            </button>
        </>
    }
}

fn distribution_table<'a>(
    title: &str,
    label_header: &str,
    total: u64,
    rows: impl Iterator<Item = (Option<&'a str>, u64)>,
) -> Html {
    html! {
        <div class="stats-section">
            <h3>{ title }</h3>
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{ label_header }</th>
                            <th>{ "Count" }</th>
                            <th>{ "Percentage" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for rows.map(|(label, count)| {
                                html! {
                                    <tr>
                                        <td>{ label.unwrap_or("N/A") }</td>
                                        <td>{ count }</td>
                                        <td>{ format!("{:.1}%", percentage(count, total)) }</td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn summary_section(summary: &StatsSummary) -> Html {
    html! {
        <div class="stats-section">
            <h3>{ "Summary" }</h3>
            <ul class="stats-summary">
                <li>{ format!("Unique data sets: {}", summary.unique_data_sets) }</li>
                <li>{ format!("Unique device types: {}", summary.unique_device_types) }</li>
                {
                    match &summary.most_common_data_set {
                        Some(item) => html! {
                            <li>
                                { format!(
                                    "Most common data set: {} ({} entries)",
                                    item.data_set.as_deref().unwrap_or("N/A"),
                                    item.count,
                                ) }
                            </li>
                        },
                        None => html! {},
                    }
                }
                {
                    match &summary.most_common_device_type {
                        Some(item) => html! {
                            <li>
                                { format!(
                                    "Most common device type: {} ({} entries)",
                                    item.device_type.as_deref().unwrap_or("N/A"),
                                    item.count,
                                ) }
                            </li>
                        },
                        None => html! {},
                    }
                }
            </ul>
        </div>
    }
}
