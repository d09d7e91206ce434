use common::model::company::Company;
use common::model::stats::StatsReport;

use crate::api::ApiError;

pub enum Msg {
    /// Populate the company dropdown.
    LoadCompanies,
    CompaniesLoaded(Result<Vec<Company>, ApiError>),
    /// Read the dropdown and fetch the selected company's report; with the
    /// placeholder active this just shows the neutral prompt.
    LoadStats,
    StatsLoaded {
        seq: u64,
        result: Result<StatsReport, ApiError>,
    },
    /// Client-side CSV download of the current report.
    ExportCsv,
    DismissStatus(u64),
}
