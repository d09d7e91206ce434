use serde::{Deserialize, Serialize};

use crate::model::company::Company;

/// Per-company aggregate report, computed server-side per request and never
/// cached across company selections.
///
/// Wire shape of `GET /stats/company/{id}`:
///
/// ```json
/// {
///   "company": { "id": 1, "name": "Acme", "created_at": "..." },
///   "total_entries": 12,
///   "data_set_counts": [ { "data_set": "telemetry", "count": 8 }, ... ],
///   "device_type_counts": [ { "device_type": null, "count": 4 }, ... ]
/// }
/// ```
///
/// Dimension labels are nullable: entries created without the field group
/// under a `null` label, which renderers display as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub total_entries: u64,
    #[serde(default)]
    pub data_set_counts: Vec<DataSetCount>,
    #[serde(default)]
    pub device_type_counts: Vec<DeviceTypeCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetCount {
    pub data_set: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTypeCount {
    pub device_type: Option<String>,
    pub count: u64,
}

/// Share of `count` in `total`, in percent.
///
/// The divisor is clamped to at least 1, so a zero total yields 0.0 for a
/// zero count instead of dividing by zero. Chosen convention for the
/// zero-total edge case; deterministic by construction.
pub fn percentage(count: u64, total: u64) -> f64 {
    (count as f64 / total.max(1) as f64) * 100.0
}

impl StatsReport {
    /// True when neither dimension has a breakdown to show.
    pub fn has_no_breakdowns(&self) -> bool {
        self.data_set_counts.is_empty() && self.device_type_counts.is_empty()
    }

    /// Client-side CSV export of the report. Layout: a title line, the
    /// company name and total, then one `label,count` block per non-empty
    /// dimension. Labels are quoted; missing labels become `N/A`.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Company Statistics\n\n");
        let company_name = self
            .company
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown");
        csv.push_str(&format!("Company Name,{}\n", company_name));
        csv.push_str(&format!("Total Entries,{}\n\n", self.total_entries));

        if !self.data_set_counts.is_empty() {
            csv.push_str("Data Set Distribution\nData Set,Count\n");
            for item in &self.data_set_counts {
                csv.push_str(&format!(
                    "\"{}\",{}\n",
                    item.data_set.as_deref().unwrap_or("N/A"),
                    item.count
                ));
            }
            csv.push('\n');
        }

        if !self.device_type_counts.is_empty() {
            csv.push_str("Device Type Distribution\nDevice Type,Count\n");
            for item in &self.device_type_counts {
                csv.push_str(&format!(
                    "\"{}\",{}\n",
                    item.device_type.as_deref().unwrap_or("N/A"),
                    item.count
                ));
            }
        }

        csv
    }
}

/// Derived highlights for a report: unique label counts and the
/// highest-count item per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_entries: u64,
    pub unique_data_sets: usize,
    pub unique_device_types: usize,
    pub most_common_data_set: Option<DataSetCount>,
    pub most_common_device_type: Option<DeviceTypeCount>,
}

impl StatsSummary {
    pub fn from_report(report: &StatsReport) -> Self {
        StatsSummary {
            total_entries: report.total_entries,
            unique_data_sets: report.data_set_counts.len(),
            unique_device_types: report.device_type_counts.len(),
            most_common_data_set: report
                .data_set_counts
                .iter()
                .max_by_key(|item| item.count)
                .cloned(),
            most_common_device_type: report
                .device_type_counts
                .iter()
                .max_by_key(|item| item.count)
                .cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> StatsReport {
        StatsReport {
            company: Some(Company {
                id: 1,
                name: "Acme".to_string(),
                created_at: "2026-01-01T00:00:00".to_string(),
            }),
            total_entries: 10,
            data_set_counts: vec![
                DataSetCount {
                    data_set: Some("telemetry".to_string()),
                    count: 7,
                },
                DataSetCount {
                    data_set: None,
                    count: 3,
                },
            ],
            device_type_counts: vec![DeviceTypeCount {
                device_type: Some("sensor".to_string()),
                count: 10,
            }],
        }
    }

    #[test]
    fn percentage_never_divides_by_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 300.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn empty_breakdowns_are_detected() {
        let report = StatsReport {
            company: None,
            total_entries: 0,
            data_set_counts: vec![],
            device_type_counts: vec![],
        };
        assert!(report.has_no_breakdowns());
        assert!(!sample_report().has_no_breakdowns());
    }

    #[test]
    fn summary_picks_highest_count_per_dimension() {
        let summary = StatsSummary::from_report(&sample_report());
        assert_eq!(summary.unique_data_sets, 2);
        assert_eq!(summary.unique_device_types, 1);
        assert_eq!(
            summary.most_common_data_set.unwrap().data_set.as_deref(),
            Some("telemetry")
        );
        assert_eq!(summary.most_common_device_type.unwrap().count, 10);
    }

    #[test]
    fn summary_of_empty_report_has_no_highlights() {
        let summary = StatsSummary::from_report(&StatsReport {
            company: None,
            total_entries: 0,
            data_set_counts: vec![],
            device_type_counts: vec![],
        });
        assert_eq!(summary.most_common_data_set, None);
        assert_eq!(summary.most_common_device_type, None);
    }

    #[test]
    fn csv_layout_substitutes_na_for_missing_labels() {
        let csv = sample_report().to_csv();
        assert!(csv.starts_with("Company Statistics\n\n"));
        assert!(csv.contains("Company Name,Acme\n"));
        assert!(csv.contains("Total Entries,10\n"));
        assert!(csv.contains("Data Set Distribution\nData Set,Count\n"));
        assert!(csv.contains("\"telemetry\",7\n"));
        assert!(csv.contains("\"N/A\",3\n"));
        assert!(csv.contains("Device Type Distribution\nDevice Type,Count\n"));
        assert!(csv.contains("\"sensor\",10\n"));
    }

    #[test]
    fn report_deserializes_from_wire_json() {
        let report: StatsReport = serde_json::from_str(
            r#"{
                "company": {"id": 2, "name": "Globex", "created_at": "2026-02-02T00:00:00"},
                "total_entries": 4,
                "data_set_counts": [{"data_set": null, "count": 4}],
                "device_type_counts": []
            }"#,
        )
        .unwrap();
        assert_eq!(report.company.as_ref().unwrap().name, "Globex");
        assert_eq!(report.total_entries, 4);
        assert_eq!(report.data_set_counts[0].data_set, None);
        assert!(report.device_type_counts.is_empty());
    }
}
