use serde::{Deserialize, Serialize};

/// A data entry as returned by the API.
///
/// The list endpoint joins the owning company and includes its name so the
/// client can render it without a second lookup. Every free-text field is
/// optional on the wire; renderers substitute `"N/A"` for missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub id: i64,
    pub company_id: i64,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub data_set: Option<String>,
    #[serde(default)]
    pub data_going_to: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// POST body for `/data-entries`.
///
/// `company_id` and a non-blank `uid` are required and validated before the
/// request is issued; the remaining fields default to the empty string,
/// mirroring what the create form submits for untouched inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDataEntry {
    pub company_id: i64,
    pub uid: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub data_set: String,
    #[serde(default)]
    pub data_going_to: String,
}

/// Filter values for the data-entries list.
///
/// Blank fields are omitted from the generated query string entirely; the
/// backend treats an absent parameter as "no constraint", while an empty
/// `uid=` would match nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub company_name: String,
    pub uid: String,
    pub data_set: String,
}

impl EntryFilter {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_empty() && self.uid.is_empty() && self.data_set.is_empty()
    }

    pub fn clear(&mut self) {
        *self = EntryFilter::default();
    }

    /// Builds the query suffix for `/data-entries`, including the leading
    /// `?` when at least one filter is set. Returns an empty string when no
    /// filter is set.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        for (key, value) in [
            ("company_name", &self.company_name),
            ("uid", &self.uid),
            ("data_set", &self.data_set),
        ] {
            if !value.is_empty() {
                pairs.push(format!("{}={}", key, encode_query_value(value)));
            }
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Percent-encodes a single query value. Unreserved characters pass through
/// unchanged, everything else becomes `%XX` per byte.
fn encode_query_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.as_bytes() {
        match *b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(*b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_omits_blank_fields() {
        let filter = EntryFilter {
            company_name: "Acme".to_string(),
            uid: String::new(),
            data_set: "telemetry".to_string(),
        };
        assert_eq!(filter.query_string(), "?company_name=Acme&data_set=telemetry");
    }

    #[test]
    fn query_string_is_empty_when_unfiltered() {
        assert_eq!(EntryFilter::default().query_string(), "");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut filter = EntryFilter {
            company_name: "Acme".to_string(),
            uid: "u-1".to_string(),
            data_set: "telemetry".to_string(),
        };
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.query_string(), "");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let filter = EntryFilter {
            company_name: "Acme & Sons".to_string(),
            ..EntryFilter::default()
        };
        assert_eq!(filter.query_string(), "?company_name=Acme%20%26%20Sons");
    }

    #[test]
    fn entry_deserializes_with_missing_optionals() {
        let entry: DataEntry =
            serde_json::from_str(r#"{"id": 7, "company_id": 2, "uid": "u-7"}"#).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.uid.as_deref(), Some("u-7"));
        assert_eq!(entry.device_type, None);
        assert_eq!(entry.company_name, None);
    }

    #[test]
    fn new_entry_serializes_all_fields() {
        let body = NewDataEntry {
            company_id: 3,
            uid: "u-9".to_string(),
            device_type: String::new(),
            data_type: String::new(),
            data_set: String::new(),
            data_going_to: String::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["company_id"], 3);
        assert_eq!(json["uid"], "u-9");
        assert_eq!(json["device_type"], "");
    }
}
