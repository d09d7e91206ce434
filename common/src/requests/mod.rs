use serde::{Deserialize, Serialize};

/// Structured body returned by `POST /data-entries/upload-csv`.
///
/// The server answers with either a human-readable `message` on success or
/// an `error` describing why the import was rejected; the client checks
/// `error` first regardless of HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accepts_either_side() {
        let ok: UploadOutcome = serde_json::from_str(r#"{"message": "imported 3 rows"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("imported 3 rows"));
        assert_eq!(ok.error, None);

        let err: UploadOutcome = serde_json::from_str(r#"{"error": "missing uid column"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("missing uid column"));
    }
}
