//! CSV bulk-import plumbing.
//!
//! The file picker and the drop zone both funnel into the same path: MIME
//! gate first, then a multipart POST with the file under the `csv_file`
//! field. The server replies with a structured body whose `error` field
//! wins over the HTTP status.

use web_sys::FormData;

use common::requests::UploadOutcome;

use crate::api::{self, ApiError};

/// Only files the browser identifies as CSV go out on the wire.
pub fn csv_mime_ok(mime: &str) -> bool {
    mime == "text/csv"
}

/// Why an upload attempt produced no imported rows.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadFailure {
    /// The server processed the request and rejected the file; carries the
    /// server-supplied reason.
    Rejected(String),
    /// The request never completed or returned no structured body.
    Transport(ApiError),
}

/// Uploads one CSV file. Returns the server's success message.
pub async fn upload_csv(file: &web_sys::File) -> Result<String, UploadFailure> {
    let form = FormData::new()
        .map_err(|_| UploadFailure::Transport(ApiError::Network("could not build form data".to_string())))?;
    form.append_with_blob_and_filename("csv_file", file, &file.name())
        .map_err(|_| UploadFailure::Transport(ApiError::Network("could not attach file".to_string())))?;

    match api::post_form::<UploadOutcome>("/data-entries/upload-csv", form).await {
        Ok(outcome) => interpret_outcome(outcome),
        // A non-2xx answer may still carry the structured body as text.
        Err(ApiError::Http { status, message }) => {
            if let Ok(outcome) = serde_json::from_str::<UploadOutcome>(&message) {
                if outcome.error.is_some() || outcome.message.is_some() {
                    return interpret_outcome(outcome);
                }
            }
            Err(UploadFailure::Transport(ApiError::Http { status, message }))
        }
        Err(other) => Err(UploadFailure::Transport(other)),
    }
}

fn interpret_outcome(outcome: UploadOutcome) -> Result<String, UploadFailure> {
    if let Some(error) = outcome.error {
        return Err(UploadFailure::Rejected(error));
    }
    Ok(outcome
        .message
        .unwrap_or_else(|| "import complete".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_text_csv_passes_the_gate() {
        assert!(csv_mime_ok("text/csv"));
        assert!(!csv_mime_ok("text/plain"));
        assert!(!csv_mime_ok("application/vnd.ms-excel"));
        assert!(!csv_mime_ok(""));
    }

    #[test]
    fn server_error_field_wins_over_message() {
        let outcome = UploadOutcome {
            message: Some("ignored".to_string()),
            error: Some("missing uid column".to_string()),
        };
        assert_eq!(
            interpret_outcome(outcome),
            Err(UploadFailure::Rejected("missing uid column".to_string()))
        );
    }

    #[test]
    fn success_reports_the_server_message() {
        let outcome = UploadOutcome {
            message: Some("imported 3 rows".to_string()),
            error: None,
        };
        assert_eq!(interpret_outcome(outcome), Ok("imported 3 rows".to_string()));
    }
}
