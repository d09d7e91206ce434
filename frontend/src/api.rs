//! Thin API client over `gloo-net`.
//!
//! Every call prefixes the configured base origin, speaks JSON (multipart
//! uploads excepted, where the browser supplies the boundary), and maps any
//! failure into [`ApiError`]. Nothing is swallowed here: callers decide how
//! to surface an error to the user.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

/// Base origin for all API paths. Baked in at compile time; defaults to
/// same-origin relative paths.
pub fn api_base() -> &'static str {
    option_env!("API_BASE").unwrap_or("")
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered outside the 2xx range. `message` carries the
    /// response body text when one was readable.
    #[error("server returned status {status}: {message}")]
    Http { status: u16, message: String },
    /// A 2xx response whose body did not decode as the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Http { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(check(response).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&url(path))
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(check(response).await?).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&url(path))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await?;
    Ok(())
}

/// Multipart POST. The content type is left to the browser so the boundary
/// parameter is set correctly.
pub async fn post_form<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let response = Request::post(&url(path))
        .body(form)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(check(response).await?).await
}
