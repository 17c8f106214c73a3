//! Generic HTTP fetching with status and payload error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Maps a non-success status to the matching [`AppError`] variant.
pub(super) fn status_error(status: reqwest::StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Classifies a body that failed to deserialize as `T`.
pub(super) fn parse_error(body: &str, e: serde_json::Error, url: &str) -> AppError {
    let trimmed = body.trim_start();
    if trimmed.is_empty() {
        AppError::api_no_data("Response body is empty", url)
    } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        AppError::api_malformed_json("Response is not valid JSON", url)
    } else if e.is_syntax() || e.is_eof() {
        AppError::api_malformed_json(e.to_string(), url)
    } else {
        AppError::api_unexpected_structure(e.to_string(), url)
    }
}

/// Single GET of a JSON document. Not retried; the next refresh cycle tries again.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(status_error(status, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        parse_error(&response_text, e, url)
    })
}
