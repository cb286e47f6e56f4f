//! Shared HTTP client construction and error mapping

use std::time::Duration;

use reqwest::{Client, StatusCode};

use core_kernel::{ExternalServiceConfig, PortError};

/// Builds a pooled HTTP client from a service config
///
/// The timeout applies per request; expiry surfaces as a transient
/// `PortError::Timeout` through [`map_transport_error`].
pub fn build_client(config: &ExternalServiceConfig) -> Result<Client, PortError> {
    let mut headers = reqwest::header::HeaderMap::new();
    if let Some(api_key) = &config.api_key {
        let value = reqwest::header::HeaderValue::from_str(api_key)
            .map_err(|e| PortError::internal(format!("invalid API key header: {e}")))?;
        headers.insert("X-Api-Key", value);
    }
    for (name, value) in &config.headers {
        let name: reqwest::header::HeaderName = name
            .parse()
            .map_err(|e| PortError::internal(format!("invalid header name {name}: {e}")))?;
        let value = reqwest::header::HeaderValue::from_str(value)
            .map_err(|e| PortError::internal(format!("invalid header value: {e}")))?;
        headers.insert(name, value);
    }

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| PortError::internal(format!("failed to build HTTP client: {e}")))
}

/// Maps a reqwest transport error to a `PortError`
pub fn map_transport_error(
    service: &str,
    operation: &str,
    timeout_secs: u64,
    err: reqwest::Error,
) -> PortError {
    if err.is_timeout() {
        return PortError::Timeout {
            operation: operation.to_string(),
            duration_ms: timeout_secs * 1000,
        };
    }
    if err.is_connect() {
        return PortError::Connection {
            message: format!("{service}: {err}"),
            source: Some(Box::new(err)),
        };
    }
    PortError::service_unavailable(service)
}

/// Maps a non-success HTTP status to a `PortError`, if it is one the
/// transport layer should classify
///
/// 4xx statuses other than 404 return `None`: the body may carry an
/// explicit service rejection that the caller surfaces verbatim.
pub fn classify_status(service: &str, entity: &str, status: StatusCode) -> Option<PortError> {
    if status.is_server_error() {
        return Some(PortError::service_unavailable(service));
    }
    if status == StatusCode::NOT_FOUND {
        return Some(PortError::not_found(entity, service));
    }
    None
}
