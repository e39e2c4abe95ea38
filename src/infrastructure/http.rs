//! # HTTP Plumbing
//!
//! Shared `reqwest` client construction and JSON decoding for the service clients.
//! Fedora services report failures inside the body (`exc`, `output: notok`), often
//! with a 200 status, so the body is inspected before the status code.

use crate::domain::error::{ServiceError, ServiceResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub fn build_client(timeout_secs: u64) -> ServiceResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("fedbot/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ServiceError::Http)
}

/// Joins `path` onto a configured base URL, regardless of trailing slashes.
pub fn endpoint(base: &str, path: &str) -> ServiceResult<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&joined)?)
}

/// Sends the request and returns the raw JSON body along with the HTTP status.
pub async fn send_json(request: RequestBuilder) -> ServiceResult<(u16, Value)> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.json::<Value>().await?;
    Ok((status, body))
}

/// Sends the request and decodes the body into `T`, surfacing remote application errors.
pub async fn get_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> ServiceResult<T> {
    let (status, body) = send_json(request).await?;
    tracing::debug!("{} answered HTTP {}", service, status);
    check_app_error(service, &body)?;
    if !(200..300).contains(&status) {
        return Err(ServiceError::Status { service, status });
    }
    Ok(serde_json::from_value(body)?)
}

/// Detects the error envelopes used by FAS (`exc`/`tg_flash`) and pkgdb (`output: notok`).
pub fn check_app_error(service: &'static str, body: &Value) -> ServiceResult<()> {
    if let Some(exc) = body.get("exc").and_then(Value::as_str) {
        let message = body
            .get("tg_flash")
            .and_then(Value::as_str)
            .unwrap_or(exc);
        return Err(ServiceError::app(service, exc, message));
    }

    if body.get("output").and_then(Value::as_str) == Some("notok") {
        let message = match body.get("error") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "unknown error".to_string(),
        };
        return Err(ServiceError::app(service, "notok", message));
    }

    Ok(())
}
