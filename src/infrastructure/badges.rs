//! # Badges Client
//!
//! Looks up a user's badge assertions on the Fedora Badges site.

use crate::domain::config::EndpointConfig;
use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::types::BadgeReport;
use crate::infrastructure::http;
use reqwest::Client;
use serde_json::Value;

const SERVICE: &str = "badges";

#[derive(Clone)]
pub struct BadgesClient {
    http: Client,
    base: String,
}

impl BadgesClient {
    pub fn new(http: Client, config: &EndpointConfig) -> Self {
        Self {
            http,
            base: config.url.clone(),
        }
    }

    /// Public profile page of `username`.
    pub fn profile_url(&self, username: &str) -> ServiceResult<String> {
        let mut url = http::endpoint(&self.base, "user")?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::app(SERVICE, "UrlError", "base URL cannot hold a path"))?
            .push(username);
        Ok(url.to_string())
    }

    /// The service answers unknown users with `{"error": "..."}`, usually alongside a 404.
    /// That message is part of the report rather than a failure.
    pub async fn user(&self, username: &str) -> ServiceResult<BadgeReport> {
        let profile = self.profile_url(username)?;
        let url = http::endpoint(&profile, "json")?;
        let (status, body) = http::send_json(self.http.get(url)).await?;

        if let Some(error) = body.get("error") {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(BadgeReport::Error(message));
        }
        if !(200..300).contains(&status) {
            return Err(ServiceError::Status {
                service: SERVICE,
                status,
            });
        }

        let count = body
            .get("assertions")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0);
        Ok(BadgeReport::Unlocked {
            count,
            url: profile,
        })
    }
}
