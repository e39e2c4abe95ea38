//! # Datagrepper Client
//!
//! Counts message-bus messages of a category inside a time window.

use crate::domain::config::EndpointConfig;
use crate::domain::error::ServiceResult;
use crate::infrastructure::http;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

const SERVICE: &str = "datagrepper";

#[derive(Deserialize)]
struct RawPage {
    total: u64,
}

#[derive(Clone)]
pub struct DatagrepperClient {
    http: Client,
    base: String,
}

impl DatagrepperClient {
    pub fn new(http: Client, config: &EndpointConfig) -> Self {
        Self {
            http,
            base: config.url.clone(),
        }
    }

    /// Number of messages in `category` between `start` and `end`.
    /// Only one row is requested; the total comes from the page metadata.
    pub async fn count(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        category: &str,
    ) -> ServiceResult<u64> {
        let url = http::endpoint(&self.base, "raw")?;
        let request = self.http.get(url).query(&[
            ("start", start.timestamp().to_string()),
            ("end", end.timestamp().to_string()),
            ("category", category.to_string()),
            ("rows_per_page", "1".to_string()),
        ]);
        let page: RawPage = http::get_json(SERVICE, request).await?;
        Ok(page.total)
    }
}
