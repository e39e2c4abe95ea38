//! # Calendar Client
//!
//! Queries fedocal for meetings by location (chat channel) or by calendar name,
//! and lists the known locations.

use crate::domain::config::EndpointConfig;
use crate::domain::error::ServiceResult;
use crate::domain::types::{LocationList, Meeting, MeetingList};
use crate::infrastructure::http;
use reqwest::Client;

const SERVICE: &str = "fedocal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingQuery {
    Location(String),
    Calendar(String),
}

impl MeetingQuery {
    fn param(&self) -> (&'static str, &str) {
        match self {
            Self::Location(l) => ("location", l.as_str()),
            Self::Calendar(c) => ("calendar", c.as_str()),
        }
    }
}

#[derive(Clone)]
pub struct FedocalClient {
    http: Client,
    base: String,
}

impl FedocalClient {
    pub fn new(http: Client, config: &EndpointConfig) -> Self {
        Self {
            http,
            base: config.url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.base.trim_end_matches('/')
    }

    pub async fn meetings(&self, query: &MeetingQuery) -> ServiceResult<Vec<Meeting>> {
        let url = http::endpoint(&self.base, "api/meetings/")?;
        let list: MeetingList =
            http::get_json(SERVICE, self.http.get(url).query(&[query.param()])).await?;
        Ok(list.meetings)
    }

    pub async fn locations(&self) -> ServiceResult<Vec<String>> {
        let url = http::endpoint(&self.base, "api/locations/")?;
        let list: LocationList = http::get_json(SERVICE, self.http.get(url)).await?;
        Ok(list.locations)
    }
}
