//! # Package Database Client
//!
//! Package branch lookups and the bugzilla ACL dump (owners and summaries for every product).

use crate::domain::config::EndpointConfig;
use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::types::{BugzillaAcls, BugzillaDump, PackageInfo};
use crate::infrastructure::http;
use reqwest::Client;

const SERVICE: &str = "pkgdb";

#[derive(Clone)]
pub struct PkgdbClient {
    http: Client,
    base: String,
}

impl PkgdbClient {
    pub fn new(http: Client, config: &EndpointConfig) -> Self {
        Self {
            http,
            base: config.url.clone(),
        }
    }

    pub async fn get_package(&self, name: &str) -> ServiceResult<PackageInfo> {
        let mut url = http::endpoint(&self.base, "api/package")?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::app(SERVICE, "UrlError", "base URL cannot hold a path"))?
            .push(name)
            .push("");
        http::get_json(SERVICE, self.http.get(url)).await
    }

    pub async fn bugzilla_acls(&self) -> ServiceResult<BugzillaAcls> {
        let url = http::endpoint(&self.base, "api/bugzilla")?;
        let dump: BugzillaDump =
            http::get_json(SERVICE, self.http.get(url).query(&[("format", "json")])).await?;
        Ok(dump.bugzilla_acls)
    }
}
