//! # Fedora Account System Client
//!
//! Thin wrapper over the FAS JSON API: person lookups, group details,
//! group membership dumps and free-form people queries. All calls use basic auth.

use crate::domain::config::FasConfig;
use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::types::{Group, GroupMember, PeopleRow, Person, RoleType};
use crate::infrastructure::http;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

const SERVICE: &str = "fas";

#[derive(Clone)]
pub struct FasClient {
    http: Client,
    base: String,
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct PersonEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    person: Option<Person>,
}

#[derive(Deserialize)]
struct GroupEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    group: Option<Group>,
    #[serde(default)]
    tg_flash: Option<String>,
}

#[derive(Deserialize)]
struct GroupDump {
    #[serde(default)]
    people: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
struct PeopleQueryEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    rows: Vec<PeopleRow>,
}

impl FasClient {
    pub fn new(http: Client, config: &FasConfig) -> Self {
        Self {
            http,
            base: config.url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    fn get(&self, url: url::Url) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("tg_format", "json")])
    }

    /// Returns `None` when the account does not exist.
    pub async fn person_by_username(&self, username: &str) -> ServiceResult<Option<Person>> {
        let url = http::endpoint(&self.base, "json/person_by_username")?;
        let envelope: PersonEnvelope =
            http::get_json(SERVICE, self.get(url).query(&[("username", username)])).await?;
        if envelope.success == Some(false) {
            return Ok(None);
        }
        Ok(envelope.person)
    }

    pub async fn group_by_name(&self, name: &str) -> ServiceResult<Group> {
        let url = http::endpoint(&self.base, "json/group_by_name")?;
        let envelope: GroupEnvelope =
            http::get_json(SERVICE, self.get(url).query(&[("groupname", name)])).await?;
        match (envelope.success, envelope.group) {
            (Some(false), _) | (_, None) => Err(ServiceError::app(
                SERVICE,
                "AppError",
                envelope
                    .tg_flash
                    .unwrap_or_else(|| format!("No such group: {name}")),
            )),
            (_, Some(group)) => Ok(group),
        }
    }

    /// Each dumped row is `[username, email, human_name, role_type, ...]`.
    pub async fn group_members(&self, name: &str) -> ServiceResult<Vec<GroupMember>> {
        let mut url = http::endpoint(&self.base, "group/dump")?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::app(SERVICE, "UrlError", "base URL cannot hold a path"))?
            .push(name);
        let dump: GroupDump = http::get_json(SERVICE, self.get(url)).await?;

        Ok(dump
            .people
            .iter()
            .filter_map(|row| {
                let username = row.first()?.as_str()?.to_string();
                let role = row.get(3).and_then(Value::as_str).unwrap_or_default();
                Some(GroupMember {
                    username,
                    role_type: RoleType::from(role),
                })
            })
            .collect())
    }

    pub async fn people_query(
        &self,
        constraints: &[(&str, &str)],
        columns: &[&str],
    ) -> ServiceResult<Vec<PeopleRow>> {
        let url = http::endpoint(&self.base, "json/people_query")?;
        let columns = columns.join(",");
        let mut form: Vec<(&str, &str)> = vec![("columns", columns.as_str()), ("tg_format", "json")];
        form.extend_from_slice(constraints);

        let request = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .form(&form);
        let envelope: PeopleQueryEnvelope = http::get_json(SERVICE, request).await?;
        if envelope.success == Some(false) {
            return Err(ServiceError::app(
                SERVICE,
                "FASError",
                envelope.error.unwrap_or_else(|| "people query failed".to_string()),
            ));
        }
        Ok(envelope.rows)
    }
}
