//! # Domain Types
//!
//! Shapes of the JSON documents returned by the Fedora web services.
//! Only the fields the commands read are modelled; everything else is ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A Fedora Account System user.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Person {
    pub username: String,
    #[serde(default)]
    pub human_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub creation: Option<String>,
    #[serde(default)]
    pub ircnick: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub gpg_keyid: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub unapproved_memberships: Vec<GroupRef>,
}

impl Person {
    /// Account creation date without the time of day.
    pub fn creation_date(&self) -> Option<&str> {
        self.creation
            .as_deref()
            .and_then(|c| c.split(' ').next())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GroupRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleType {
    User,
    Sponsor,
    Administrator,
    Other,
}

impl From<&str> for RoleType {
    fn from(s: &str) -> Self {
        match s {
            "user" => Self::User,
            "sponsor" => Self::Sponsor,
            "administrator" => Self::Administrator,
            _ => Self::Other,
        }
    }
}

impl RoleType {
    /// Nick decoration used in member listings (`@admin`, `+sponsor`).
    pub fn sigil(&self) -> &'static str {
        match self {
            Self::Administrator => "@",
            Self::Sponsor => "+",
            Self::User | Self::Other => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub username: String,
    pub role_type: RoleType,
}

/// One row of a people query. Which fields are populated depends on the requested columns.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct PeopleRow {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub ircnick: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub role_type: Option<String>,
}

impl PeopleRow {
    pub fn role(&self) -> RoleType {
        self.role_type
            .as_deref()
            .map(RoleType::from)
            .unwrap_or(RoleType::Other)
    }
}

/// A fedocal calendar entry. Dates are `%Y-%m-%d`, times `%H:%M:%S`, both UTC.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Meeting {
    pub meeting_name: String,
    pub meeting_date: String,
    pub meeting_time_start: String,
    pub meeting_date_end: String,
    pub meeting_time_stop: String,
    #[serde(default)]
    pub meeting_location: Option<String>,
    #[serde(default)]
    pub meeting_manager: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingList {
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationList {
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Collection {
    pub branchname: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PackageListing {
    pub collection: Collection,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PackageInfo {
    #[serde(default)]
    pub packages: Vec<PackageListing>,
}

impl PackageInfo {
    pub fn sorted_branches(&self) -> Vec<String> {
        let mut branches: Vec<String> = self
            .packages
            .iter()
            .map(|p| p.collection.branchname.clone())
            .collect();
        branches.sort();
        branches
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AclEntry {
    pub owner: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// product -> package -> entry, as served by pkgdb's bugzilla dump.
pub type BugzillaAcls = BTreeMap<String, BTreeMap<String, AclEntry>>;

#[derive(Debug, Clone, Deserialize)]
pub struct BugzillaDump {
    #[serde(rename = "bugzillaAcls")]
    pub bugzilla_acls: BugzillaAcls,
}

/// Result of a badge lookup: the service either lists the user's assertions or explains why not.
#[derive(Debug, Clone, PartialEq)]
pub enum BadgeReport {
    Unlocked { count: usize, url: String },
    Error(String),
}
