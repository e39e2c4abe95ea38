//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the chat login, the remote Fedora services and command behaviour.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub meetings: MeetingsConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub system: SystemConfig,
    /// Rooms that receive a greeting when the bot starts.
    #[serde(default)]
    pub bridges: Vec<String>,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }
}

/// Configuration for the chat transport and the remote services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
    pub fas: FasConfig,
    #[serde(default = "default_pkgdb")]
    pub pkgdb: EndpointConfig,
    #[serde(default = "default_calendar")]
    pub calendar: EndpointConfig,
    #[serde(default = "default_badges")]
    pub badges: EndpointConfig,
    #[serde(default = "default_datagrepper")]
    pub datagrepper: EndpointConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Fedora Account System credentials. Every request is sent with basic auth.
#[derive(Debug, Deserialize, Clone)]
pub struct FasConfig {
    #[serde(default = "default_fas_url")]
    pub url: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub url: String,
}

impl EndpointConfig {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

fn default_fas_url() -> String {
    "https://admin.fedoraproject.org/accounts".to_string()
}
fn default_pkgdb() -> EndpointConfig {
    EndpointConfig::new("https://admin.fedoraproject.org/pkgdb")
}
fn default_calendar() -> EndpointConfig {
    EndpointConfig::new("https://apps.fedoraproject.org/calendar")
}
fn default_badges() -> EndpointConfig {
    EndpointConfig::new("https://badges.fedoraproject.org")
}
fn default_datagrepper() -> EndpointConfig {
    EndpointConfig::new("https://apps.fedoraproject.org/datagrepper")
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommandsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_prefix() -> String {
    ".".to_string()
}
fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct MeetingsConfig {
    /// Suffix fedocal uses for chat locations, e.g. `fedora-meeting@irc.freenode.net`.
    #[serde(default = "default_network")]
    pub network: String,
    #[serde(default = "default_next_meeting_limit")]
    pub next_meeting_limit: usize,
    #[serde(default = "default_next_meetings_limit")]
    pub next_meetings_limit: usize,
}

impl Default for MeetingsConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            next_meeting_limit: default_next_meeting_limit(),
            next_meetings_limit: default_next_meetings_limit(),
        }
    }
}

fn default_network() -> String {
    "irc.freenode.net".to_string()
}
fn default_next_meeting_limit() -> usize {
    3
}
fn default_next_meetings_limit() -> usize {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatsConfig {
    #[serde(default = "default_resolution")]
    pub sparkline_resolution: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            sparkline_resolution: default_resolution(),
        }
    }
}

fn default_resolution() -> u32 {
    50
}

/// System-level settings for the bot.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SystemConfig {
    /// Reload the package ACL dump every N minutes. Loaded once at start-up when unset.
    #[serde(default)]
    pub acl_refresh_minutes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
services:
  matrix:
    username: zodbot
    password: secret
    homeserver: https://matrix.example.org
  fas:
    username: zodbot
    password: hunter2
"#;

    #[test]
    fn test_defaults_are_filled_in() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.commands.prefix, ".");
        assert_eq!(config.commands.timeout_secs, 30);
        assert_eq!(config.services.fas.url, "https://admin.fedoraproject.org/accounts");
        assert_eq!(config.services.pkgdb.url, "https://admin.fedoraproject.org/pkgdb");
        assert_eq!(config.services.calendar.url, "https://apps.fedoraproject.org/calendar");
        assert_eq!(config.meetings.network, "irc.freenode.net");
        assert_eq!(config.meetings.next_meeting_limit, 3);
        assert_eq!(config.meetings.next_meetings_limit, 5);
        assert_eq!(config.stats.sparkline_resolution, 50);
        assert!(config.system.acl_refresh_minutes.is_none());
        assert!(config.bridges.is_empty());
    }

    #[test]
    fn test_overrides() {
        let yaml = format!(
            "{MINIMAL}  badges:\n    url: http://localhost:9000\ncommands:\n  prefix: \"!\"\nsystem:\n  acl_refresh_minutes: 60\n"
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.services.badges.url, "http://localhost:9000");
        assert_eq!(config.commands.prefix, "!");
        assert_eq!(config.commands.timeout_secs, 30);
        assert_eq!(config.system.acl_refresh_minutes, Some(60));
    }

    #[test]
    fn test_missing_fas_section_is_an_error() {
        let yaml = "services:\n  matrix:\n    username: a\n    password: b\n    homeserver: c\n";
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.services.matrix.username, "zodbot");
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/fedbot.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
