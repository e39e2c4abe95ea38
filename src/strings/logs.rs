//! # Log Strings
//!
//! Messages written to the tracing log (console and `data/session.log`).

pub const STARTING: &str = "Starting fedbot...";
pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";
pub const ACL_DOWNLOADING: &str = "Downloading package owners cache";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn acl_loaded(packages: usize) -> String {
    format!("Package owners cache holds {packages} Fedora packages")
}

pub fn acl_failed(err: &str) -> String {
    format!("Failed to download package owners cache: {err}")
}

pub fn dispatching(command: &str, args: &str, sender: &str) -> String {
    format!("Router dispatching cmd='{command}' args='{args}' sender='{sender}'")
}

pub fn command_failed(command: &str, err: &str) -> String {
    format!("Command {command} failed: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("Received invite for room {room_id}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn sync_loop_fail(err: &str) -> String {
    format!("Matrix sync failed: {err}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}
