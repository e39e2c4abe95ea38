//! # Help Text
//!
//! Header and line format of the `help` command output.

pub const HEADER: &str = "fedbot answers questions about Fedora accounts, packages and meetings. Commands:";

pub fn entry(prefix: &str, usage: &str, summary: &str) -> String {
    format!("{prefix}{usage} - {summary}")
}
