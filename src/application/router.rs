//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `.whoowns guake`) and dispatches it with the shared context.

use anyhow::Result;
use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::application::context::BotContext;
use crate::application::reply::Reply;
use crate::domain::traits::ChatProvider;
use crate::interface::commands::{self, Command};

static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s*(.*)$").expect("valid command regex"));
static MXID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([^:]+):").expect("valid user id regex"));

/// Reply nick for a sender: the localpart of a Matrix user id, or the sender as-is.
pub fn nick_from_sender(sender: &str) -> &str {
    MXID_RE
        .captures(sender)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(sender)
}

/// Splits `<prefix><command> <args>` into its parts. `None` when the prefix is absent.
pub fn parse_command<'a>(prefix: &str, message: &'a str) -> Option<(&'a str, &'a str)> {
    let body = message.trim().strip_prefix(prefix)?;
    let caps = COMMAND_RE.captures(body)?;
    let command = caps.get(1)?.as_str();
    let args = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
    Some((command, args))
}

pub struct CommandRouter {
    ctx: Arc<BotContext>,
}

impl CommandRouter {
    pub fn new(ctx: Arc<BotContext>) -> Self {
        Self { ctx }
    }

    /// Handles one chat message. Returns `Ok(true)` when a command ran.
    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<bool>
    where
        C: ChatProvider,
    {
        let Some((name, args)) = parse_command(self.ctx.prefix(), message) else {
            return Ok(false);
        };
        let Some(command) = Command::from_name(name) else {
            tracing::debug!("Ignoring unknown command '{}' from {}", name, sender);
            return Ok(false);
        };

        tracing::info!(
            "{}",
            crate::strings::logs::dispatching(command.name(), args, sender)
        );

        let reply = Reply::new(chat, nick_from_sender(sender));
        commands::dispatch(&self.ctx, &reply, command, args).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nick_from_sender() {
        assert_eq!(nick_from_sender("@threebean:fedora.im"), "threebean");
        assert_eq!(nick_from_sender("nirik"), "nirik");
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(".", ".whoowns guake"), Some(("whoowns", "guake")));
        assert_eq!(parse_command(".", "  .quote BOD   weekly "), Some(("quote", "BOD   weekly")));
        assert_eq!(parse_command(".", ".vacation"), Some(("vacation", "")));
        assert_eq!(parse_command("!", "!group sysadmin"), Some(("group", "sysadmin")));
        assert_eq!(parse_command(".", "hello there"), None);
        assert_eq!(parse_command(".", "."), None);
    }
}
