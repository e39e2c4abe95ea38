//! # Help Command
//!
//! Handles the `.help` command.
//! Lists every command with its arguments.

use super::Command;
use crate::application::context::BotContext;
use crate::application::reply::Reply;
use crate::domain::traits::ChatProvider;
use crate::strings::help;
use anyhow::Result;

pub fn help_lines(prefix: &str) -> Vec<String> {
    std::iter::once(help::HEADER.to_string())
        .chain(
            Command::ALL
                .iter()
                .map(|c| help::entry(prefix, &c.usage(), c.summary())),
        )
        .collect()
}

pub async fn handle_help(ctx: &BotContext, reply: &Reply<'_, impl ChatProvider>) -> Result<()> {
    for line in help_lines(ctx.prefix()) {
        reply.say(&line).await?;
    }
    Ok(())
}
