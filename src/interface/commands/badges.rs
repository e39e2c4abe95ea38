//! # Badges Command
//!
//! Handles `.badges`.

use super::{Command, first_arg, send_usage};
use crate::application::context::BotContext;
use crate::application::reply::Reply;
use crate::domain::traits::ChatProvider;
use crate::domain::types::BadgeReport;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_badges(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(name) = first_arg(args) else {
        return send_usage(ctx, reply, Command::Badges).await;
    };

    let msg = match ctx.badges.user(name).await {
        Ok(BadgeReport::Unlocked { count, url }) => messages::badges_unlocked(name, count, &url),
        Ok(BadgeReport::Error(error)) => error,
        Err(e) => {
            tracing::warn!(
                "{}",
                crate::strings::logs::command_failed(Command::Badges.name(), &e.to_string())
            );
            messages::badges_failed(name)
        }
    };
    reply.say(&msg).await
}
