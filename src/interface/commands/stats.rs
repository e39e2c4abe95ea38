//! # Quote Command
//!
//! Handles `.quote <SYMBOL> [frame]`: message-bus activity rendered like a stock ticker.

use super::{Command, send_usage};
use crate::application::context::BotContext;
use crate::application::reply::Reply;
use crate::application::stats::{self, Frame};
use crate::domain::traits::ChatProvider;
use crate::strings::messages;
use anyhow::Result;
use chrono::Utc;

pub async fn handle_quote(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let mut parts = args.split_whitespace();
    let Some(symbol) = parts.next() else {
        return send_usage(ctx, reply, Command::Quote).await;
    };
    let frame_name = parts.next().unwrap_or(Frame::Daily.name());

    let Some(category) = ctx.symbols.category(symbol) else {
        return reply
            .say(&messages::no_such_symbol(symbol, &ctx.symbols.listing()))
            .await;
    };
    let Some(frame) = Frame::from_name(frame_name) else {
        return reply
            .say(&messages::no_such_frame(frame_name, &Frame::listing()))
            .await;
    };

    reply.typing(true).await;
    let report = stats::fetch_quote(
        &ctx.datagrepper,
        symbol,
        category,
        frame,
        ctx.config.stats.sparkline_resolution,
        Utc::now(),
    )
    .await;
    reply.typing(false).await;

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!(
                "{}",
                crate::strings::logs::command_failed(Command::Quote.name(), &e.to_string())
            );
            return reply.say(messages::DATAGREPPER_FAILED).await;
        }
    };

    for line in report.lines() {
        reply.say(&line).await?;
    }
    Ok(())
}
