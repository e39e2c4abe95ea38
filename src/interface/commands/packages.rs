//! # Package Commands
//!
//! Handles `.branches` (live pkgdb lookup) and `.what` / `.whoowns` (ACL cache).

use super::{Command, first_arg, send_usage};
use crate::application::context::BotContext;
use crate::application::reply::Reply;
use crate::domain::traits::ChatProvider;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_branches(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(package) = first_arg(args) else {
        return send_usage(ctx, reply, Command::Branches).await;
    };

    let msg = match ctx.pkgdb.get_package(package).await {
        Ok(info) => info.sorted_branches().join(" "),
        Err(e) => {
            tracing::info!(
                "{}",
                crate::strings::logs::command_failed(Command::Branches.name(), &e.to_string())
            );
            messages::NO_SUCH_PACKAGE.to_string()
        }
    };
    reply.say(&msg).await
}

pub async fn handle_what(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(package) = first_arg(args) else {
        return send_usage(ctx, reply, Command::What).await;
    };

    let msg = match ctx.acls.summary(package).await {
        Some(summary) => messages::package_summary(package, &summary),
        None => messages::NO_SUCH_PACKAGE.to_string(),
    };
    reply.say(&msg).await
}

pub async fn handle_whoowns(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(package) = first_arg(args) else {
        return send_usage(ctx, reply, Command::WhoOwns).await;
    };

    let Some(ownership) = ctx.acls.owners(package).await else {
        return reply.say(messages::NO_SUCH_PACKAGE).await;
    };

    if ownership.others.is_empty() {
        return reply.say(&ownership.owner).await;
    }
    let others = ownership
        .others
        .iter()
        .map(|(owner, product)| messages::owner_in(owner, product))
        .collect::<Vec<_>>()
        .join(", ");
    reply.say(&messages::owners(&ownership.owner, &others)).await
}
