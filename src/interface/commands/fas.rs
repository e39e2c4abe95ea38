//! # Account System Commands
//!
//! Handles `.admins`, `.sponsors`, `.members`, `.group`, `.fas`, `.fasinfo`,
//! `.hellomynameis`, `.himynameis`, `.localtime` and `.wikilink`.

use super::{Command, first_arg, send_usage};
use crate::application::context::BotContext;
use crate::application::reply::Reply;
use crate::domain::error::ServiceError;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{GroupMember, RoleType};
use crate::strings::messages;
use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;

fn listing(members: &[GroupMember], render: impl Fn(&GroupMember) -> Option<String>) -> String {
    members.iter().filter_map(render).collect::<Vec<_>>().join(" ")
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(messages::NONE)
}

/// Shared body of the three group listing commands.
async fn group_listing(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    command: Command,
    args: &str,
    render: impl Fn(&GroupMember) -> Option<String>,
    format: fn(&str, &str) -> String,
) -> Result<()> {
    let Some(name) = first_arg(args) else {
        return send_usage(ctx, reply, command).await;
    };

    let msg = match ctx.fas.group_members(name).await {
        Ok(members) => format(name, &listing(&members, render)),
        Err(e) => {
            log_failure(command, &e);
            messages::no_group(name)
        }
    };
    reply.say(&msg).await
}

fn log_failure(command: Command, err: &ServiceError) {
    let line = crate::strings::logs::command_failed(command.name(), &err.to_string());
    if err.is_app_error() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }
}

pub async fn handle_admins(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    group_listing(
        ctx,
        reply,
        Command::Admins,
        args,
        |m| (m.role_type == RoleType::Administrator).then(|| m.username.clone()),
        messages::administrators,
    )
    .await
}

pub async fn handle_sponsors(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    group_listing(
        ctx,
        reply,
        Command::Sponsors,
        args,
        |m| match m.role_type {
            RoleType::Sponsor => Some(m.username.clone()),
            RoleType::Administrator => Some(format!("@{}", m.username)),
            RoleType::User | RoleType::Other => None,
        },
        messages::sponsors,
    )
    .await
}

pub async fn handle_members(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    group_listing(
        ctx,
        reply,
        Command::Members,
        args,
        |m| Some(format!("{}{}", m.role_type.sigil(), m.username)),
        messages::members,
    )
    .await
}

pub async fn handle_group(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(name) = first_arg(args) else {
        return send_usage(ctx, reply, Command::Group).await;
    };

    let msg = match ctx.fas.group_by_name(name).await {
        Ok(group) => messages::group_info(name, or_none(&group.display_name)),
        Err(e) => {
            log_failure(Command::Group, &e);
            messages::no_group_quoted(name)
        }
    };
    reply.say(&msg).await
}

pub async fn handle_fas(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(pattern) = first_arg(args) else {
        return send_usage(ctx, reply, Command::Fas).await;
    };

    let msg = match ctx
        .fas
        .people_query(&[("ircnick", pattern)], &["username", "ircnick", "email"])
        .await
    {
        Ok(users) if users.is_empty() => messages::NO_USER_MATCH.to_string(),
        Ok(users) => users
            .iter()
            .map(|u| messages::user_match(or_none(&u.username), or_none(&u.ircnick), or_none(&u.email)))
            .collect::<Vec<_>>()
            .join(", "),
        Err(e) => {
            log_failure(Command::Fas, &e);
            messages::USER_SEARCH_FAILED.to_string()
        }
    };
    reply.say(&msg).await
}

pub async fn handle_fasinfo(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(name) = first_arg(args) else {
        return send_usage(ctx, reply, Command::FasInfo).await;
    };

    let person = match ctx.fas.person_by_username(name).await {
        Ok(Some(person)) => person,
        Ok(None) => return reply.say(&messages::user_missing(name)).await,
        Err(e) => {
            log_failure(Command::FasInfo, &e);
            return reply.say(&messages::user_info_failed(name)).await;
        }
    };

    reply
        .say(&messages::user_details(
            &person.username,
            or_none(&person.human_name),
            or_none(&person.email),
            person.creation_date().unwrap_or(messages::NONE),
            or_none(&person.ircnick),
            or_none(&person.timezone),
            or_none(&person.locale),
            or_none(&person.gpg_keyid),
            or_none(&person.status),
        ))
        .await?;

    let unapproved: Vec<&str> = person
        .unapproved_memberships
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    if !unapproved.is_empty() {
        reply.say(&messages::unapproved_groups(&unapproved.join(" "))).await?;
    }

    // Roles are only available through a people query.
    let roles = match ctx
        .fas
        .people_query(
            &[("username", name), ("group", "%"), ("role_status", "approved")],
            &["username", "group", "role_type"],
        )
        .await
    {
        Ok(roles) => roles,
        Err(e) => {
            log_failure(Command::FasInfo, &e);
            return reply.say(messages::GROUP_MEMBERSHIPS_FAILED).await;
        }
    };

    let approved: Vec<String> = roles
        .iter()
        .filter_map(|row| {
            let group = row.group.as_deref()?;
            Some(format!("{}{}", row.role().sigil(), group))
        })
        .collect();
    let approved = if approved.is_empty() {
        messages::NONE.to_string()
    } else {
        approved.join(" ")
    };
    reply.say(&messages::approved_groups(&approved)).await
}

async fn introduce(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    command: Command,
    args: &str,
    alias: Option<&str>,
) -> Result<()> {
    let Some(name) = first_arg(args) else {
        return send_usage(ctx, reply, command).await;
    };

    let msg = match ctx.fas.person_by_username(name).await {
        Ok(Some(person)) => messages::hello(
            &person.username,
            alias.unwrap_or_else(|| or_none(&person.human_name)),
            or_none(&person.email),
        ),
        Ok(None) => messages::YOU_DONT_EXIST.to_string(),
        Err(e) => {
            log_failure(command, &e);
            messages::BLEW_UP.to_string()
        }
    };
    reply.say(&msg).await
}

pub async fn handle_hellomynameis(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    introduce(ctx, reply, Command::HelloMyNameIs, args, None).await
}

pub async fn handle_himynameis(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    introduce(ctx, reply, Command::HiMyNameIs, args, Some("Slim Shady")).await
}

pub async fn handle_localtime(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(name) = first_arg(args) else {
        return send_usage(ctx, reply, Command::LocalTime).await;
    };

    let person = match ctx.fas.person_by_username(name).await {
        Ok(Some(person)) => person,
        Ok(None) => return reply.say(&messages::user_missing(name)).await,
        Err(e) => {
            log_failure(Command::LocalTime, &e);
            return reply.say(&messages::user_info_failed(name)).await;
        }
    };

    let Some(timezone) = person.timezone.as_deref().filter(|tz| !tz.is_empty()) else {
        return reply.say(&messages::timezone_hidden(name)).await;
    };
    let Ok(tz) = timezone.parse::<Tz>() else {
        return reply.say(&messages::timezone_unknown(name, timezone)).await;
    };

    let time = Utc::now().with_timezone(&tz).format("%H:%M").to_string();
    reply.say(&messages::local_time(name, &time, timezone)).await
}

pub async fn handle_wikilink(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(name) = first_arg(args) else {
        return send_usage(ctx, reply, Command::WikiLink).await;
    };

    let msg = match ctx.fas.person_by_username(name).await {
        Ok(Some(person)) => messages::wikilink(
            &person.username,
            person.human_name.as_deref().unwrap_or_default(),
        ),
        Ok(None) => messages::user_missing(name),
        Err(e) => {
            log_failure(Command::WikiLink, &e);
            messages::user_info_failed(name)
        }
    };
    reply.say(&msg).await
}
