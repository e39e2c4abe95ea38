//! # Meeting Commands
//!
//! Handles `.nextmeeting`, `.nextmeetings`, `.pushduty` and `.vacation`, all backed by fedocal.

use super::{Command, first_arg, send_usage};
use crate::application::context::BotContext;
use crate::application::meetings;
use crate::application::reply::Reply;
use crate::domain::error::ServiceResult;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Meeting;
use crate::infrastructure::fedocal::MeetingQuery;
use crate::strings::messages;
use anyhow::Result;
use chrono::{DateTime, Utc};

const PUSH_DUTY_CALENDAR: &str = "release-engineering";
const VACATION_CALENDAR: &str = "vacation";

fn log_failure(command: Command, err: &crate::domain::error::ServiceError) {
    tracing::warn!(
        "{}",
        crate::strings::logs::command_failed(command.name(), &err.to_string())
    );
}

async fn upcoming(
    ctx: &BotContext,
    location: String,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<(DateTime<Utc>, Meeting)>> {
    let found = ctx.fedocal.meetings(&MeetingQuery::Location(location)).await?;
    Ok(meetings::future_meetings(found, now))
}

fn location_url(ctx: &BotContext, channel: &str) -> Result<String> {
    let mut url = crate::infrastructure::http::endpoint(ctx.fedocal.base_url(), "location")?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("calendar URL cannot hold a path"))?
        .push(&meetings::location_for(channel, &ctx.config.meetings.network))
        .push("");
    Ok(url.to_string())
}

pub async fn handle_nextmeeting(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    args: &str,
) -> Result<()> {
    let Some(raw) = first_arg(args) else {
        return send_usage(ctx, reply, Command::NextMeeting).await;
    };
    let channel = meetings::channel_name(raw);
    let location = meetings::location_for(channel, &ctx.config.meetings.network);
    let now = Utc::now();

    let found = match upcoming(ctx, location, now).await {
        Ok(found) => found,
        Err(e) => {
            log_failure(Command::NextMeeting, &e);
            return reply.say(messages::CALENDAR_FAILED).await;
        }
    };

    if found.is_empty() {
        return reply.say(&messages::no_meetings_for(channel)).await;
    }

    for (start, meeting) in found.iter().take(ctx.config.meetings.next_meeting_limit) {
        reply
            .say(&messages::meeting_in(
                channel,
                &meeting.meeting_name,
                &meetings::humanize(*start, now),
            ))
            .await?;
    }
    reply.say(&messages::link(&location_url(ctx, channel)?)).await
}

pub async fn handle_nextmeetings(ctx: &BotContext, reply: &Reply<'_, impl ChatProvider>) -> Result<()> {
    reply.say(messages::LOOKING_UP_CHANNELS).await?;
    reply.typing(true).await;

    let locations = match ctx.fedocal.locations().await {
        Ok(locations) => locations,
        Err(e) => {
            reply.typing(false).await;
            log_failure(Command::NextMeetings, &e);
            return reply.say(messages::CALENDAR_FAILED).await;
        }
    };

    let now = Utc::now();
    let network = &ctx.config.meetings.network;
    let mut found: Vec<(DateTime<Utc>, Meeting, String)> = Vec::new();
    for location in locations.into_iter().filter(|l| l.contains(network.as_str())) {
        match upcoming(ctx, location.clone(), now).await {
            Ok(here) => found.extend(here.into_iter().map(|(start, m)| (start, m, location.clone()))),
            Err(e) => tracing::warn!("Skipping calendar location {}: {}", location, e),
        }
    }
    found.sort_by_key(|(start, _, _)| *start);
    reply.typing(false).await;

    if found.is_empty() {
        return reply.say(messages::NO_MEETINGS_AT_ALL).await;
    }

    for (start, meeting, location) in found.iter().take(ctx.config.meetings.next_meetings_limit) {
        let place = meeting.meeting_location.as_deref().unwrap_or(location);
        reply
            .say(&messages::meeting_in(
                meetings::channel_name(place),
                &meeting.meeting_name,
                &meetings::humanize(*start, now),
            ))
            .await?;
    }
    Ok(())
}

/// Meetings of `calendar` running right now, or `None` when fedocal failed.
async fn happening_now(ctx: &BotContext, command: Command, calendar: &str) -> Option<Vec<Meeting>> {
    match ctx
        .fedocal
        .meetings(&MeetingQuery::Calendar(calendar.to_string()))
        .await
    {
        Ok(found) => Some(meetings::current_meetings(found, Utc::now())),
        Err(e) => {
            log_failure(command, &e);
            None
        }
    }
}

pub async fn handle_pushduty(ctx: &BotContext, reply: &Reply<'_, impl ChatProvider>) -> Result<()> {
    let Some(current) = happening_now(ctx, Command::PushDuty, PUSH_DUTY_CALENDAR).await else {
        return reply.say(messages::CALENDAR_FAILED).await;
    };

    let people: Vec<&str> = current.iter().map(|m| m.meeting_name.as_str()).collect();
    if people.is_empty() {
        reply.say(messages::NOBODY_ON_PUSH_DUTY).await?;
    } else {
        reply.say(&messages::on_push_duty(&people.join(", "))).await?;
    }
    let url = format!("{}/{}/", ctx.fedocal.base_url(), PUSH_DUTY_CALENDAR);
    reply.say(&messages::link(&url)).await
}

pub async fn handle_vacation(ctx: &BotContext, reply: &Reply<'_, impl ChatProvider>) -> Result<()> {
    let Some(current) = happening_now(ctx, Command::Vacation, VACATION_CALENDAR).await else {
        return reply.say(messages::CALENDAR_FAILED).await;
    };

    let people: Vec<&str> = current
        .iter()
        .flat_map(|m| m.meeting_manager.iter().map(String::as_str))
        .collect();
    if people.is_empty() {
        reply.say(messages::NOBODY_ON_VACATION).await?;
    } else {
        reply.say(&messages::on_vacation(&people.join(", "))).await?;
    }
    let url = format!("{}/{}/", ctx.fedocal.base_url(), VACATION_CALENDAR);
    reply.say(&messages::link(&url)).await
}
