//! # Command Handlers
//!
//! Contains the handler functions for each supported command.
//! These handlers are invoked by the Router.

pub mod badges;
pub mod fas;
pub mod help;
pub mod meetings;
pub mod packages;
pub mod stats;

use crate::application::context::BotContext;
use crate::application::reply::Reply;
use crate::domain::traits::ChatProvider;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Admins,
    Badges,
    Branches,
    Fas,
    FasInfo,
    Group,
    HelloMyNameIs,
    HiMyNameIs,
    Help,
    LocalTime,
    Members,
    NextMeeting,
    NextMeetings,
    PushDuty,
    Quote,
    Sponsors,
    Vacation,
    What,
    WhoOwns,
    WikiLink,
}

impl Command {
    pub const ALL: [Command; 20] = [
        Command::Admins,
        Command::Badges,
        Command::Branches,
        Command::Fas,
        Command::FasInfo,
        Command::Group,
        Command::HelloMyNameIs,
        Command::HiMyNameIs,
        Command::Help,
        Command::LocalTime,
        Command::Members,
        Command::NextMeeting,
        Command::NextMeetings,
        Command::PushDuty,
        Command::Quote,
        Command::Sponsors,
        Command::Vacation,
        Command::What,
        Command::WhoOwns,
        Command::WikiLink,
    ];

    /// Command names are matched case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Admins => "admins",
            Self::Badges => "badges",
            Self::Branches => "branches",
            Self::Fas => "fas",
            Self::FasInfo => "fasinfo",
            Self::Group => "group",
            Self::HelloMyNameIs => "hellomynameis",
            Self::HiMyNameIs => "himynameis",
            Self::Help => "help",
            Self::LocalTime => "localtime",
            Self::Members => "members",
            Self::NextMeeting => "nextmeeting",
            Self::NextMeetings => "nextmeetings",
            Self::PushDuty => "pushduty",
            Self::Quote => "quote",
            Self::Sponsors => "sponsors",
            Self::Vacation => "vacation",
            Self::What => "what",
            Self::WhoOwns => "whoowns",
            Self::WikiLink => "wikilink",
        }
    }

    pub fn args(&self) -> &'static str {
        match self {
            Self::Admins | Self::Group | Self::Members | Self::Sponsors => "<group name>",
            Self::Badges
            | Self::FasInfo
            | Self::HelloMyNameIs
            | Self::HiMyNameIs
            | Self::LocalTime
            | Self::WikiLink => "<username>",
            Self::Branches | Self::What | Self::WhoOwns => "<package>",
            Self::Fas => "<pattern>",
            Self::NextMeeting => "<channel>",
            Self::Quote => "<SYMBOL> [daily|weekly|monthly|quarterly]",
            Self::Help | Self::NextMeetings | Self::PushDuty | Self::Vacation => "",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Admins => "list the administrators of a group",
            Self::Badges => "count the badges a user has unlocked",
            Self::Branches => "list the branches a package is in",
            Self::Fas => "search accounts by IRC nick",
            Self::FasInfo => "show account details and group memberships",
            Self::Group => "show the display name of a group",
            Self::HelloMyNameIs => "introduce yourself, e.g. during a meeting roll call",
            Self::HiMyNameIs => "introduce yourself, the other way",
            Self::Help => "show this list",
            Self::LocalTime => "show the current local time of a user",
            Self::Members => "list the members of a group",
            Self::NextMeeting => "show the next meetings in a channel",
            Self::NextMeetings => "show the next meetings in any channel",
            Self::PushDuty => "show who is on release engineering push duty",
            Self::Quote => "message bus activity of a category",
            Self::Sponsors => "list the sponsors of a group",
            Self::Vacation => "show who is on vacation",
            Self::What => "describe a package",
            Self::WhoOwns => "show the owners of a package",
            Self::WikiLink => "MediaWiki link to a user's wiki page",
        }
    }

    pub fn usage(&self) -> String {
        if self.args().is_empty() {
            self.name().to_string()
        } else {
            format!("{} {}", self.name(), self.args())
        }
    }
}

/// First whitespace separated argument, if any.
pub fn first_arg(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

pub async fn send_usage(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    command: Command,
) -> Result<()> {
    reply
        .say(&crate::strings::messages::usage(
            ctx.prefix(),
            command.name(),
            command.args(),
        ))
        .await
}

/// Runs `command` with the already split argument string.
pub async fn dispatch(
    ctx: &BotContext,
    reply: &Reply<'_, impl ChatProvider>,
    command: Command,
    args: &str,
) -> Result<()> {
    match command {
        Command::Admins => fas::handle_admins(ctx, reply, args).await,
        Command::Sponsors => fas::handle_sponsors(ctx, reply, args).await,
        Command::Members => fas::handle_members(ctx, reply, args).await,
        Command::Group => fas::handle_group(ctx, reply, args).await,
        Command::Fas => fas::handle_fas(ctx, reply, args).await,
        Command::FasInfo => fas::handle_fasinfo(ctx, reply, args).await,
        Command::HelloMyNameIs => fas::handle_hellomynameis(ctx, reply, args).await,
        Command::HiMyNameIs => fas::handle_himynameis(ctx, reply, args).await,
        Command::LocalTime => fas::handle_localtime(ctx, reply, args).await,
        Command::WikiLink => fas::handle_wikilink(ctx, reply, args).await,
        Command::Branches => packages::handle_branches(ctx, reply, args).await,
        Command::What => packages::handle_what(ctx, reply, args).await,
        Command::WhoOwns => packages::handle_whoowns(ctx, reply, args).await,
        Command::NextMeeting => meetings::handle_nextmeeting(ctx, reply, args).await,
        Command::NextMeetings => meetings::handle_nextmeetings(ctx, reply).await,
        Command::PushDuty => meetings::handle_pushduty(ctx, reply).await,
        Command::Vacation => meetings::handle_vacation(ctx, reply).await,
        Command::Badges => badges::handle_badges(ctx, reply, args).await,
        Command::Quote => stats::handle_quote(ctx, reply, args).await,
        Command::Help => help::handle_help(ctx, reply).await,
    }
}
