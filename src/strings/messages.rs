//! # Messages
//!
//! Contains constant strings and format functions for user-facing replies.

pub fn addressed(nick: &str, text: &str) -> String {
    format!("{nick}: {text}")
}

pub fn online(prefix: &str) -> String {
    format!("fedbot is online. Try {prefix}help")
}

pub fn usage(prefix: &str, command: &str, args: &str) -> String {
    if args.is_empty() {
        format!("Usage: {prefix}{command}")
    } else {
        format!("Usage: {prefix}{command} {args}")
    }
}

// Groups

pub fn no_group(name: &str) -> String {
    format!("There is no group {name}.")
}

pub fn no_group_quoted(name: &str) -> String {
    format!("There is no group \"{name}\".")
}

pub fn group_info(name: &str, display_name: &str) -> String {
    format!("{name}: {display_name}")
}

pub fn administrators(group: &str, users: &str) -> String {
    format!("Administrators for {group}: {users}")
}

pub fn sponsors(group: &str, users: &str) -> String {
    format!("Sponsors for {group}: {users}")
}

pub fn members(group: &str, users: &str) -> String {
    format!("Members of {group}: {users}")
}

// People

pub const NO_USER_MATCH: &str = "No user matching found";
pub const USER_SEARCH_FAILED: &str = "Error searching for users.";
pub const GROUP_MEMBERSHIPS_FAILED: &str = "Error getting group memberships.";
pub const BLEW_UP: &str = "Something blew up, please try again";
pub const YOU_DONT_EXIST: &str = "Sorry, but you don't exist";
pub const NONE: &str = "None";

pub fn user_match(username: &str, ircnick: &str, email: &str) -> String {
    format!("{username} ({ircnick}) <{email}>")
}

pub fn user_info_failed(name: &str) -> String {
    format!("Error getting info for user: \"{name}\"")
}

pub fn user_missing(name: &str) -> String {
    format!("User \"{name}\" doesn't exist")
}

#[allow(clippy::too_many_arguments)]
pub fn user_details(
    username: &str,
    human_name: &str,
    email: &str,
    creation: &str,
    ircnick: &str,
    timezone: &str,
    locale: &str,
    gpg_keyid: &str,
    status: &str,
) -> String {
    format!(
        "User: {username}, Name: {human_name}, email: {email}, Creation: {creation}, \
         IRC Nick: {ircnick}, Timezone: {timezone}, Locale: {locale}, \
         GPG key ID: {gpg_keyid}, Status: {status}"
    )
}

pub fn unapproved_groups(groups: &str) -> String {
    format!("Unapproved Groups: {groups}")
}

pub fn approved_groups(groups: &str) -> String {
    format!("Approved Groups: {groups}")
}

pub fn hello(username: &str, human_name: &str, email: &str) -> String {
    format!("{username} '{human_name}' <{email}>")
}

pub fn timezone_hidden(name: &str) -> String {
    format!("User \"{name}\" doesn't share their timezone")
}

pub fn timezone_unknown(name: &str, timezone: &str) -> String {
    format!("The timezone of \"{name}\" was unknown: \"{timezone}\"")
}

pub fn local_time(name: &str, time: &str, timezone: &str) -> String {
    format!("The current local time of \"{name}\" is: \"{time}\" (timezone: {timezone})")
}

pub fn wikilink(username: &str, human_name: &str) -> String {
    format!("[[User:{username}|{human_name}]]")
}

// Packages

pub const NO_SUCH_PACKAGE: &str = "No such package exists.";

pub fn package_summary(package: &str, summary: &str) -> String {
    format!("{package}: {summary}")
}

pub fn owners(main: &str, others: &str) -> String {
    format!("{main} ({others})")
}

pub fn owner_in(owner: &str, product: &str) -> String {
    format!("{owner} in {product}")
}

// Badges

pub fn badges_unlocked(name: &str, count: usize, url: &str) -> String {
    format!("{name} has unlocked {count} Fedora Badges:  {url}")
}

pub fn badges_failed(name: &str) -> String {
    format!("Error getting badges for user: \"{name}\"")
}

// Meetings

pub const CALENDAR_FAILED: &str = "Error querying the calendar.";
pub const LOOKING_UP_CHANNELS: &str = "One moment, please...  Looking up the channel list.";
pub const NO_MEETINGS_AT_ALL: &str = "There are no meetings scheduled at all.";
pub const NOBODY_ON_PUSH_DUTY: &str = "Nobody is listed as being on push duty right now...";
pub const NOBODY_ON_VACATION: &str = "Nobody is listed as being on vacation right now...";

pub fn no_meetings_for(channel: &str) -> String {
    format!("There are no meetings scheduled for #{channel}.")
}

pub fn meeting_in(channel: &str, name: &str, when: &str) -> String {
    format!("In #{channel} is {name} (starting {when})")
}

pub fn link(url: &str) -> String {
    format!("- {url}")
}

pub fn on_push_duty(people: &str) -> String {
    format!("The following people are on push duty: {people}")
}

pub fn on_vacation(people: &str) -> String {
    format!("The following people are on vacation: {people}")
}

// Statistics

pub const DATAGREPPER_FAILED: &str = "Error querying datagrepper.";

pub fn no_such_symbol(symbol: &str, choices: &str) -> String {
    format!("No such symbol '{symbol}'.  Try one of {choices}")
}

pub fn no_such_frame(frame: &str, choices: &str) -> String {
    format!("No such timeframe '{frame}'.  Try one of {choices}")
}
