//! # Meeting Helpers
//!
//! Date handling for fedocal entries: which meetings are still ahead, which are
//! happening right now, and how far away a start time is in words.

use crate::domain::types::Meeting;
use chrono::{DateTime, NaiveDateTime, Utc};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse(date: &str, time: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), DATETIME_FORMAT)
        .map(|dt| dt.and_utc())
        .ok()
}

pub fn start_of(meeting: &Meeting) -> Option<DateTime<Utc>> {
    parse(&meeting.meeting_date, &meeting.meeting_time_start)
}

pub fn end_of(meeting: &Meeting) -> Option<DateTime<Utc>> {
    parse(&meeting.meeting_date_end, &meeting.meeting_time_stop)
}

/// Bare channel name: `#fedora-meeting@irc.freenode.net` -> `fedora-meeting`.
pub fn channel_name(channel: &str) -> &str {
    let stripped = channel.trim().trim_start_matches('#');
    stripped.split('@').next().unwrap_or(stripped).trim()
}

/// fedocal location for a channel, e.g. `fedora-meeting@irc.freenode.net`.
pub fn location_for(channel: &str, network: &str) -> String {
    format!("{}@{network}", channel_name(channel))
}

/// Meetings starting strictly after `now`, soonest first.
pub fn future_meetings(meetings: Vec<Meeting>, now: DateTime<Utc>) -> Vec<(DateTime<Utc>, Meeting)> {
    let mut upcoming: Vec<(DateTime<Utc>, Meeting)> = meetings
        .into_iter()
        .filter_map(|meeting| match start_of(&meeting) {
            Some(start) => Some((start, meeting)),
            None => {
                tracing::debug!("Skipping meeting with unparseable date: {}", meeting.meeting_name);
                None
            }
        })
        .filter(|(start, _)| *start > now)
        .collect();
    upcoming.sort_by_key(|(start, _)| *start);
    upcoming
}

/// Meetings for which `start <= now <= end`.
pub fn current_meetings(meetings: Vec<Meeting>, now: DateTime<Utc>) -> Vec<Meeting> {
    meetings
        .into_iter()
        .filter(|meeting| match (start_of(meeting), end_of(meeting)) {
            (Some(start), Some(end)) => start <= now && now <= end,
            _ => false,
        })
        .collect()
}

/// Relative phrase in the style of "in 3 hours" / "2 days ago".
pub fn humanize(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (target - now).num_seconds();
    let secs = delta.abs();

    let amount = match secs {
        0..=9 => return "just now".to_string(),
        10..=44 => "seconds".to_string(),
        45..=89 => "a minute".to_string(),
        90..=2_699 => format!("{} minutes", (secs / 60).max(2)),
        2_700..=5_399 => "an hour".to_string(),
        5_400..=79_199 => format!("{} hours", (secs / 3_600).max(2)),
        79_200..=129_599 => "a day".to_string(),
        129_600..=2_591_999 => format!("{} days", (secs / 86_400).max(2)),
        2_592_000..=3_887_999 => "a month".to_string(),
        3_888_000..=29_807_999 => format!("{} months", (secs / 2_592_000).max(2)),
        29_808_000..=47_260_799 => "a year".to_string(),
        _ => format!("{} years", (secs / 31_536_000).max(2)),
    };

    if delta > 0 {
        format!("in {amount}")
    } else {
        format!("{amount} ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn meeting(name: &str, start: &str, end: &str) -> Meeting {
        let (date, time) = start.split_once(' ').unwrap();
        let (date_end, time_stop) = end.split_once(' ').unwrap();
        Meeting {
            meeting_name: name.to_string(),
            meeting_date: date.to_string(),
            meeting_time_start: time.to_string(),
            meeting_date_end: date_end.to_string(),
            meeting_time_stop: time_stop.to_string(),
            meeting_location: None,
            meeting_manager: Vec::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2014, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_channel_name() {
        assert_eq!(channel_name("#fedora-meeting"), "fedora-meeting");
        assert_eq!(channel_name("fedora-meeting@irc.freenode.net"), "fedora-meeting");
        assert_eq!(channel_name("##fedora-apps"), "fedora-apps");
    }

    #[test]
    fn test_location_for() {
        assert_eq!(location_for("fedora-meeting", "irc.freenode.net"), "fedora-meeting@irc.freenode.net");
        assert_eq!(location_for("#fedora-meeting", "irc.freenode.net"), "fedora-meeting@irc.freenode.net");
        assert_eq!(
            location_for("fedora-meeting@irc.freenode.net", "irc.freenode.net"),
            "fedora-meeting@irc.freenode.net"
        );
        assert_eq!(
            location_for("#fedora-meeting@irc.freenode.net", "irc.freenode.net"),
            "fedora-meeting@irc.freenode.net"
        );
        assert_eq!(location_for("#fedora-apps@oftc", "irc.freenode.net"), "fedora-apps@irc.freenode.net");
    }

    #[test]
    fn test_future_meetings_sorted_and_filtered() {
        let meetings = vec![
            meeting("late", "2014-03-12 15:00:00", "2014-03-12 16:00:00"),
            meeting("past", "2014-03-09 15:00:00", "2014-03-09 16:00:00"),
            meeting("soon", "2014-03-10 13:00:00", "2014-03-10 14:00:00"),
            meeting("broken", "yesterday 15:00", "2014-03-12 16:00:00"),
            meeting("exactly-now", "2014-03-10 12:00:00", "2014-03-10 13:00:00"),
        ];
        let names: Vec<String> = future_meetings(meetings, now())
            .into_iter()
            .map(|(_, m)| m.meeting_name)
            .collect();
        assert_eq!(names, vec!["soon", "late"]);
    }

    #[test]
    fn test_current_meetings_inclusive_bounds() {
        let meetings = vec![
            meeting("running", "2014-03-10 11:00:00", "2014-03-10 13:00:00"),
            meeting("ends-now", "2014-03-03 00:00:00", "2014-03-10 12:00:00"),
            meeting("over", "2014-03-10 09:00:00", "2014-03-10 10:00:00"),
            meeting("future", "2014-03-11 09:00:00", "2014-03-11 10:00:00"),
        ];
        let names: Vec<String> = current_meetings(meetings, now())
            .into_iter()
            .map(|m| m.meeting_name)
            .collect();
        assert_eq!(names, vec!["running", "ends-now"]);
    }

    #[test]
    fn test_humanize_future() {
        let n = now();
        assert_eq!(humanize(n + Duration::seconds(5), n), "just now");
        assert_eq!(humanize(n + Duration::seconds(30), n), "in seconds");
        assert_eq!(humanize(n + Duration::seconds(60), n), "in a minute");
        assert_eq!(humanize(n + Duration::minutes(20), n), "in 20 minutes");
        assert_eq!(humanize(n + Duration::minutes(60), n), "in an hour");
        assert_eq!(humanize(n + Duration::hours(5), n), "in 5 hours");
        assert_eq!(humanize(n + Duration::hours(24), n), "in a day");
        assert_eq!(humanize(n + Duration::days(6), n), "in 6 days");
        assert_eq!(humanize(n + Duration::days(31), n), "in a month");
        assert_eq!(humanize(n + Duration::days(120), n), "in 4 months");
        assert_eq!(humanize(n + Duration::days(400), n), "in a year");
        assert_eq!(humanize(n + Duration::days(1000), n), "in 2 years");
    }

    #[test]
    fn test_humanize_past() {
        let n = now();
        assert_eq!(humanize(n - Duration::hours(3), n), "3 hours ago");
        assert_eq!(humanize(n - Duration::minutes(2), n), "2 minutes ago");
    }
}
