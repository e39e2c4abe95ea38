//! # Message Statistics
//!
//! Backs the `quote` command: a stock-ticker style view of message-bus activity.
//! Each category gets a three letter symbol; the activity of the current time frame is
//! compared to the previous one and drawn as a sparkline.

use crate::domain::error::ServiceResult;
use crate::infrastructure::datagrepper::DatagrepperClient;
use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use std::collections::BTreeMap;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Message-bus categories published by Fedora infrastructure.
pub const CATEGORIES: &[&str] = &[
    "ansible", "anitya", "announce", "askbot", "bodhi", "buildsys", "compose", "copr",
    "fas", "fedbadges", "fedimg", "fedocal", "fedoratagger", "fmn", "git", "github",
    "hotness", "jenkins", "kerneltest", "koschei", "logger", "mailman", "meetbot",
    "mirrormanager", "nuancier", "pagure", "pkgdb", "planet", "summershum", "taskotron",
    "trac", "unhandled", "wiki", "zanata",
];

/// Symbols where the first three letters would be ambiguous or misleading.
const OVERRIDES: &[(&str, &str)] = &[
    ("fedoratagger", "TAG"),
    ("fedbadges", "BDG"),
    ("buildsys", "KOJ"),
    ("pkgdb", "PKG"),
    ("meetbot", "MTB"),
    ("planet", "PLN"),
    ("trac", "TRC"),
    ("mailman", "MM3"),
];

/// Not user facing.
const HIDDEN: &[&str] = &["LOG", "UNH", "ANN"];

/// Symbol -> category lookup.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    by_symbol: BTreeMap<String, String>,
}

impl SymbolTable {
    pub fn standard() -> Self {
        Self::from_categories(CATEGORIES)
    }

    /// On symbol collisions the alphabetically last category wins.
    pub fn from_categories(categories: &[&str]) -> Self {
        let mut by_category: BTreeMap<String, String> = categories
            .iter()
            .map(|name| {
                let symbol: String = name.chars().take(3).collect::<String>().to_uppercase();
                (name.to_lowercase(), symbol)
            })
            .collect();
        for (name, symbol) in OVERRIDES {
            by_category.insert(name.to_string(), symbol.to_string());
        }

        let mut by_symbol: BTreeMap<String, String> = by_category
            .into_iter()
            .map(|(name, symbol)| (symbol, name))
            .collect();
        for hidden in HIDDEN {
            by_symbol.remove(*hidden);
        }
        Self { by_symbol }
    }

    pub fn category(&self, symbol: &str) -> Option<&str> {
        self.by_symbol.get(symbol).map(String::as_str)
    }

    /// Every known symbol, sorted, comma separated.
    pub fn listing(&self) -> String {
        self.by_symbol.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Frame {
    pub const ALL: [Frame; 4] = [Frame::Daily, Frame::Weekly, Frame::Monthly, Frame::Quarterly];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }

    pub fn span(&self) -> Duration {
        match self {
            Self::Daily => Duration::days(1),
            Self::Weekly => Duration::days(7),
            Self::Monthly => Duration::days(30),
            Self::Quarterly => Duration::days(91),
        }
    }

    /// The period the current frame is compared against.
    pub fn previous_phrase(&self) -> &'static str {
        match self {
            Self::Daily => "yesterday",
            Self::Weekly => "the week preceding this one",
            Self::Monthly => "the month preceding this one",
            Self::Quarterly => "the 3 months preceding these past three months",
        }
    }

    /// The period the sparkline covers.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Daily => "24 hours",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::Quarterly => "3 months",
        }
    }

    pub fn listing() -> String {
        let mut names: Vec<&str> = Self::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

/// Consecutive windows of width `(stop - start) / steps` covering `[start, stop]`.
pub fn daterange(
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
    steps: u32,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let Ok(steps) = i32::try_from(steps) else {
        return Vec::new();
    };
    if steps == 0 {
        return Vec::new();
    }
    let delta = (stop - start) / steps;
    if delta <= Duration::zero() {
        return Vec::new();
    }

    let mut windows = Vec::with_capacity(steps as usize);
    let mut current = start;
    while current + delta <= stop {
        windows.push((current, current + delta));
        current += delta;
    }
    windows
}

pub fn sparkline(values: &[u64]) -> String {
    let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) else {
        return String::new();
    };
    let (min, max) = (*min as f64, *max as f64);
    let extent = max - min;
    let top = (BARS.len() - 1) as f64;

    values
        .iter()
        .map(|&v| {
            if extent == 0.0 {
                BARS[0]
            } else {
                let index = ((v as f64 - min) / extent * top) as usize;
                BARS[index.min(BARS.len() - 1)]
            }
        })
        .collect()
}

/// Percentage change from `previous` to `current`.
pub fn percent_change(previous: u64, current: u64) -> f64 {
    match (previous, current) {
        (0, 0) => 0.0,
        (0, _) => f64::INFINITY,
        (_, 0) => -100.0,
        (p, c) => (c as f64 / p as f64 - 1.0) * 100.0,
    }
}

#[derive(Debug, Clone)]
pub struct QuoteReport {
    pub symbol: String,
    pub category: String,
    pub frame: Frame,
    pub previous: u64,
    pub current: u64,
    pub buckets: Vec<u64>,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub resolution: u32,
}

impl QuoteReport {
    pub fn percent(&self) -> f64 {
        percent_change(self.previous, self.current)
    }

    /// Ticker line, sparkline, and x-axis ticks.
    pub fn lines(&self) -> Vec<String> {
        let percent = self.percent();
        let sign = if percent >= 0.0 { '+' } else { '-' };
        let ticker = format!(
            "{}, {} {}{:.2}% over {}",
            self.symbol,
            self.category,
            sign,
            percent.abs(),
            self.frame.previous_phrase()
        );

        let graph = format!(
            "     {}  ⤆ over {}",
            sparkline(&self.buckets),
            self.frame.phrase()
        );

        let t1 = self.window_start.format("%H:%M UTC %m/%d").to_string();
        let t2 = self.window_end.format("%H:%M UTC %m/%d").to_string();
        let padding = " ".repeat((self.resolution as usize).saturating_sub(t1.chars().count() + 3));
        let axis = format!("     ↑ {t1}{padding}↑ {t2}");

        vec![ticker, graph, axis]
    }
}

/// Fetches every bucket plus both whole-frame totals concurrently.
pub async fn fetch_quote(
    datagrepper: &DatagrepperClient,
    symbol: &str,
    category: &str,
    frame: Frame,
    resolution: u32,
    now: DateTime<Utc>,
) -> ServiceResult<QuoteReport> {
    let t2 = now;
    let t1 = t2 - frame.span();
    let t0 = t1 - frame.span();

    let mut windows = daterange(t1, t2, resolution);
    windows.push((t0, t1));
    windows.push((t1, t2));

    let results = join_all(
        windows
            .iter()
            .map(|(start, end)| datagrepper.count(*start, *end, category)),
    )
    .await;
    let mut buckets = results.into_iter().collect::<ServiceResult<Vec<u64>>>()?;
    let totals = buckets.split_off(buckets.len() - 2);

    Ok(QuoteReport {
        symbol: symbol.to_string(),
        category: category.to_string(),
        frame,
        previous: totals[0],
        current: totals[1],
        buckets,
        window_start: t1,
        window_end: t2,
        resolution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_symbol_defaults_and_overrides() {
        let table = SymbolTable::standard();
        assert_eq!(table.category("BOD"), Some("bodhi"));
        assert_eq!(table.category("WIK"), Some("wiki"));
        assert_eq!(table.category("TAG"), Some("fedoratagger"));
        assert_eq!(table.category("KOJ"), Some("buildsys"));
        assert_eq!(table.category("MM3"), Some("mailman"));
        assert_eq!(table.category("BUI"), None);
    }

    #[test]
    fn test_hidden_symbols_removed() {
        let table = SymbolTable::standard();
        assert_eq!(table.category("LOG"), None);
        assert_eq!(table.category("UNH"), None);
        assert_eq!(table.category("ANN"), None);
        assert!(!table.listing().contains("LOG"));
    }

    #[test]
    fn test_collision_last_category_wins() {
        let table = SymbolTable::from_categories(&["git", "github", "fedimg", "fedocal"]);
        assert_eq!(table.category("GIT"), Some("github"));
        assert_eq!(table.category("FED"), Some("fedocal"));
    }

    #[test]
    fn test_listing_sorted() {
        let table = SymbolTable::from_categories(&["wiki", "bodhi", "copr"]);
        assert!(table.listing().starts_with("BDG, BOD, COP"));
    }

    #[test]
    fn test_frames() {
        assert_eq!(Frame::from_name("weekly"), Some(Frame::Weekly));
        assert_eq!(Frame::from_name("yearly"), None);
        assert_eq!(Frame::Quarterly.span(), Duration::days(91));
        assert_eq!(Frame::listing(), "daily, monthly, quarterly, weekly");
    }

    #[test]
    fn test_daterange_even_split() {
        let start = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap();
        let stop = start + Duration::days(1);
        let windows = daterange(start, stop, 50);
        assert_eq!(windows.len(), 50);
        assert_eq!(windows[0].0, start);
        assert_eq!(windows[49].1, stop);
        assert!(windows.windows(2).all(|w| w[0].1 == w[1].0));
    }

    #[test]
    fn test_daterange_degenerate() {
        let start = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap();
        assert!(daterange(start, start, 10).is_empty());
        assert!(daterange(start, start + Duration::hours(1), 0).is_empty());
    }

    #[test]
    fn test_sparkline() {
        assert_eq!(sparkline(&[0, 7, 14]), "▁▄█");
        assert_eq!(sparkline(&[3, 3, 3]), "▁▁▁");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(100, 150), 50.0);
        assert_eq!(percent_change(200, 100), -50.0);
        assert_eq!(percent_change(0, 5), f64::INFINITY);
        assert_eq!(percent_change(0, 0), 0.0);
        assert_eq!(percent_change(5, 0), -100.0);
    }

    fn report(previous: u64, current: u64) -> QuoteReport {
        let end = Utc.with_ymd_and_hms(2014, 3, 10, 12, 30, 0).unwrap();
        QuoteReport {
            symbol: "BOD".to_string(),
            category: "bodhi".to_string(),
            frame: Frame::Daily,
            previous,
            current,
            buckets: vec![1, 2, 3, 4],
            window_start: end - Duration::days(1),
            window_end: end,
            resolution: 50,
        }
    }

    #[test]
    fn test_report_lines() {
        let lines = report(100, 125).lines();
        assert_eq!(lines[0], "BOD, bodhi +25.00% over yesterday");
        assert_eq!(lines[1], "     ▁▃▅█  ⤆ over 24 hours");
        let padding = " ".repeat(50 - 15 - 3);
        assert_eq!(lines[2], format!("     ↑ 12:30 UTC 03/09{padding}↑ 12:30 UTC 03/10"));
    }

    #[test]
    fn test_report_infinite_and_drop() {
        assert_eq!(report(0, 3).lines()[0], "BOD, bodhi +inf% over yesterday");
        assert_eq!(report(4, 0).lines()[0], "BOD, bodhi -100.00% over yesterday");
        assert_eq!(report(0, 0).lines()[0], "BOD, bodhi +0.00% over yesterday");
    }
}
