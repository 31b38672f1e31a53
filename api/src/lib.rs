pub mod cache;
pub mod client;
pub mod espn;
pub mod fetcher;
pub mod projector;
pub mod summary;
pub mod weeks;

mod error;

pub use error::{Error, Result};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// Domain types: flat rows derived from the ESPN scoreboard
// ---------------------------------------------------------------------------

/// A regular-season week number.
///
/// Construction never validates the range: a selector like `"22"` still
/// resolves to `Week(22)` and the remote decides what that means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(u32);

impl Week {
    pub const REGULAR_SEASON: RangeInclusive<u32> = 1..=17;

    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u32 {
        self.0
    }

    pub fn is_regular_season(self) -> bool {
        Self::REGULAR_SEASON.contains(&self.0)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Week {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// A home/away pair taken from ESPN's competitor list.
///
/// ESPN lists the home side first. That order is an upstream convention, not
/// something checked against the competitors' `homeAway` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeAway<T> {
    pub home: T,
    pub away: T,
}

impl<T> HomeAway<T> {
    /// Position 0 is home, position 1 is away. Anything past the second entry
    /// is ignored; fewer than two entries yields `None`.
    pub fn from_positional<I: IntoIterator<Item = T>>(items: I) -> Option<Self> {
        let mut items = items.into_iter();
        let home = items.next()?;
        let away = items.next()?;
        Some(Self { home, away })
    }
}

/// One game, flattened out of a week's scoreboard.
///
/// `attendance` and the scores are kept as raw JSON values so they serialize
/// back exactly as ESPN sent them (ESPN sends scores as strings).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub game_id: String,
    pub week: u32,
    pub date: String,
    pub name: String,
    pub attendance: Value,
    pub home: String,
    pub away: String,
    pub win: Option<String>,
    pub home_score: Value,
    pub away_score: Value,
    pub game_over: bool,
}

impl GameRecord {
    /// Kickoff time parsed from `date`.
    ///
    /// ESPN scoreboard dates omit seconds (`2023-09-08T00:20Z`), so full
    /// RFC 3339 is tried first and the short form second.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%MZ")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }
}
