//! Weekday model and lookahead arithmetic
//!
//! The canonical week starts on Sunday. Retention deletion walks this cycle
//! forward from the run day.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of distinct weekdays; lookahead past this only repeats days
pub const DAYS_IN_WEEK: usize = 7;

/// A day of the week, ordered Sunday through Saturday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All weekdays in canonical order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Position in the canonical week (Sunday = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Weekday at a position in the canonical week, wrapping past Saturday
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_IN_WEEK]
    }

    /// Weekday a calendar date falls on
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_index(date.weekday().num_days_from_sunday() as usize)
    }

    /// Full English name, as used in configuration keys
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordered list of the `count` weekdays following `start`
///
/// The start day itself is not included unless the count wraps all the way
/// around the week.
pub fn get_next_days(start: DayOfWeek, count: usize) -> Vec<DayOfWeek> {
    let start_index = start.index();
    (1..=count)
        .map(|offset| DayOfWeek::from_index(start_index + offset))
        .collect()
}
