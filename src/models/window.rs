//! Summary windows
//!
//! The date ranges a summary can cover: a single day, the running week
//! (Monday through the anchor day), or a whole calendar month.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date window for expense aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SummaryWindow {
    /// Exactly one calendar day
    Day(NaiveDate),

    /// Monday of the anchor's week through the anchor day, inclusive
    WeekToDate { start: NaiveDate, end: NaiveDate },

    /// A whole calendar month
    Month { year: i32, month: u32 },
}

impl SummaryWindow {
    /// Window covering a single day
    pub fn day(date: NaiveDate) -> Self {
        Self::Day(date)
    }

    /// Window from Monday of `today`'s week through `today`
    pub fn week_to_date(today: NaiveDate) -> Self {
        let days_from_monday = today.weekday().num_days_from_monday() as i64;
        Self::WeekToDate {
            start: today - Duration::days(days_from_monday),
            end: today,
        }
    }

    /// Window covering the calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the start date of this window
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Day(date) => *date,
            Self::WeekToDate { start, .. } => *start,
            Self::Month { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(*year, 1, 1).unwrap()),
        }
    }

    /// Get the end date of this window (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Day(date) => *date,
            Self::WeekToDate { end, .. } => *end,
            Self::Month { year, month } => {
                let next_month = if *month == 12 {
                    NaiveDate::from_ymd_opt(*year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(*year, *month + 1, 1)
                };
                next_month.unwrap() - Duration::days(1)
            }
        }
    }

    /// Check if a date falls within this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Human label for report headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day(_) => "Daily",
            Self::WeekToDate { .. } => "Weekly",
            Self::Month { .. } => "Monthly",
        }
    }
}

impl fmt::Display for SummaryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::WeekToDate { start, end } => write!(
                f,
                "{}..{}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
        }
    }
}
