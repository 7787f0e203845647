//! Calendar-period filters for the event list.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::event::Event;

/// Which calendar period, relative to today, the event list is narrowed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PeriodFilter {
    #[default]
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    /// No narrowing.
    All,
}

impl PeriodFilter {
    /// Whether `date` falls in the same calendar period as `today`.
    ///
    /// Weeks are ISO weeks (Monday to Sunday), compared by ISO year and week
    /// number, so the last days of December can share a week with January.
    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        match self {
            PeriodFilter::Today => date == today,
            PeriodFilter::ThisWeek => date.iso_week() == today.iso_week(),
            PeriodFilter::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            PeriodFilter::ThisYear => date.year() == today.year(),
            PeriodFilter::All => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodFilter::Today => "Today",
            PeriodFilter::ThisWeek => "This Week",
            PeriodFilter::ThisMonth => "This Month",
            PeriodFilter::ThisYear => "This Year",
            PeriodFilter::All => "All",
        }
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PeriodFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "today" | "day" => Ok(PeriodFilter::Today),
            "week" | "this week" => Ok(PeriodFilter::ThisWeek),
            "month" | "this month" => Ok(PeriodFilter::ThisMonth),
            "year" | "this year" => Ok(PeriodFilter::ThisYear),
            "all" => Ok(PeriodFilter::All),
            _ => Err(format!(
                "Unknown filter '{}'. Expected one of: today, week, month, year, all",
                s
            )),
        }
    }
}

/// Events whose start date falls in the filter's period, in stored order.
pub fn filter_events<'a>(events: &'a [Event], filter: PeriodFilter, today: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| filter.contains(today, event.start_date))
        .collect()
}
