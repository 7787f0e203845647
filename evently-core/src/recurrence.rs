//! Occurrence expansion for recurring events.
//!
//! Walks a cursor forward from the start date, one recurrence step at a time,
//! stopping at the inclusive end date or after `limit` occurrences.

use chrono::{Duration, Months, NaiveDate};

use crate::event::{DATE_FORMAT, Event, Recurrence};

/// Number of upcoming occurrences shown for an event.
pub const OCCURRENCE_LIMIT: usize = 5;

/// Upper bound on how many occurrences are ever computed for one event.
pub const MAX_OCCURRENCE_LIMIT: usize = 1000;

/// Compute up to `limit` occurrence dates, starting with `start` itself.
/// `limit` is capped at [`MAX_OCCURRENCE_LIMIT`].
///
/// Month and year steps advance the running cursor and clamp to the last day
/// of shorter months, so Jan 31 is followed by Feb 28 and then Mar 28.
/// A `Single` event occurs once. Nothing is returned when `start` is already
/// past `end`.
pub fn next_occurrences(
    start: NaiveDate,
    end: Option<NaiveDate>,
    recurrence: Recurrence,
    limit: usize,
) -> Vec<NaiveDate> {
    let limit = limit.min(MAX_OCCURRENCE_LIMIT);
    let mut occurrences = Vec::new();
    let mut cursor = Some(start);

    while let Some(date) = cursor {
        if occurrences.len() >= limit || end.is_some_and(|end| date > end) {
            break;
        }
        occurrences.push(date);
        cursor = advance(date, recurrence);
    }

    occurrences
}

/// The date one recurrence step after `date`, or `None` when the event does
/// not repeat or the step leaves chrono's representable range.
fn advance(date: NaiveDate, recurrence: Recurrence) -> Option<NaiveDate> {
    match recurrence {
        Recurrence::Single => None,
        Recurrence::Daily => date.checked_add_signed(Duration::days(1)),
        Recurrence::Weekly => date.checked_add_signed(Duration::weeks(1)),
        Recurrence::Monthly => date.checked_add_months(Months::new(1)),
        Recurrence::Yearly => date.checked_add_months(Months::new(12)),
    }
}

/// Format occurrence dates as `YYYY-MM-DD` strings.
pub fn format_occurrences(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect()
}

impl Event {
    /// Upcoming occurrences of this event, starting at its start date.
    pub fn next_occurrences(&self, limit: usize) -> Vec<NaiveDate> {
        next_occurrences(self.start_date, self.end_date, self.recurrence, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_without_end_yields_five_consecutive_days() {
        let dates = next_occurrences(date(2026, 3, 20), None, Recurrence::Daily, OCCURRENCE_LIMIT);
        assert_eq!(dates.len(), 5);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(dates[0], date(2026, 3, 20));
        assert_eq!(dates[4], date(2026, 3, 24));
    }

    #[test]
    fn weekly_with_end_equal_to_start_yields_only_start() {
        let start = date(2026, 3, 20);
        let dates = next_occurrences(start, Some(start), Recurrence::Weekly, OCCURRENCE_LIMIT);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn single_occurs_exactly_once() {
        let start = date(2026, 3, 20);
        let dates = next_occurrences(start, None, Recurrence::Single, OCCURRENCE_LIMIT);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn end_before_start_yields_nothing() {
        let dates = next_occurrences(
            date(2026, 3, 20),
            Some(date(2026, 3, 19)),
            Recurrence::Daily,
            OCCURRENCE_LIMIT,
        );
        assert!(dates.is_empty());
    }

    #[test]
    fn end_date_is_inclusive() {
        let dates = next_occurrences(
            date(2026, 3, 1),
            Some(date(2026, 3, 15)),
            Recurrence::Weekly,
            OCCURRENCE_LIMIT,
        );
        assert_eq!(
            dates,
            vec![date(2026, 3, 1), date(2026, 3, 8), date(2026, 3, 15)]
        );
    }

    #[test]
    fn monthly_clamps_and_keeps_clamped_day() {
        let dates = next_occurrences(date(2026, 1, 31), None, Recurrence::Monthly, 4);
        assert_eq!(
            dates,
            vec![
                date(2026, 1, 31),
                date(2026, 2, 28),
                date(2026, 3, 28),
                date(2026, 4, 28),
            ]
        );
    }

    #[test]
    fn yearly_from_leap_day() {
        let dates = next_occurrences(date(2024, 2, 29), None, Recurrence::Yearly, 3);
        assert_eq!(
            dates,
            vec![date(2024, 2, 29), date(2025, 2, 28), date(2026, 2, 28)]
        );
    }

    #[test]
    fn limit_caps_output() {
        let dates = next_occurrences(date(2026, 1, 1), None, Recurrence::Daily, 2);
        assert_eq!(dates.len(), 2);
        assert!(next_occurrences(date(2026, 1, 1), None, Recurrence::Daily, 0).is_empty());
    }

    #[test]
    fn huge_limit_is_capped() {
        let dates = next_occurrences(date(2026, 1, 1), None, Recurrence::Daily, usize::MAX);
        assert_eq!(dates.len(), MAX_OCCURRENCE_LIMIT);
        assert_eq!(dates[MAX_OCCURRENCE_LIMIT - 1], date(2028, 9, 26));
    }

    #[test]
    fn stops_at_end_of_representable_range() {
        let dates = next_occurrences(NaiveDate::MAX, None, Recurrence::Daily, OCCURRENCE_LIMIT);
        assert_eq!(dates, vec![NaiveDate::MAX]);
    }

    #[test]
    fn formats_as_iso_dates() {
        let dates = next_occurrences(date(2026, 12, 30), None, Recurrence::Daily, 3);
        assert_eq!(
            format_occurrences(&dates),
            vec!["2026-12-30", "2026-12-31", "2027-01-01"]
        );
    }
}
