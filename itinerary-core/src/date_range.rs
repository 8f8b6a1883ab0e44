//! Inclusive date spans and date argument parsing.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::{ItineraryError, ItineraryResult};

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ItineraryResult<Self> {
        if start > end {
            return Err(ItineraryError::InvalidRange(format!(
                "{} is after {}",
                start, end
            )));
        }
        Ok(DateSpan { start, end })
    }

    /// A single-day span.
    pub fn day(date: NaiveDate) -> Self {
        DateSpan {
            start: date,
            end: date,
        }
    }

    /// Both boundary days count.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Smallest span covering both `self` and `date`.
    pub fn extend(self, date: NaiveDate) -> Self {
        DateSpan {
            start: self.start.min(date),
            end: self.end.max(date),
        }
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Sunday-first calendar weeks from the Sunday on or before `start` to the
    /// Saturday on or after `end`. Days past the ends of the calendar clamp to
    /// `NaiveDate::MIN` and `NaiveDate::MAX`.
    pub fn weeks(&self) -> Vec<[NaiveDate; 7]> {
        let back = Days::new(self.start.weekday().num_days_from_sunday().into());
        let first_sunday = self.start.checked_sub_days(back).unwrap_or(NaiveDate::MIN);

        let mut weeks = Vec::new();
        let mut next = Some(first_sunday);
        while let Some(sunday) = next
            && sunday <= self.end
        {
            weeks.push(std::array::from_fn(|i| {
                sunday.checked_add_days(Days::new(i as u64)).unwrap_or(NaiveDate::MAX)
            }));
            next = sunday.checked_add_days(Days::new(7));
        }
        weeks
    }
}

/// Parse a date argument: `YYYY-MM-DD`, `today` or `tomorrow`.
pub fn parse_date(s: &str) -> ItineraryResult<NaiveDate> {
    let today = Local::now().date_naive();
    parse_date_relative_to(s, today)
}

fn parse_date_relative_to(s: &str, today: NaiveDate) -> ItineraryResult<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .succ_opt()
            .ok_or_else(|| ItineraryError::invalid("date", "tomorrow is past the last supported date")),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| {
            ItineraryError::invalid(
                "date",
                format!("invalid date format '{}'. Expected YYYY-MM-DD", s.trim()),
            )
        }),
    }
}
