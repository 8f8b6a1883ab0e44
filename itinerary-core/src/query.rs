//! Trip item queries: which items are relevant to a day, and in what order.
//!
//! Everything here is a pure function over a borrowed slice. Results borrow
//! from the input, so callers can render them without cloning.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::date_range::DateSpan;
use crate::trip_item::{TripDetails, TripItem, TripKind};

/// Inclusive span covering every item's start and end date, or `None` for an
/// empty list.
pub fn date_range(items: &[TripItem]) -> Option<DateSpan> {
    items.iter().fold(None, |span: Option<DateSpan>, item| {
        let span = match span {
            Some(span) => span.extend(item.start_date()),
            None => DateSpan::day(item.start_date()),
        };
        Some(span.extend(item.end_date()))
    })
}

/// Whether `item` should be shown on `date`.
///
/// A flight belongs to its departure day only. A stay belongs to every day
/// from check-in through check-out, both included.
pub fn is_on_date(item: &TripItem, date: NaiveDate) -> bool {
    match &item.details {
        TripDetails::Flight { start, .. } => start.date() == date,
        TripDetails::Stay { start, end, .. } => *start <= date && date <= *end,
    }
}

/// Items overlapping `date`, flights first. Input order is kept within each kind.
pub fn items_on_date(items: &[TripItem], date: NaiveDate) -> Vec<&TripItem> {
    let mut matches: Vec<&TripItem> = items.iter().filter(|item| is_on_date(item, date)).collect();
    matches.sort_by_key(|item| item.kind() != TripKind::Flight);
    matches
}

/// Bucket items by start date. Buckets are chronological; items within a
/// bucket keep their input order.
pub fn group_by_date(items: &[TripItem]) -> BTreeMap<NaiveDate, Vec<&TripItem>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&TripItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.start_date()).or_default().push(item);
    }
    groups
}

/// Day-by-day listing, optionally narrowed to one date.
///
/// With a date, the result is a single `(date, items)` pair, or empty when
/// nothing is on that day. Without one, it is [`group_by_date`] in order.
pub fn filter_by_date(items: &[TripItem], date: Option<NaiveDate>) -> Vec<(NaiveDate, Vec<&TripItem>)> {
    match date {
        Some(date) => {
            let on_date = items_on_date(items, date);
            if on_date.is_empty() {
                Vec::new()
            } else {
                vec![(date, on_date)]
            }
        }
        None => group_by_date(items).into_iter().collect(),
    }
}

/// Stable sort by start. Idempotent.
pub fn sort_chronologically(items: &mut [TripItem]) {
    items.sort_by_key(TripItem::start_key);
}

/// Headline numbers for a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub flights: usize,
    pub stays: usize,
    /// Distinct stay places, in first-seen order
    pub places: Vec<String>,
    pub span: Option<DateSpan>,
}

impl TripSummary {
    /// Days covered by the trip, both ends included. Zero for an empty trip.
    pub fn total_days(&self) -> i64 {
        self.span.map_or(0, |span| span.num_days())
    }
}

pub fn summarize(items: &[TripItem]) -> TripSummary {
    let mut places: Vec<String> = Vec::new();
    for place in items.iter().filter_map(TripItem::place) {
        if !places.iter().any(|p| p == place) {
            places.push(place.to_string());
        }
    }

    TripSummary {
        flights: items.iter().filter(|i| i.kind() == TripKind::Flight).count(),
        stays: items.iter().filter(|i| i.kind() == TripKind::Stay).count(),
        places,
        span: date_range(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn instant(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    fn flight(title: &str, start: &str, end: &str) -> TripItem {
        TripItem::new(
            title,
            TripDetails::Flight {
                start: instant(start),
                end: instant(end),
                from: None,
                to: None,
                airline: None,
                flight_no: None,
            },
        )
    }

    fn stay(title: &str, start: &str, end: &str, place: Option<&str>) -> TripItem {
        TripItem::new(
            title,
            TripDetails::Stay {
                start: date(start),
                end: date(end),
                place: place.map(String::from),
                address: None,
                color: None,
            },
        )
    }

    fn titles(items: &[&TripItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    /// The stay is listed before the flight so ordering has to come from the query.
    fn scenario() -> Vec<TripItem> {
        vec![
            stay("Khlong Toei", "2026-01-19", "2026-01-22", Some("Bangkok")),
            flight("EY610", "2026-01-19T06:20", "2026-01-19T11:15"),
        ]
    }

    #[test]
    fn flight_and_stay_on_first_day_flight_first() {
        let items = scenario();
        assert_eq!(titles(&items_on_date(&items, date("2026-01-19"))), ["EY610", "Khlong Toei"]);
    }

    #[test]
    fn only_stay_mid_stay() {
        let items = scenario();
        assert_eq!(titles(&items_on_date(&items, date("2026-01-21"))), ["Khlong Toei"]);
    }

    #[test]
    fn checkout_day_still_shows_stay() {
        let items = scenario();
        assert_eq!(titles(&items_on_date(&items, date("2026-01-22"))), ["Khlong Toei"]);
    }

    #[test]
    fn overnight_flight_only_on_departure_day() {
        let items = vec![flight("Red-eye", "2026-02-25T21:50", "2026-02-26T04:40")];
        assert_eq!(items_on_date(&items, date("2026-02-25")).len(), 1);
        assert!(items_on_date(&items, date("2026-02-26")).is_empty());
    }

    #[test]
    fn dates_outside_every_item_are_empty() {
        let items = scenario();
        assert!(items_on_date(&items, date("2026-01-18")).is_empty());
        assert!(items_on_date(&items, date("2026-01-23")).is_empty());
    }

    #[test]
    fn every_day_of_a_stay_includes_it_once() {
        let items = scenario();
        let stay_id = items[0].id;
        for day in DateSpan::new(date("2026-01-19"), date("2026-01-22")).unwrap().days() {
            let on_day = items_on_date(&items, day);
            assert_eq!(on_day.iter().filter(|i| i.id == stay_id).count(), 1, "{day}");
        }
    }

    #[test]
    fn date_range_of_empty_list_is_none() {
        assert_eq!(date_range(&[]), None);
    }

    #[test]
    fn date_range_covers_every_item() {
        let items = vec![
            flight("Out", "2026-01-19T06:20", "2026-01-19T11:15"),
            stay("Pai", "2026-01-23", "2026-01-31", Some("Pai")),
            flight("Red-eye", "2026-02-25T21:50", "2026-02-26T04:40"),
        ];
        let span = date_range(&items).unwrap();

        assert!(span.start <= span.end);
        assert_eq!(span.start, date("2026-01-19"));
        assert_eq!(span.end, date("2026-02-26"));
        for item in &items {
            assert!(span.contains(item.start_date()) && span.contains(item.end_date()));
        }
    }

    #[test]
    fn group_by_date_partitions_input() {
        let items = vec![
            flight("B", "2026-01-22T13:55", "2026-01-22T15:05"),
            stay("A", "2026-01-19", "2026-01-22", None),
            stay("C", "2026-01-22", "2026-01-23", None),
            flight("D", "2026-01-19T06:20", "2026-01-19T11:15"),
        ];
        let groups = group_by_date(&items);

        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, [date("2026-01-19"), date("2026-01-22")]);
        assert_eq!(titles(&groups[&date("2026-01-19")]), ["A", "D"]);
        assert_eq!(titles(&groups[&date("2026-01-22")]), ["B", "C"]);

        let mut seen: Vec<_> = groups.values().flatten().map(|i| i.id).collect();
        let mut expected: Vec<_> = items.iter().map(|i| i.id).collect();
        seen.sort();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn filter_by_date_without_date_is_full_grouping() {
        let items = scenario();
        let filtered = filter_by_date(&items, None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0, date("2026-01-19"));
        assert_eq!(titles(&filtered[0].1), ["Khlong Toei", "EY610"]);
    }

    #[test]
    fn filter_by_date_with_date_is_single_group() {
        let items = scenario();
        let filtered = filter_by_date(&items, Some(date("2026-01-21")));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0, date("2026-01-21"));
        assert_eq!(titles(&filtered[0].1), ["Khlong Toei"]);
    }

    #[test]
    fn filter_by_date_without_matches_is_empty() {
        let items = scenario();
        assert!(filter_by_date(&items, Some(date("2026-03-01"))).is_empty());
    }

    #[test]
    fn inserted_item_sorts_between_neighbours() {
        let mut items = vec![
            flight("19th", "2026-01-19T06:20", "2026-01-19T11:15"),
            stay("23rd", "2026-01-23", "2026-01-31", None),
        ];
        items.push(stay("20th", "2026-01-20", "2026-01-21", None));
        sort_chronologically(&mut items);

        let order: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(order, ["19th", "20th", "23rd"]);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let mut items = vec![
            stay("second", "2026-01-22", "2026-01-23", None),
            stay("tie-a", "2026-01-19", "2026-01-22", None),
            stay("tie-b", "2026-01-19", "2026-01-20", None),
            flight("first-flight", "2026-01-19T06:20", "2026-01-19T11:15"),
        ];
        sort_chronologically(&mut items);
        let once: Vec<_> = items.iter().map(|i| i.id).collect();
        sort_chronologically(&mut items);
        let twice: Vec<_> = items.iter().map(|i| i.id).collect();

        assert_eq!(once, twice);
        let order: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(order, ["tie-a", "tie-b", "first-flight", "second"]);
    }

    #[test]
    fn summary_counts_and_places() {
        let items = vec![
            flight("Out", "2026-01-19T06:20", "2026-01-19T11:15"),
            stay("A", "2026-01-19", "2026-01-22", Some("Bangkok")),
            stay("B", "2026-01-22", "2026-01-23", Some("Chiang Mai")),
            stay("C", "2026-01-23", "2026-01-25", Some("Bangkok")),
            stay("D", "2026-01-25", "2026-01-26", None),
        ];
        let summary = summarize(&items);

        assert_eq!(summary.flights, 1);
        assert_eq!(summary.stays, 4);
        assert_eq!(summary.places, ["Bangkok", "Chiang Mai"]);
        assert_eq!(summary.total_days(), 8);
    }

    #[test]
    fn summary_of_empty_trip() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_days(), 0);
        assert!(summary.span.is_none());
    }
}
