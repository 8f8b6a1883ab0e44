use anyhow::{Context, Result};
use chrono::NaiveDate;
use itinerary_core::query::filter_by_date;
use itinerary_core::store::TripStore;
use itinerary_core::{Itinerary, TripItem, TripKind};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::render::{day_heading, render_days};

/// One day of the listing, as emitted by `--json`.
#[derive(Serialize)]
struct DayJson<'a> {
    date: NaiveDate,
    items: &'a [&'a TripItem],
}

pub fn run<S: TripStore>(
    itinerary: &Itinerary<S>,
    date: Option<NaiveDate>,
    kind: Option<TripKind>,
    json: bool,
) -> Result<()> {
    let items: Vec<TripItem> = itinerary
        .items()
        .iter()
        .filter(|item| kind.is_none_or(|k| item.kind() == k))
        .cloned()
        .collect();

    let days = filter_by_date(&items, date);

    if json {
        let out: Vec<DayJson> = days
            .iter()
            .map(|(date, items)| DayJson { date: *date, items })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("Failed to serialize trip items")?
        );
        return Ok(());
    }

    if days.is_empty() {
        let message = match date {
            Some(date) => format!("No events on {}", day_heading(date)),
            None => "No events".to_string(),
        };
        println!("{}", message.dimmed());
        return Ok(());
    }

    println!("{}", render_days(&days));
    Ok(())
}
