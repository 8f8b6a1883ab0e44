use anyhow::Result;
use chrono::NaiveDate;
use itinerary_core::Itinerary;
use itinerary_core::query::{filter_by_date, summarize};
use itinerary_core::store::TripStore;
use owo_colors::OwoColorize;

use crate::render::{Render, day_heading, render_calendar, render_days};

pub fn run<S: TripStore>(itinerary: &Itinerary<S>, selected: Option<NaiveDate>) -> Result<()> {
    let items = itinerary.items();
    let summary = summarize(items);

    let Some(span) = summary.span else {
        println!("{}", "No events".dimmed());
        return Ok(());
    };

    println!("{}", summary.render());
    println!();
    println!("{}", render_calendar(items, span, selected));

    // The day panel beside the grid: the selected day, or a hint.
    println!();
    match selected {
        Some(date) => {
            let days = filter_by_date(items, Some(date));
            if days.is_empty() {
                println!("{}", format!("No events on {}", day_heading(date)).dimmed());
            } else {
                println!("{}", render_days(&days));
            }
        }
        None => println!(
            "{}",
            "Pass --date YYYY-MM-DD to see a day's items, or run `itinerary list`".dimmed()
        ),
    }

    Ok(())
}
