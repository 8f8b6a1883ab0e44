//! TUI rendering for itinerary types.
//!
//! Extension traits and helpers that turn core types into colored terminal
//! output using owo_colors. Everything returns `String` so callers decide where
//! it goes.

use chrono::{Datelike, NaiveDate};
use itinerary_core::date_range::DateSpan;
use itinerary_core::query::{TripSummary, items_on_date};
use itinerary_core::{TripDetails, TripItem};
use owo_colors::OwoColorize;

const FLIGHT_MARK: &str = "✈";
const STAY_MARK: &str = "●";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Short id shown next to items; enough to address them from the CLI.
pub fn short_id(item: &TripItem) -> String {
    item.id.to_string().chars().take(8).collect()
}

impl Render for TripItem {
    /// A card: headline plus dimmed detail lines.
    fn render(&self) -> String {
        let mut lines = Vec::new();

        match &self.details {
            TripDetails::Flight {
                start,
                end,
                from,
                to,
                airline,
                flight_no,
            } => {
                let times = format!("{} → {}", start.format("%H:%M"), end.format("%H:%M"));
                lines.push(format!(
                    "{} {} {} {}",
                    FLIGHT_MARK.cyan(),
                    times.bold(),
                    self.title,
                    short_id(self).dimmed()
                ));

                if let (Some(from), Some(to)) = (from, to) {
                    lines.push(format!("  {} → {}", from.bold(), to.bold()));
                }

                let carrier: Vec<&str> = [airline.as_deref(), flight_no.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect();
                if !carrier.is_empty() {
                    lines.push(format!("  {}", carrier.join(" · ").dimmed()));
                }
            }
            TripDetails::Stay {
                start,
                end,
                place,
                address,
                color,
            } => {
                lines.push(format!(
                    "{} {} {} {}",
                    stay_mark(color.as_deref()),
                    self.title.bold(),
                    format!("{} → {}", format_day(*start), format_day(*end)).dimmed(),
                    short_id(self).dimmed()
                ));

                if let Some(place) = place {
                    lines.push(format!("  {}", place));
                }
                if let Some(address) = address {
                    lines.push(format!("  {}", address.dimmed()));
                }
            }
        }

        if let Some(booking_ref) = &self.booking_ref {
            lines.push(format!("  {} {}", "Ref:".dimmed(), booking_ref));
        }
        if let Some(notes) = &self.notes {
            lines.push(format!("  {}", notes.italic()));
        }

        lines.join("\n")
    }
}

impl Render for TripSummary {
    fn render(&self) -> String {
        let Some(span) = self.span else {
            return "No trip items yet".dimmed().to_string();
        };

        let mut lines = vec![format!(
            "{} – {}",
            span.start.format("%d %b").to_string().bold(),
            span.end.format("%d %b %Y").to_string().bold()
        )];

        lines.push(format!(
            "{} {} · {} {} · {} {}",
            self.total_days(),
            pluralize("day", self.total_days() as usize),
            self.flights,
            pluralize("flight", self.flights),
            self.stays,
            pluralize("stay", self.stays)
        ));

        if !self.places.is_empty() {
            lines.push(self.places.join(" → ").dimmed().to_string());
        }

        lines.join("\n")
    }
}

/// Stay marker in the stay's accent color, when it has a valid one.
fn stay_mark(color: Option<&str>) -> String {
    match color.and_then(parse_hex) {
        Some((r, g, b)) => STAY_MARK.truecolor(r, g, b).to_string(),
        None => STAY_MARK.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn format_day(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Day heading, e.g. "Monday, 19 January 2026".
pub fn day_heading(date: NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// One heading per day with the day's cards beneath it.
pub fn render_days(days: &[(NaiveDate, Vec<&TripItem>)]) -> String {
    let mut blocks = Vec::new();

    for (date, items) in days {
        let mut lines = vec![day_heading(*date).bold().to_string()];
        for item in items {
            lines.extend(item.render().lines().map(|l| format!("  {l}")));
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

const CELL_WIDTH: usize = 6;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Sunday-first month grid covering `span`. Days outside the span are dimmed,
/// the selected day is highlighted, and each day is marked with ✈ for flights
/// and ● for stays. Under each week a label line names the day's flight route
/// or the stay's place.
pub fn render_calendar(items: &[TripItem], span: DateSpan, selected: Option<NaiveDate>) -> String {
    let mut lines = Vec::new();

    let header: String = WEEKDAYS.iter().map(|d| format!("{:^width$}", d, width = CELL_WIDTH)).collect();
    lines.push(header.dimmed().to_string());

    for (week_index, week) in span.weeks().iter().enumerate() {
        let month_start = if week_index == 0 {
            Some(week[0])
        } else {
            week.iter().copied().find(|d| d.day() == 1)
        };
        if let Some(month) = month_start {
            lines.push(month.format("%B %Y").to_string().underline().to_string());
        }

        let row: String = week
            .iter()
            .map(|day| render_cell(items, span, *day, selected == Some(*day)))
            .collect();
        lines.push(row);

        let labels: String = week
            .iter()
            .enumerate()
            .map(|(column, day)| {
                let label = cell_label(items, *day, column == 0);
                format!("{:<width$}", label, width = CELL_WIDTH).dimmed().to_string()
            })
            .collect();
        lines.push(labels);
    }

    lines.join("\n")
}

fn render_cell(items: &[TripItem], span: DateSpan, day: NaiveDate, selected: bool) -> String {
    let on_day = items_on_date(items, day);
    let flights = on_day.iter().filter(|i| i.is_flight()).count();
    let stay_color = on_day.iter().find_map(|i| match &i.details {
        TripDetails::Stay { color, .. } => Some(color.as_deref()),
        TripDetails::Flight { .. } => None,
    });

    let number = format!("{:>3}", day.day());
    let number = if selected {
        number.reversed().to_string()
    } else if span.contains(day) {
        number.bold().to_string()
    } else {
        number.dimmed().to_string()
    };

    let flight_mark = if flights > 0 { FLIGHT_MARK.cyan().to_string() } else { " ".to_string() };
    let stay_cell = match stay_color {
        Some(color) => stay_mark(color),
        None => " ".to_string(),
    };

    // Three columns of number, two markers, one space.
    format!("{number}{flight_mark}{stay_cell} ")
}

/// Up to five characters naming what happens on `day`: `→CNX` for a flight,
/// the place for a stay on its check-in day or at the start of a week.
fn cell_label(items: &[TripItem], day: NaiveDate, week_start: bool) -> String {
    let on_day = items_on_date(items, day);

    let label = on_day.iter().find_map(|item| match &item.details {
        TripDetails::Flight { to, .. } => Some(match to {
            Some(to) => format!("→{to}"),
            None => FLIGHT_MARK.to_string(),
        }),
        TripDetails::Stay { start, place, .. } if *start == day || week_start => {
            Some(place.clone().unwrap_or_else(|| item.title.clone()))
        }
        TripDetails::Stay { .. } => None,
    });

    label
        .map(|l| l.chars().take(CELL_WIDTH - 1).collect())
        .unwrap_or_default()
}
