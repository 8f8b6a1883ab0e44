//! Interactive prompts for filling in trip item forms.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use itinerary_core::form::{STAY_COLORS, TripForm};
use itinerary_core::{ItineraryError, TripItem, TripKind};
use owo_colors::OwoColorize;
use uuid::Uuid;

/// Form fields in prompt order, with their labels.
fn fields_for(kind: TripKind) -> Vec<(&'static str, &'static str)> {
    let mut fields = vec![("title", "Title")];
    match kind {
        TripKind::Flight => fields.extend([
            ("start", "Departure (YYYY-MM-DDTHH:MM)"),
            ("end", "Arrival (YYYY-MM-DDTHH:MM)"),
            ("from", "From airport (skip)"),
            ("to", "To airport (skip)"),
            ("airline", "Airline (skip)"),
            ("flight_no", "Flight number (skip)"),
        ]),
        TripKind::Stay => fields.extend([
            ("start", "Check-in (YYYY-MM-DD)"),
            ("end", "Check-out (YYYY-MM-DD)"),
            ("place", "Place (skip)"),
            ("address", "Address (skip)"),
            ("color", "Color (skip)"),
        ]),
    }
    fields.extend([("booking_ref", "Booking reference (skip)"), ("notes", "Notes (skip)")]);
    fields
}

fn field_mut<'a>(form: &'a mut TripForm, field: &str) -> Option<&'a mut String> {
    let slot = match field {
        "title" => &mut form.title,
        "start" => &mut form.start,
        "end" => &mut form.end,
        "from" => &mut form.from,
        "to" => &mut form.to,
        "airline" => &mut form.airline,
        "flight_no" => &mut form.flight_no,
        "place" => &mut form.place,
        "address" => &mut form.address,
        "color" => &mut form.color,
        "booking_ref" => &mut form.booking_ref,
        "notes" => &mut form.notes,
        _ => return None,
    };
    Some(slot)
}

fn label_for(kind: TripKind, field: &str) -> &'static str {
    fields_for(kind)
        .into_iter()
        .find(|(name, _)| *name == field)
        .map(|(_, label)| label)
        .unwrap_or("Value")
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("  {prompt}"))
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

pub fn select_kind(current: Option<TripKind>) -> Result<TripKind> {
    let kinds = [TripKind::Flight, TripKind::Stay];
    let labels = ["Flight", "Stay"];
    let default = current
        .and_then(|k| kinds.iter().position(|c| *c == k))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Type")
        .items(&labels[..])
        .default(default)
        .interact()?;
    Ok(kinds[selection])
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Prompt for form fields. With `all`, every field is offered pre-filled
/// (editing); otherwise only fields that are still empty.
pub fn prompt_fields(form: &mut TripForm, all: bool) -> Result<()> {
    let kind = match form.kind {
        Some(kind) => kind,
        None => select_kind(None)?,
    };
    form.kind = Some(kind);

    if kind == TripKind::Stay && (all || form.color.is_empty()) {
        let palette: Vec<String> = STAY_COLORS
            .iter()
            .map(|(name, _)| name.to_lowercase())
            .collect();
        println!("  {}", format!("Colors: {} or #RRGGBB", palette.join(", ")).dimmed());
    }

    for (field, label) in fields_for(kind) {
        let Some(slot) = field_mut(form, field) else {
            continue;
        };
        if all || slot.is_empty() {
            *slot = prompt_text(label, slot)?;
        }
    }

    Ok(())
}

/// Build the item from the form. When interactive, a validation error
/// re-prompts the offending field until the form is valid.
pub fn build_with_retry(mut form: TripForm, id: Option<Uuid>, interactive: bool) -> Result<TripItem> {
    loop {
        let error = match form.clone().into_item(id) {
            Ok(item) => return Ok(item),
            Err(e) if interactive => e,
            Err(e) => return Err(e.into()),
        };

        eprintln!("  {}", error.to_string().red());

        let field = match &error {
            ItineraryError::InvalidField { field, .. } => *field,
            ItineraryError::InvalidRange(_) => "end",
            _ => return Err(error.into()),
        };

        if field == "type" {
            form.kind = Some(select_kind(None)?);
            continue;
        }

        let kind = form.kind.unwrap_or(TripKind::Flight);
        let label = label_for(kind, field);
        match field_mut(&mut form, field) {
            Some(slot) => *slot = prompt_text(label, slot)?,
            None => return Err(error.into()),
        }
    }
}
