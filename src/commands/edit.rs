use anyhow::Result;
use itinerary_core::Itinerary;
use itinerary_core::form::TripForm;
use itinerary_core::store::TripStore;
use owo_colors::OwoColorize;

use super::{ItemArgs, OptionalField};
use crate::render::Render;
use crate::utils::tui;

pub fn run<S: TripStore>(
    itinerary: &mut Itinerary<S>,
    id: &str,
    args: ItemArgs,
    clear: Vec<OptionalField>,
) -> Result<()> {
    let existing = itinerary.find(id)?.clone();
    let interactive = args.is_empty() && clear.is_empty();

    let mut form = TripForm::from_item(&existing);
    args.apply(&mut form);
    for field in clear {
        field.clear(&mut form);
    }

    if interactive {
        println!("{}", existing.render());
        println!();
        form.kind = Some(tui::select_kind(form.kind)?);
        tui::prompt_fields(&mut form, true)?;
    }

    let item = tui::build_with_retry(form, Some(existing.id), interactive)?;

    if item == existing {
        println!("{}", "  No changes".dimmed());
        return Ok(());
    }

    let title = item.title.clone();
    itinerary.update(existing.id, item)?;
    println!("{}", format!("  Updated: {}", title).yellow());

    Ok(())
}
