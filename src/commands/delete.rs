use anyhow::Result;
use itinerary_core::Itinerary;
use itinerary_core::store::TripStore;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui;

pub fn run<S: TripStore>(itinerary: &mut Itinerary<S>, id: &str, yes: bool) -> Result<()> {
    let item = itinerary.find(id)?;
    let id = item.id;

    if !yes {
        println!("{}", item.render());
        println!();
        if !tui::confirm("Delete this item?")? {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let removed = itinerary.remove(id)?;
    println!("{}", format!("  Deleted: {}", removed.title).red());

    Ok(())
}
