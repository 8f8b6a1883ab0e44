use anyhow::Result;
use itinerary_core::Itinerary;
use itinerary_core::store::TripStore;
use owo_colors::OwoColorize;

use crate::utils::tui;

pub fn run<S: TripStore>(itinerary: &mut Itinerary<S>, yes: bool) -> Result<()> {
    if !yes {
        let count = itinerary.items().len();
        let prompt = format!(
            "Replace {} {} with the sample trip?",
            count,
            if count == 1 { "item" } else { "items" }
        );
        if !tui::confirm(&prompt)? {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    itinerary.reset()?;
    println!("{}", format!("  Restored sample trip ({} items)", itinerary.items().len()).green());

    Ok(())
}
