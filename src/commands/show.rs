use anyhow::Result;
use itinerary_core::Itinerary;
use itinerary_core::store::TripStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: TripStore>(itinerary: &Itinerary<S>, id: &str) -> Result<()> {
    let item = itinerary.find(id)?;

    println!("{}", item.render());
    println!("  {} {}", "id:".dimmed(), item.id.to_string().dimmed());
    Ok(())
}
