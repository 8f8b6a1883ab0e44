use anyhow::Result;
use itinerary_core::Itinerary;
use itinerary_core::query::summarize;
use itinerary_core::store::TripStore;

use crate::render::Render;

pub fn run<S: TripStore>(itinerary: &Itinerary<S>) -> Result<()> {
    println!("{}", summarize(itinerary.items()).render());
    Ok(())
}
