use anyhow::Result;
use itinerary_core::Itinerary;
use itinerary_core::form::TripForm;
use itinerary_core::store::TripStore;
use owo_colors::OwoColorize;

use super::ItemArgs;
use crate::render::short_id;
use crate::utils::tui;

pub fn run<S: TripStore>(itinerary: &mut Itinerary<S>, args: ItemArgs) -> Result<()> {
    let interactive =
        args.kind.is_none() || args.title.is_none() || args.start.is_none() || args.end.is_none();

    let kind = match args.kind {
        Some(kind) => kind,
        None => tui::select_kind(None)?,
    };

    let mut form = TripForm::new(kind);
    args.apply(&mut form);

    if interactive {
        tui::prompt_fields(&mut form, false)?;
    }

    let item = tui::build_with_retry(form, None, interactive)?;
    let title = item.title.clone();
    let id = itinerary.add(item)?;

    if interactive {
        println!();
    }
    let created = itinerary.get(id).map(short_id).unwrap_or_default();
    println!("{} {}", format!("  Created: {}", title).green(), created.dimmed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary_core::store::MemoryStore;
    use itinerary_core::{TripDetails, TripKind};

    #[test]
    fn adds_from_flags_without_prompting() {
        let mut itinerary = Itinerary::open(MemoryStore::with_items(Vec::new()));
        let args = ItemArgs {
            kind: Some(TripKind::Flight),
            title: Some("AirAsia FD3433".into()),
            start: Some("2026-01-22T13:55".into()),
            end: Some("2026-01-22T15:05".into()),
            from: Some("dmk".into()),
            to: Some("cnx".into()),
            ..Default::default()
        };

        run(&mut itinerary, args).unwrap();

        let [item] = itinerary.items() else {
            panic!("expected one item");
        };
        assert!(matches!(&item.details, TripDetails::Flight { from: Some(f), .. } if f == "DMK"));
        assert_eq!(itinerary.store().saves(), 1);
    }

    #[test]
    fn invalid_flags_fail_without_saving() {
        let mut itinerary = Itinerary::open(MemoryStore::with_items(Vec::new()));
        let args = ItemArgs {
            kind: Some(TripKind::Stay),
            title: Some("Pai".into()),
            start: Some("2026-01-31".into()),
            end: Some("2026-01-23".into()),
            ..Default::default()
        };

        assert!(run(&mut itinerary, args).is_err());
        assert!(itinerary.items().is_empty());
        assert_eq!(itinerary.store().saves(), 0);
    }
}
