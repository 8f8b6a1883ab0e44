pub mod add;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod list;
pub mod reset;
pub mod show;
pub mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use itinerary_core::Itinerary;
use itinerary_core::TripKind;
use itinerary_core::config::{ItineraryConfig, expand_path};
use itinerary_core::form::TripForm;
use itinerary_core::store::{JsonFileStore, MemoryStore, TripStore};
use owo_colors::OwoColorize;
use tracing::{debug, warn};

fn file_store(file: Option<PathBuf>, config: &ItineraryConfig) -> JsonFileStore {
    match file {
        Some(path) => JsonFileStore::new(expand_path(&path)),
        None => config.store(),
    }
}

/// Open the itinerary at `file`, or at the configured data file.
pub fn open_itinerary(file: Option<PathBuf>, config: &ItineraryConfig) -> Itinerary<JsonFileStore> {
    let store = file_store(file, config);
    debug!(path = %store.path().display(), "opening itinerary");
    Itinerary::open(store)
}

/// Load the same list as [`open_itinerary`] into memory. Changes are never
/// written back.
pub fn open_ephemeral(file: Option<PathBuf>, config: &ItineraryConfig) -> Itinerary<MemoryStore> {
    let source = file_store(file, config);
    debug!(path = %source.path().display(), "opening itinerary in memory");

    let store = match source.load() {
        Ok(Some(items)) => MemoryStore::with_items(items),
        Ok(None) => MemoryStore::new(),
        Err(e) => {
            warn!(error = %e, "could not read stored trip items, using seed itinerary");
            MemoryStore::new()
        }
    };
    Itinerary::open(store)
}

/// Where a store's changes end up, as shown to the user.
pub trait SaveTarget {
    fn save_target(&self) -> String;
}

impl SaveTarget for JsonFileStore {
    fn save_target(&self) -> String {
        format!("saved to {}", self.path().display())
    }
}

impl SaveTarget for MemoryStore {
    fn save_target(&self) -> String {
        "kept in memory only (--ephemeral)".to_string()
    }
}

/// Dimmed hint shown while the built-in sample trip is displayed.
pub fn seed_notice<S: TripStore + SaveTarget>(itinerary: &Itinerary<S>) -> Option<String> {
    itinerary.is_seeded().then(|| {
        format!(
            "Showing the built-in sample trip. Changes will be {}",
            itinerary.store().save_target()
        )
        .dimmed()
        .to_string()
    })
}

/// Field flags shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemArgs {
    /// Item type: flight or stay
    #[arg(short, long)]
    pub kind: Option<TripKind>,

    /// Display title (e.g. "Etihad EY610")
    #[arg(short, long)]
    pub title: Option<String>,

    /// Departure (YYYY-MM-DDTHH:MM) or check-in (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Arrival (YYYY-MM-DDTHH:MM) or check-out (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Origin airport code (flights)
    #[arg(long)]
    pub from: Option<String>,

    /// Destination airport code (flights)
    #[arg(long)]
    pub to: Option<String>,

    /// Airline name (flights)
    #[arg(long)]
    pub airline: Option<String>,

    /// Flight number (flights)
    #[arg(long)]
    pub flight_no: Option<String>,

    /// Place name (stays)
    #[arg(long)]
    pub place: Option<String>,

    /// Address (stays)
    #[arg(long)]
    pub address: Option<String>,

    /// Palette name or #RRGGBB (stays)
    #[arg(long)]
    pub color: Option<String>,

    /// Booking reference
    #[arg(long)]
    pub booking_ref: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl ItemArgs {
    /// True if no field flag was given.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && [
                &self.title,
                &self.start,
                &self.end,
                &self.from,
                &self.to,
                &self.airline,
                &self.flight_no,
                &self.place,
                &self.address,
                &self.color,
                &self.booking_ref,
                &self.notes,
            ]
            .iter()
            .all(|field| field.is_none())
    }

    /// Copy every given flag onto the form.
    pub fn apply(self, form: &mut TripForm) {
        if let Some(kind) = self.kind {
            form.kind = Some(kind);
        }

        let fields = [
            (self.title, &mut form.title),
            (self.start, &mut form.start),
            (self.end, &mut form.end),
            (self.from, &mut form.from),
            (self.to, &mut form.to),
            (self.airline, &mut form.airline),
            (self.flight_no, &mut form.flight_no),
            (self.place, &mut form.place),
            (self.address, &mut form.address),
            (self.color, &mut form.color),
            (self.booking_ref, &mut form.booking_ref),
            (self.notes, &mut form.notes),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Optional fields that `edit --clear` can empty.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalField {
    From,
    To,
    Airline,
    FlightNo,
    Place,
    Address,
    Color,
    BookingRef,
    Notes,
}

impl OptionalField {
    pub fn clear(self, form: &mut TripForm) {
        let slot = match self {
            OptionalField::From => &mut form.from,
            OptionalField::To => &mut form.to,
            OptionalField::Airline => &mut form.airline,
            OptionalField::FlightNo => &mut form.flight_no,
            OptionalField::Place => &mut form.place,
            OptionalField::Address => &mut form.address,
            OptionalField::Color => &mut form.color,
            OptionalField::BookingRef => &mut form.booking_ref,
            OptionalField::Notes => &mut form.notes,
        };
        slot.clear();
    }
}

/// Parse an optional `--date` argument.
pub fn parse_date_arg(date: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    date.map(|d| itinerary_core::date_range::parse_date(d).context("Invalid --date"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_overwrites_given_flags() {
        let mut form = TripForm {
            title: "Old".into(),
            notes: "keep me".into(),
            ..TripForm::new(TripKind::Stay)
        };
        let args = ItemArgs {
            title: Some("New".into()),
            place: Some("Pai".into()),
            ..Default::default()
        };

        assert!(!args.is_empty());
        args.apply(&mut form);

        assert_eq!(form.title, "New");
        assert_eq!(form.place, "Pai");
        assert_eq!(form.notes, "keep me");
        assert_eq!(form.kind, Some(TripKind::Stay));
    }

    #[test]
    fn default_args_are_empty() {
        assert!(ItemArgs::default().is_empty());
    }

    #[test]
    fn clear_empties_one_field() {
        let mut form = TripForm {
            booking_ref: "HM4R535ZR9".into(),
            notes: "n".into(),
            ..TripForm::new(TripKind::Stay)
        };
        OptionalField::BookingRef.clear(&mut form);
        assert!(form.booking_ref.is_empty());
        assert_eq!(form.notes, "n");
    }

    #[test]
    fn open_itinerary_uses_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        let itinerary = open_itinerary(Some(path.clone()), &ItineraryConfig::default());

        assert!(itinerary.is_seeded());
        assert_eq!(itinerary.store().path(), path.as_path());
        assert!(seed_notice(&itinerary).is_some());
    }

    #[test]
    fn ephemeral_loads_the_file_but_never_writes_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");

        let mut stored = open_itinerary(Some(path.clone()), &ItineraryConfig::default());
        let first = stored.items()[0].id;
        stored.remove(first).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();

        let mut ephemeral = open_ephemeral(Some(path.clone()), &ItineraryConfig::default());
        assert!(!ephemeral.is_seeded());
        assert_eq!(ephemeral.items(), stored.items());

        let second = ephemeral.items()[0].id;
        ephemeral.remove(second).unwrap();

        assert_eq!(ephemeral.store().saves(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), on_disk);
    }

    #[test]
    fn ephemeral_seed_notice_says_nothing_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let itinerary = open_ephemeral(Some(dir.path().join("missing.json")), &ItineraryConfig::default());

        assert!(itinerary.is_seeded());
        let notice = seed_notice(&itinerary).unwrap();
        assert!(notice.contains("kept in memory only"));
        assert!(!dir.path().join("missing.json").exists());
    }

    #[test]
    fn date_arg_errors_are_reported() {
        assert!(parse_date_arg(None).unwrap().is_none());
        assert!(parse_date_arg(Some("2026-01-19")).unwrap().is_some());
        assert!(parse_date_arg(Some("19/01")).is_err());
    }
}
