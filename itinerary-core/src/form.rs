//! Form boundary: turns raw user input into a validated [`TripItem`].
//!
//! Nothing reaches the repository without passing through here, so the query
//! engine can assume well-formed dates and `start <= end`.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::error::{ItineraryError, ItineraryResult};
use crate::trip_item::{TripDetails, TripItem, TripKind};

/// Accent colors offered for stays. The first entry is the default.
pub const STAY_COLORS: [(&str, &str); 6] = [
    ("Blue", "#4A90E2"),
    ("Green", "#50C878"),
    ("Orange", "#FF8C42"),
    ("Purple", "#9B59B6"),
    ("Pink", "#E91E63"),
    ("Teal", "#00BCD4"),
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Raw form input. Every field is the string the user typed.
///
/// Fields that don't apply to `kind` are ignored when the item is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub kind: Option<TripKind>,
    pub title: String,
    pub start: String,
    pub end: String,
    pub from: String,
    pub to: String,
    pub airline: String,
    pub flight_no: String,
    pub place: String,
    pub address: String,
    pub color: String,
    pub booking_ref: String,
    pub notes: String,
}

impl TripForm {
    pub fn new(kind: TripKind) -> Self {
        TripForm {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Pre-fill a form from an existing item, for editing.
    pub fn from_item(item: &TripItem) -> Self {
        let mut form = TripForm {
            kind: Some(item.kind()),
            title: item.title.clone(),
            booking_ref: item.booking_ref.clone().unwrap_or_default(),
            notes: item.notes.clone().unwrap_or_default(),
            ..Default::default()
        };

        match &item.details {
            TripDetails::Flight {
                start,
                end,
                from,
                to,
                airline,
                flight_no,
            } => {
                form.start = start.format(DATETIME_FORMATS[0]).to_string();
                form.end = end.format(DATETIME_FORMATS[0]).to_string();
                form.from = from.clone().unwrap_or_default();
                form.to = to.clone().unwrap_or_default();
                form.airline = airline.clone().unwrap_or_default();
                form.flight_no = flight_no.clone().unwrap_or_default();
            }
            TripDetails::Stay {
                start,
                end,
                place,
                address,
                color,
            } => {
                form.start = start.format(DATE_FORMAT).to_string();
                form.end = end.format(DATE_FORMAT).to_string();
                form.place = place.clone().unwrap_or_default();
                form.address = address.clone().unwrap_or_default();
                form.color = color.clone().unwrap_or_default();
            }
        }

        form
    }

    /// Validate and build the item. `id` is kept when editing; `None` assigns a
    /// fresh one.
    pub fn into_item(self, id: Option<Uuid>) -> ItineraryResult<TripItem> {
        let kind = self
            .kind
            .ok_or_else(|| ItineraryError::invalid("type", "is required"))?;
        let title = required("title", &self.title)?;
        let start = required("start", &self.start)?;
        let end = required("end", &self.end)?;

        let details = match kind {
            TripKind::Flight => TripDetails::Flight {
                start: parse_datetime("start", &start)?,
                end: parse_datetime("end", &end)?,
                from: airport_code("from", &self.from)?,
                to: airport_code("to", &self.to)?,
                airline: optional(&self.airline),
                flight_no: optional(&self.flight_no),
            },
            TripKind::Stay => TripDetails::Stay {
                start: parse_date("start", &start)?,
                end: parse_date("end", &end)?,
                place: optional(&self.place),
                address: optional(&self.address),
                color: Some(stay_color(&self.color)?),
            },
        };

        let item = TripItem {
            id: id.unwrap_or_else(Uuid::new_v4),
            title,
            details,
            booking_ref: optional(&self.booking_ref),
            notes: optional(&self.notes),
        };
        item.validate()?;

        Ok(item)
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

fn required(field: &'static str, value: &str) -> ItineraryResult<String> {
    optional(value).ok_or_else(|| ItineraryError::invalid(field, "is required"))
}

fn parse_date(field: &'static str, value: &str) -> ItineraryResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ItineraryError::invalid(field, format!("could not parse date \"{value}\", expected YYYY-MM-DD"))
    })
}

fn parse_datetime(field: &'static str, value: &str) -> ItineraryResult<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| {
            ItineraryError::invalid(
                field,
                format!("could not parse date/time \"{value}\", expected YYYY-MM-DDTHH:MM"),
            )
        })
}

/// Airport codes are three letters, stored upper-cased.
fn airport_code(field: &'static str, value: &str) -> ItineraryResult<Option<String>> {
    let Some(code) = optional(value) else {
        return Ok(None);
    };

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ItineraryError::invalid(
            field,
            format!("\"{code}\" is not a three-letter airport code"),
        ));
    }

    Ok(Some(code.to_ascii_uppercase()))
}

/// Accepts a palette name ("teal") or a `#RRGGBB` value. Blank picks the default.
fn stay_color(value: &str) -> ItineraryResult<String> {
    let Some(color) = optional(value) else {
        return Ok(STAY_COLORS[0].1.to_string());
    };

    if let Some((_, hex)) = STAY_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&color))
    {
        return Ok(hex.to_string());
    }

    let is_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !is_hex {
        return Err(ItineraryError::invalid(
            "color",
            format!("\"{color}\" is not a palette color or #RRGGBB value"),
        ));
    }

    Ok(color.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight_form() -> TripForm {
        TripForm {
            title: "  Etihad EY610 ".into(),
            start: "2026-01-19T06:20".into(),
            end: "2026-01-19T11:15".into(),
            from: "tlv".into(),
            to: " auh".into(),
            airline: "Etihad Airways".into(),
            flight_no: " EY610".into(),
            booking_ref: "   ".into(),
            ..TripForm::new(TripKind::Flight)
        }
    }

    fn stay_form() -> TripForm {
        TripForm {
            title: "Rustic River Boutique".into(),
            start: "2026-01-22".into(),
            end: "2026-01-23".into(),
            place: "Chiang Mai".into(),
            notes: "Baggage storage".into(),
            ..TripForm::new(TripKind::Stay)
        }
    }

    #[test]
    fn flight_form_normalizes_fields() {
        let item = flight_form().into_item(None).unwrap();

        assert_eq!(item.title, "Etihad EY610");
        assert_eq!(item.booking_ref, None);
        let TripDetails::Flight { from, to, flight_no, .. } = &item.details else {
            panic!("expected a flight");
        };
        assert_eq!(from.as_deref(), Some("TLV"));
        assert_eq!(to.as_deref(), Some("AUH"));
        assert_eq!(flight_no.as_deref(), Some("EY610"));
    }

    #[test]
    fn flight_number_keeps_its_case() {
        let form = TripForm {
            flight_no: "fd3433".into(),
            ..flight_form()
        };
        let item = form.into_item(None).unwrap();

        let TripDetails::Flight { flight_no, .. } = &item.details else {
            panic!("expected a flight");
        };
        assert_eq!(flight_no.as_deref(), Some("fd3433"));
    }

    #[test]
    fn stay_form_defaults_color() {
        let item = stay_form().into_item(None).unwrap();

        let TripDetails::Stay { color, place, .. } = &item.details else {
            panic!("expected a stay");
        };
        assert_eq!(color.as_deref(), Some("#4A90E2"));
        assert_eq!(place.as_deref(), Some("Chiang Mai"));
        assert_eq!(item.notes.as_deref(), Some("Baggage storage"));
    }

    #[test]
    fn stay_ignores_flight_fields() {
        let form = TripForm {
            from: "TLV".into(),
            ..stay_form()
        };
        let item = form.into_item(None).unwrap();
        assert!(matches!(item.details, TripDetails::Stay { .. }));
    }

    #[test]
    fn color_by_palette_name_or_hex() {
        let named = TripForm { color: "teal".into(), ..stay_form() }.into_item(None).unwrap();
        assert!(matches!(&named.details, TripDetails::Stay { color: Some(c), .. } if c == "#00BCD4"));

        let hex = TripForm { color: "#abcdef".into(), ..stay_form() }.into_item(None).unwrap();
        assert!(matches!(&hex.details, TripDetails::Stay { color: Some(c), .. } if c == "#ABCDEF"));

        let bad = TripForm { color: "mauve".into(), ..stay_form() }.into_item(None);
        assert!(matches!(bad, Err(ItineraryError::InvalidField { field: "color", .. })));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let no_title = TripForm { title: " ".into(), ..flight_form() }.into_item(None);
        assert!(matches!(no_title, Err(ItineraryError::InvalidField { field: "title", .. })));

        let no_end = TripForm { end: String::new(), ..stay_form() }.into_item(None);
        assert!(matches!(no_end, Err(ItineraryError::InvalidField { field: "end", .. })));

        let no_kind = TripForm { kind: None, ..stay_form() }.into_item(None);
        assert!(matches!(no_kind, Err(ItineraryError::InvalidField { field: "type", .. })));
    }

    #[test]
    fn unparseable_dates_are_rejected() {
        let flight = TripForm { start: "2026-01-19".into(), ..flight_form() }.into_item(None);
        assert!(matches!(flight, Err(ItineraryError::InvalidField { field: "start", .. })));

        let stay = TripForm { end: "23.1".into(), ..stay_form() }.into_item(None);
        assert!(matches!(stay, Err(ItineraryError::InvalidField { field: "end", .. })));
    }

    #[test]
    fn flight_accepts_space_separator() {
        let item = TripForm { start: "2026-01-19 06:20".into(), ..flight_form() }.into_item(None);
        assert!(item.is_ok());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let stay = TripForm {
            start: "2026-01-23".into(),
            end: "2026-01-22".into(),
            ..stay_form()
        };
        assert!(matches!(stay.into_item(None), Err(ItineraryError::InvalidRange(_))));
    }

    #[test]
    fn bad_airport_code_is_rejected() {
        let form = TripForm { from: "TLV1".into(), ..flight_form() };
        assert!(matches!(form.into_item(None), Err(ItineraryError::InvalidField { field: "from", .. })));
    }

    #[test]
    fn from_item_round_trips_and_keeps_id() {
        let original = flight_form().into_item(None).unwrap();
        let rebuilt = TripForm::from_item(&original).into_item(Some(original.id)).unwrap();
        assert_eq!(rebuilt, original);
    }
}
