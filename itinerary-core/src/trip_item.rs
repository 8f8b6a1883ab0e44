//! Trip item types.
//!
//! A trip item is either a flight (bounded by departure/arrival instants) or a
//! stay (bounded by check-in/check-out dates). Variant-specific fields live on
//! [`TripDetails`], so a flight can never carry a stay's address and vice versa.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ItineraryError, ItineraryResult};

/// A single itinerary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripItem {
    /// Stable identity, assigned at creation. Records stored without one get a
    /// fresh id on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub details: TripDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum TripDetails {
    Flight {
        #[serde(with = "minute_format")]
        start: NaiveDateTime,
        #[serde(with = "minute_format")]
        end: NaiveDateTime,
        /// Origin airport code
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        /// Destination airport code
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        airline: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flight_no: Option<String>,
    },
    Stay {
        /// Check-in day
        start: NaiveDate,
        /// Check-out day
        end: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        place: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
        /// Accent color, `#RRGGBB`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripKind {
    Flight,
    Stay,
}

impl fmt::Display for TripKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TripKind::Flight => write!(f, "flight"),
            TripKind::Stay => write!(f, "stay"),
        }
    }
}

impl std::str::FromStr for TripKind {
    type Err = ItineraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flight" => Ok(TripKind::Flight),
            "stay" => Ok(TripKind::Stay),
            other => Err(ItineraryError::invalid(
                "type",
                format!("expected 'flight' or 'stay', got '{other}'"),
            )),
        }
    }
}

impl TripItem {
    /// Create an item with a fresh id and no booking reference or notes.
    pub fn new(title: impl Into<String>, details: TripDetails) -> Self {
        TripItem {
            id: Uuid::new_v4(),
            title: title.into(),
            details,
            booking_ref: None,
            notes: None,
        }
    }

    pub fn with_booking_ref(mut self, booking_ref: impl Into<String>) -> Self {
        self.booking_ref = Some(booking_ref.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn kind(&self) -> TripKind {
        match self.details {
            TripDetails::Flight { .. } => TripKind::Flight,
            TripDetails::Stay { .. } => TripKind::Stay,
        }
    }

    pub fn is_flight(&self) -> bool {
        self.kind() == TripKind::Flight
    }

    /// Calendar date the item starts on (departure day or check-in day).
    pub fn start_date(&self) -> NaiveDate {
        match &self.details {
            TripDetails::Flight { start, .. } => start.date(),
            TripDetails::Stay { start, .. } => *start,
        }
    }

    /// Calendar date the item ends on (arrival day or check-out day).
    pub fn end_date(&self) -> NaiveDate {
        match &self.details {
            TripDetails::Flight { end, .. } => end.date(),
            TripDetails::Stay { end, .. } => *end,
        }
    }

    /// Ordering key for chronological sorting. A stay starts at midnight of
    /// its check-in day, so it sorts before flights departing the same day.
    pub fn start_key(&self) -> NaiveDateTime {
        match &self.details {
            TripDetails::Flight { start, .. } => *start,
            TripDetails::Stay { start, .. } => start.and_time(NaiveTime::MIN),
        }
    }

    /// Stay place name, if this is a stay and one is set.
    pub fn place(&self) -> Option<&str> {
        match &self.details {
            TripDetails::Stay { place, .. } => place.as_deref(),
            TripDetails::Flight { .. } => None,
        }
    }

    /// Check the item's invariants: a non-blank title and `start <= end`.
    pub fn validate(&self) -> ItineraryResult<()> {
        if self.title.trim().is_empty() {
            return Err(ItineraryError::invalid("title", "is required"));
        }

        let ordered = match &self.details {
            TripDetails::Flight { start, end, .. } => start <= end,
            TripDetails::Stay { start, end, .. } => start <= end,
        };

        if !ordered {
            let what = match self.kind() {
                TripKind::Flight => "arrival is before departure",
                TripKind::Stay => "check-out is before check-in",
            };
            return Err(ItineraryError::InvalidRange(format!("{}: {}", self.title, what)));
        }

        Ok(())
    }
}

impl fmt::Display for TripItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Flight instants are stored at minute precision (`2026-01-19T06:20`).
/// Seconds are accepted on read.
mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
