//! Core types for the itinerary tool.
//!
//! - `trip_item`: flights and stays
//! - `query`: pure date filtering, grouping and ordering over a list of items
//! - `form`: validation of raw user input into items
//! - `repository` / `store`: the persisted, id-addressed item list

pub mod config;
pub mod date_range;
pub mod error;
pub mod form;
pub mod query;
pub mod repository;
pub mod seed;
pub mod store;
pub mod trip_item;

pub use error::{ItineraryError, ItineraryResult};
pub use repository::Itinerary;
pub use trip_item::{TripDetails, TripItem, TripKind};
