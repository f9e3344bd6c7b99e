//! Trip itinerary editing
//!
//! `TripEditor` is the store a view layer holds on to: it owns the live
//! itinerary of one trip, routes every edit through the pure operations in
//! `voyage-core`, records history, and hands the trip to a `TripRepository`
//! after each change.

pub mod config;
pub mod editor;
pub mod repository;
pub mod trip;

pub use config::{ConfigError, EditorConfig};
pub use editor::TripEditor;
pub use repository::{JsonDirTripRepository, MemoryTripRepository, StorageError, TripRepository};
pub use trip::Trip;

pub use voyage_core::{
    DailyItinerary, DropGesture, EditError, EventPatch, EventSlot, EventSource, Itinerary,
    ItineraryEdit, ItineraryItem, RowBounds,
};
