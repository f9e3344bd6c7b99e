use serde::{Deserialize, Serialize};

pub mod itinerary;

pub use itinerary::{DailyItinerary, EventPatch, EventSource, Itinerary, ItineraryItem};

/// Address of an event row: day position plus position within the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSlot {
    pub day_index: usize,
    pub event_index: usize,
}

impl EventSlot {
    pub fn new(day_index: usize, event_index: usize) -> Self {
        Self {
            day_index,
            event_index,
        }
    }

    pub fn same_day(&self, other: &EventSlot) -> bool {
        self.day_index == other.day_index
    }
}

/// Why an itinerary edit left the model unchanged.
///
/// Edits never fail visibly: the public mutation functions turn these into a
/// no-op. The `try_` variants hand them back for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EditError {
    #[error("Day {day_index} out of range (itinerary has {day_count} days)")]
    DayOutOfRange { day_index: usize, day_count: usize },

    #[error("Event not found on day {day_index}: {id}")]
    EventNotFound { day_index: usize, id: String },

    #[error("Index {index} out of range on day {day_index} ({len} events)")]
    IndexOutOfRange {
        day_index: usize,
        index: usize,
        len: usize,
    },

    #[error("Cross-day move from day {from_day} to day {to_day} is not supported")]
    CrossDayMove { from_day: usize, to_day: usize },

    #[error("Event id already in use: {id}")]
    DuplicateEventId { id: String },

    #[error("Event has an empty id")]
    MissingEventId,
}

pub type EditResult<T> = std::result::Result<T, EditError>;
