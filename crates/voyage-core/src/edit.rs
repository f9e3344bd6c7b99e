use serde::{Deserialize, Serialize};
use voyage_api::{EditResult, EventPatch, Itinerary, ItineraryItem};

use crate::operations;

/// A user intent against an itinerary, as a value.
///
/// Lets callers queue, log, and replay edits. `apply` dispatches to the
/// matching function in [`crate::operations`], with the same no-op rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ItineraryEdit {
    AddEvent {
        day_index: usize,
        event: ItineraryItem,
    },
    UpdateEvent {
        day_index: usize,
        id: String,
        patch: EventPatch,
    },
    DeleteEvent {
        day_index: usize,
        id: String,
    },
    ReorderEvent {
        day_index: usize,
        from_index: usize,
        to_index: usize,
    },
    ToggleLike {
        day_index: usize,
        id: String,
        user_id: String,
    },
}

impl ItineraryEdit {
    /// Human-readable name for undo/redo affordances
    pub fn display_name(&self) -> &'static str {
        match self {
            ItineraryEdit::AddEvent { .. } => "Add event",
            ItineraryEdit::UpdateEvent { .. } => "Edit event",
            ItineraryEdit::DeleteEvent { .. } => "Delete event",
            ItineraryEdit::ReorderEvent { .. } => "Move event",
            ItineraryEdit::ToggleLike { .. } => "Toggle like",
        }
    }

    pub fn day_index(&self) -> usize {
        match self {
            ItineraryEdit::AddEvent { day_index, .. }
            | ItineraryEdit::UpdateEvent { day_index, .. }
            | ItineraryEdit::DeleteEvent { day_index, .. }
            | ItineraryEdit::ReorderEvent { day_index, .. }
            | ItineraryEdit::ToggleLike { day_index, .. } => *day_index,
        }
    }

    pub fn try_apply(&self, itinerary: &Itinerary) -> EditResult<Itinerary> {
        match self {
            ItineraryEdit::AddEvent { day_index, event } => {
                operations::try_add_event(itinerary, *day_index, event.clone())
            }
            ItineraryEdit::UpdateEvent {
                day_index,
                id,
                patch,
            } => operations::try_update_event(itinerary, *day_index, id, patch),
            ItineraryEdit::DeleteEvent { day_index, id } => {
                operations::try_delete_event(itinerary, *day_index, id)
            }
            ItineraryEdit::ReorderEvent {
                day_index,
                from_index,
                to_index,
            } => operations::try_reorder_event(itinerary, *day_index, *from_index, *to_index),
            ItineraryEdit::ToggleLike {
                day_index,
                id,
                user_id,
            } => operations::try_toggle_like(itinerary, *day_index, id, user_id),
        }
    }

    pub fn apply(&self, itinerary: &Itinerary) -> Itinerary {
        match self {
            ItineraryEdit::AddEvent { day_index, event } => {
                operations::add_event(itinerary, *day_index, event.clone())
            }
            ItineraryEdit::UpdateEvent {
                day_index,
                id,
                patch,
            } => operations::update_event(itinerary, *day_index, id, patch),
            ItineraryEdit::DeleteEvent { day_index, id } => {
                operations::delete_event(itinerary, *day_index, id)
            }
            ItineraryEdit::ReorderEvent {
                day_index,
                from_index,
                to_index,
            } => operations::reorder_event(itinerary, *day_index, *from_index, *to_index),
            ItineraryEdit::ToggleLike {
                day_index,
                id,
                user_id,
            } => operations::toggle_like(itinerary, *day_index, id, user_id),
        }
    }
}

impl std::fmt::Display for ItineraryEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItineraryEdit::AddEvent { day_index, event } => {
                write!(f, "add '{}' to day {}", event.display_title(), day_index)
            }
            ItineraryEdit::UpdateEvent { day_index, id, .. } => {
                write!(f, "edit {} on day {}", id, day_index)
            }
            ItineraryEdit::DeleteEvent { day_index, id } => {
                write!(f, "delete {} on day {}", id, day_index)
            }
            ItineraryEdit::ReorderEvent {
                day_index,
                from_index,
                to_index,
            } => write!(
                f,
                "move row {} to slot {} on day {}",
                from_index, to_index, day_index
            ),
            ItineraryEdit::ToggleLike {
                day_index,
                id,
                user_id,
            } => write!(f, "toggle like by {} on {} (day {})", user_id, id, day_index),
        }
    }
}
