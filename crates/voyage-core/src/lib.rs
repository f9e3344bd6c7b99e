//! Itinerary editing core
//!
//! This crate provides the pure pieces of the itinerary editor:
//! - `canonicalize`: id and source normalization when an itinerary is loaded
//! - `operations`: add/update/delete/reorder/like, each returning a new itinerary
//! - `edit`: serializable edit intents dispatched onto the operations
//! - `history`: linear undo/redo over committed snapshots
//! - `reorder`: drag-and-drop gesture to reorder intent

pub mod canonicalize;
pub mod edit;
pub mod history;
pub mod operations;
pub mod reorder;

pub use canonicalize::{canonicalize, canonicalize_now, new_event_id};
pub use edit::ItineraryEdit;
pub use history::{HistoryEntry, HistoryStack};
pub use operations::{
    add_event, delete_event, move_event, reorder_event, toggle_like, try_add_event,
    try_delete_event, try_move_event, try_reorder_event, try_toggle_like, try_update_event,
    update_event,
};
pub use reorder::{drop_position, resolve_drop, DropGesture, DropPosition, ReorderIntent, RowBounds};

pub use voyage_api::{
    DailyItinerary, EditError, EditResult, EventPatch, EventSlot, EventSource, Itinerary,
    ItineraryItem,
};
