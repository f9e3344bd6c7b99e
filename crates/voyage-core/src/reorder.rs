//! Drag-and-drop resolution
//!
//! Turns a finished drag (source row, target row, pointer height) into one
//! discrete reorder within a day.

use serde::{Deserialize, Serialize};
use voyage_api::EventSlot;

use crate::edit::ItineraryEdit;

/// Vertical extent of a rendered row, in the same units as the pointer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowBounds {
    pub top: f64,
    pub height: f64,
}

impl RowBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Which half of the target row the pointer was released on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Above,
    Below,
}

/// A drop event as reported by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropGesture {
    pub source: EventSlot,
    pub target: EventSlot,
    pub pointer_y: f64,
    pub target_row: RowBounds,
}

/// A resolved move, in the index convention of `reorder_event`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderIntent {
    pub day_index: usize,
    pub from_index: usize,
    pub to_index: usize,
}

impl ReorderIntent {
    /// Whether applying the intent leaves the day as it is
    pub fn is_identity(&self) -> bool {
        self.to_index == self.from_index || self.to_index == self.from_index + 1
    }

    pub fn into_edit(self) -> ItineraryEdit {
        ItineraryEdit::ReorderEvent {
            day_index: self.day_index,
            from_index: self.from_index,
            to_index: self.to_index,
        }
    }
}

/// Upper half inserts above the row, anything from the midpoint down inserts below.
pub fn drop_position(pointer_y: f64, row: &RowBounds) -> DropPosition {
    if pointer_y < row.midpoint() {
        DropPosition::Above
    } else {
        DropPosition::Below
    }
}

/// Resolve a drop into a reorder, or `None` when it crosses days or the
/// target slot cannot be addressed.
pub fn resolve_drop(gesture: &DropGesture) -> Option<ReorderIntent> {
    if !gesture.source.same_day(&gesture.target) {
        return None;
    }

    let to_index = match drop_position(gesture.pointer_y, &gesture.target_row) {
        DropPosition::Above => gesture.target.event_index,
        DropPosition::Below => gesture.target.event_index.checked_add(1)?,
    };

    Some(ReorderIntent {
        day_index: gesture.source.day_index,
        from_index: gesture.source.event_index,
        to_index,
    })
}
