//! Itinerary mutation operations
//!
//! Every operation borrows the current itinerary and returns a new value; the
//! input is never modified. The `try_` functions report why an edit could not
//! apply. The plain functions absorb that into a no-op that returns an equal
//! copy of the input, because the UI may call them with references that went
//! stale (an undo can remove the event a button still points at).

use tracing::debug;
use voyage_api::{
    DailyItinerary, EditError, EditResult, EventPatch, EventSlot, Itinerary, ItineraryItem,
};

fn day_at(itinerary: &Itinerary, day_index: usize) -> EditResult<&DailyItinerary> {
    itinerary
        .daily_breakdown
        .get(day_index)
        .ok_or(EditError::DayOutOfRange {
            day_index,
            day_count: itinerary.daily_breakdown.len(),
        })
}

fn event_position(day: &DailyItinerary, day_index: usize, id: &str) -> EditResult<usize> {
    day.position_of(id).ok_or_else(|| EditError::EventNotFound {
        day_index,
        id: id.to_string(),
    })
}

fn absorb(op: &str, result: EditResult<Itinerary>, original: &Itinerary) -> Itinerary {
    match result {
        Ok(next) => next,
        Err(reason) => {
            debug!("[ItineraryOps] {} ignored: {}", op, reason);
            original.clone()
        }
    }
}

/// Append `event` to the end of the given day.
pub fn try_add_event(
    itinerary: &Itinerary,
    day_index: usize,
    event: ItineraryItem,
) -> EditResult<Itinerary> {
    day_at(itinerary, day_index)?;
    if event.id.trim().is_empty() {
        return Err(EditError::MissingEventId);
    }
    if itinerary.contains_event(&event.id) {
        return Err(EditError::DuplicateEventId { id: event.id });
    }

    let mut next = itinerary.clone();
    next.daily_breakdown[day_index].events.push(event);
    Ok(next)
}

pub fn add_event(itinerary: &Itinerary, day_index: usize, event: ItineraryItem) -> Itinerary {
    absorb(
        "add_event",
        try_add_event(itinerary, day_index, event),
        itinerary,
    )
}

/// Merge `patch` onto the event with `id` in the given day. The id survives
/// even when the patch carries a different one.
pub fn try_update_event(
    itinerary: &Itinerary,
    day_index: usize,
    id: &str,
    patch: &EventPatch,
) -> EditResult<Itinerary> {
    let position = event_position(day_at(itinerary, day_index)?, day_index, id)?;

    let mut next = itinerary.clone();
    patch.merge_into(&mut next.daily_breakdown[day_index].events[position]);
    Ok(next)
}

pub fn update_event(
    itinerary: &Itinerary,
    day_index: usize,
    id: &str,
    patch: &EventPatch,
) -> Itinerary {
    absorb(
        "update_event",
        try_update_event(itinerary, day_index, id, patch),
        itinerary,
    )
}

/// Remove the event with `id` from the given day.
pub fn try_delete_event(itinerary: &Itinerary, day_index: usize, id: &str) -> EditResult<Itinerary> {
    let position = event_position(day_at(itinerary, day_index)?, day_index, id)?;

    let mut next = itinerary.clone();
    next.daily_breakdown[day_index].events.remove(position);
    Ok(next)
}

pub fn delete_event(itinerary: &Itinerary, day_index: usize, id: &str) -> Itinerary {
    absorb(
        "delete_event",
        try_delete_event(itinerary, day_index, id),
        itinerary,
    )
}

/// Move the event at `from_index` to the slot `to_index` within one day.
///
/// Both indices address slots before the removal. `to_index` may equal the
/// number of events (drop after the last row). Moving down lands the event at
/// `to_index - 1` once it has been taken out, so `[A, B, C]` with
/// `from_index = 0, to_index = 2` becomes `[B, A, C]`.
pub fn try_reorder_event(
    itinerary: &Itinerary,
    day_index: usize,
    from_index: usize,
    to_index: usize,
) -> EditResult<Itinerary> {
    let len = day_at(itinerary, day_index)?.events.len();
    if from_index >= len {
        return Err(EditError::IndexOutOfRange {
            day_index,
            index: from_index,
            len,
        });
    }
    if to_index > len {
        return Err(EditError::IndexOutOfRange {
            day_index,
            index: to_index,
            len,
        });
    }

    let mut next = itinerary.clone();
    let events = &mut next.daily_breakdown[day_index].events;
    let moved = events.remove(from_index);
    let insert_at = if to_index > from_index {
        to_index - 1
    } else {
        to_index
    };
    events.insert(insert_at, moved);
    Ok(next)
}

pub fn reorder_event(
    itinerary: &Itinerary,
    day_index: usize,
    from_index: usize,
    to_index: usize,
) -> Itinerary {
    absorb(
        "reorder_event",
        try_reorder_event(itinerary, day_index, from_index, to_index),
        itinerary,
    )
}

/// Slot-addressed reorder. Moves between different days are refused.
pub fn try_move_event(itinerary: &Itinerary, from: EventSlot, to: EventSlot) -> EditResult<Itinerary> {
    if !from.same_day(&to) {
        return Err(EditError::CrossDayMove {
            from_day: from.day_index,
            to_day: to.day_index,
        });
    }
    try_reorder_event(itinerary, from.day_index, from.event_index, to.event_index)
}

pub fn move_event(itinerary: &Itinerary, from: EventSlot, to: EventSlot) -> Itinerary {
    absorb("move_event", try_move_event(itinerary, from, to), itinerary)
}

/// Add or remove `user_id` from the likes of the event with `id`.
pub fn try_toggle_like(
    itinerary: &Itinerary,
    day_index: usize,
    id: &str,
    user_id: &str,
) -> EditResult<Itinerary> {
    let position = event_position(day_at(itinerary, day_index)?, day_index, id)?;

    let mut next = itinerary.clone();
    next.daily_breakdown[day_index].events[position].toggle_like(user_id);
    Ok(next)
}

pub fn toggle_like(itinerary: &Itinerary, day_index: usize, id: &str, user_id: &str) -> Itinerary {
    absorb(
        "toggle_like",
        try_toggle_like(itinerary, day_index, id, user_id),
        itinerary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_api::EventSource;

    fn day_with(ids: &[&str]) -> DailyItinerary {
        ids.iter().fold(DailyItinerary::new("Day 1"), |day, id| {
            day.with_event(
                ItineraryItem::new(*id, "10:00")
                    .with_activity(format!("Activity {}", id))
                    .with_source(EventSource::Ai),
            )
        })
    }

    fn itinerary_with(days: &[&[&str]]) -> Itinerary {
        days.iter()
            .fold(Itinerary::new("Test trip"), |it, ids| it.with_day(day_with(ids)))
    }

    fn ids(itinerary: &Itinerary, day_index: usize) -> Vec<&str> {
        itinerary.daily_breakdown[day_index].event_ids()
    }

    #[test]
    fn test_reorder_drag_down_below_next_row() {
        let it = itinerary_with(&[&["A", "B", "C"]]);
        let next = reorder_event(&it, 0, 0, 2);
        assert_eq!(ids(&next, 0), vec!["B", "A", "C"]);
        // input untouched
        assert_eq!(ids(&it, 0), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_drag_up_to_top() {
        let it = itinerary_with(&[&["A", "B", "C", "D"]]);
        let next = reorder_event(&it, 0, 2, 0);
        assert_eq!(ids(&next, 0), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_reorder_to_end_slot() {
        let it = itinerary_with(&[&["A", "B", "C"]]);
        let next = reorder_event(&it, 0, 0, 3);
        assert_eq!(ids(&next, 0), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_onto_own_slots_is_identity() {
        let it = itinerary_with(&[&["A", "B", "C"]]);
        assert_eq!(reorder_event(&it, 0, 1, 1), it);
        assert_eq!(reorder_event(&it, 0, 1, 2), it);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let it = itinerary_with(&[&["A", "B"]]);
        assert_eq!(
            try_reorder_event(&it, 0, 2, 0),
            Err(EditError::IndexOutOfRange {
                day_index: 0,
                index: 2,
                len: 2
            })
        );
        assert_eq!(reorder_event(&it, 0, 0, 3), it);
        assert_eq!(reorder_event(&it, 5, 0, 1), it);
    }

    #[test]
    fn test_add_then_delete() {
        let it = itinerary_with(&[&["A", "B"]]);
        let added = add_event(&it, 0, ItineraryItem::new("x", "").with_activity("Visit Park"));
        assert_eq!(ids(&added, 0), vec!["A", "B", "x"]);

        let deleted = delete_event(&added, 0, "A");
        assert_eq!(ids(&deleted, 0), vec!["B", "x"]);
    }

    #[test]
    fn test_add_refuses_duplicate_and_blank_ids() {
        let it = itinerary_with(&[&["A"], &["B"]]);
        assert_eq!(
            try_add_event(&it, 0, ItineraryItem::new("B", "")),
            Err(EditError::DuplicateEventId { id: "B".into() })
        );
        assert_eq!(
            try_add_event(&it, 0, ItineraryItem::new("  ", "")),
            Err(EditError::MissingEventId)
        );
        assert_eq!(add_event(&it, 3, ItineraryItem::new("z", "")), it);
    }

    #[test]
    fn test_update_keeps_id() {
        let it = itinerary_with(&[&["A", "B"]]);
        let patch = EventPatch {
            id: Some("hijack".into()),
            ..EventPatch::new().activity("Sunset cruise").time("18:30")
        };
        let next = update_event(&it, 0, "B", &patch);
        let event = &next.daily_breakdown[0].events[1];
        assert_eq!(event.id, "B");
        assert_eq!(event.activity.as_deref(), Some("Sunset cruise"));
        assert_eq!(event.time, "18:30");
        assert_eq!(event.source, Some(EventSource::Ai));
    }

    #[test]
    fn test_update_missing_event_is_noop() {
        let it = itinerary_with(&[&["A"], &["B"]]);
        let next = update_event(&it, 1, "nonexistent", &EventPatch::new().activity("X"));
        assert_eq!(next, it);

        // event exists, but on another day
        assert_eq!(
            try_update_event(&it, 1, "A", &EventPatch::new().activity("X")),
            Err(EditError::EventNotFound {
                day_index: 1,
                id: "A".into()
            })
        );
    }

    #[test]
    fn test_delete_twice() {
        let it = itinerary_with(&[&["A", "B"]]);
        let once = delete_event(&it, 0, "A");
        let twice = delete_event(&once, 0, "A");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_move_event_across_days_is_noop() {
        let it = itinerary_with(&[&["A", "B"], &["C"]]);
        let next = move_event(&it, EventSlot::new(0, 0), EventSlot::new(1, 0));
        assert_eq!(next, it);

        let next = move_event(&it, EventSlot::new(0, 0), EventSlot::new(0, 2));
        assert_eq!(ids(&next, 0), vec!["B", "A"]);
    }

    #[test]
    fn test_toggle_like_twice_restores() {
        let it = itinerary_with(&[&["A"]]);
        let liked = toggle_like(&it, 0, "A", "u1");
        assert!(liked.daily_breakdown[0].events[0].is_liked_by("u1"));
        let unliked = toggle_like(&liked, 0, "A", "u1");
        assert_eq!(unliked, it);
    }

    #[test]
    fn test_user_events_are_not_special() {
        let mut it = itinerary_with(&[&["A"]]);
        it.daily_breakdown[0].events[0].source = Some(EventSource::User);
        let next = delete_event(&it, 0, "A");
        assert!(next.daily_breakdown[0].events.is_empty());
    }
}
