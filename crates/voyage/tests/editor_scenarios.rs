//! End-to-end editing sessions through `TripEditor`

use std::sync::Arc;

use voyage::{
    DailyItinerary, EditorConfig, EventPatch, Itinerary, ItineraryItem, JsonDirTripRepository,
    Trip, TripEditor, TripRepository,
};

fn ids(editor: &TripEditor, day_index: usize) -> Vec<String> {
    editor.itinerary().daily_breakdown[day_index]
        .events
        .iter()
        .map(|e| e.id.clone())
        .collect()
}

fn three_event_trip() -> Trip {
    Trip::new(
        "kyoto",
        "Kyoto",
        Itinerary::new("Kyoto")
            .with_destination("Kyoto")
            .with_duration("2 days")
            .with_day(
                DailyItinerary::new("Day 1")
                    .with_date("2025-04-02")
                    .with_event(ItineraryItem::new("A", "08:00").with_activity("Fushimi Inari"))
                    .with_event(ItineraryItem::new("B", "11:00").with_activity("Tofuku-ji"))
                    .with_event(ItineraryItem::new("C", "15:00").with_activity("Gion")),
            )
            .with_day(
                DailyItinerary::new("Day 2")
                    .with_date("2025-04-03")
                    .with_event(ItineraryItem::new("D", "09:00").with_activity("Arashiyama")),
            ),
    )
}

#[test]
fn drag_first_event_below_second() {
    let mut editor = TripEditor::detached(three_event_trip());
    assert!(editor.reorder_event(0, 0, 2));
    assert_eq!(ids(&editor, 0), vec!["B", "A", "C"]);
}

#[test]
fn add_then_delete() {
    let mut trip = three_event_trip();
    trip.itinerary.daily_breakdown[0].events.truncate(2);
    let mut editor = TripEditor::detached(trip);

    assert!(editor.add_event(0, ItineraryItem::new("x", "").with_activity("Visit Park")));
    assert_eq!(ids(&editor, 0), vec!["A", "B", "x"]);

    assert!(editor.delete_event(0, "A"));
    assert_eq!(ids(&editor, 0), vec!["B", "x"]);
}

#[test]
fn undo_twice_then_redo_twice() {
    let mut editor = TripEditor::detached(three_event_trip());
    let c0 = editor.itinerary().clone();

    editor.update_event(0, "A", EventPatch::new().time("07:30"));
    let c1 = editor.itinerary().clone();
    editor.delete_event(0, "C");
    editor.toggle_like(1, "D", "traveller-1");
    let c3 = editor.itinerary().clone();

    assert!(editor.undo());
    assert!(editor.undo());
    assert_eq!(*editor.itinerary(), c1);

    assert!(editor.undo());
    assert_eq!(*editor.itinerary(), c0);
    assert!(!editor.can_undo());

    assert!(editor.redo());
    assert!(editor.redo());
    assert!(editor.redo());
    assert_eq!(*editor.itinerary(), c3);
    assert!(!editor.can_redo());
}

#[test]
fn new_edit_after_undo_discards_redo() {
    let mut editor = TripEditor::detached(three_event_trip());
    editor.delete_event(0, "A");
    editor.undo();
    assert!(editor.can_redo());
    assert_eq!(editor.redo_label(), Some("Delete event"));

    editor.delete_event(0, "B");
    assert!(!editor.can_redo());
    assert!(!editor.redo());
    assert_eq!(ids(&editor, 0), vec!["A", "C"]);
}

#[test]
fn update_unknown_event_changes_nothing() {
    let mut editor = TripEditor::detached(three_event_trip());
    let before = editor.itinerary().clone();
    assert!(!editor.update_event(1, "nonexistent", EventPatch::new().activity("X")));
    assert_eq!(*editor.itinerary(), before);
    assert!(!editor.can_undo());
}

#[test]
fn stale_delete_after_undo_is_harmless() {
    let mut editor = TripEditor::detached(three_event_trip());
    let id = editor
        .add_user_event(1, EventPatch::new().activity("Kaiseki dinner"))
        .unwrap();
    editor.undo();

    // the view still shows a delete button for the undone event
    assert!(!editor.delete_event(1, &id));
    assert!(editor.can_redo());
}

#[test]
fn session_is_saved_to_json_dir() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(JsonDirTripRepository::new(dir.path()));
    let mut editor = TripEditor::open(three_event_trip(), EditorConfig::default(), Some(repo.clone()));

    editor.reorder_event(0, 2, 0);
    editor.toggle_like(0, "C", "traveller-2");

    let saved = repo.load("kyoto").unwrap().unwrap();
    assert_eq!(saved.itinerary, *editor.itinerary());
    assert_eq!(
        saved.itinerary.daily_breakdown[0].event_ids(),
        vec!["C", "A", "B"]
    );
    assert!(saved.itinerary.daily_breakdown[0].events[0].is_liked_by("traveller-2"));
}
