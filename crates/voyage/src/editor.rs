use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use voyage_api::{EventPatch, EventSource, Itinerary, ItineraryItem};
use voyage_core::{
    canonicalize_now, new_event_id, resolve_drop, DropGesture, HistoryStack, ItineraryEdit,
};

use crate::config::EditorConfig;
use crate::repository::TripRepository;
use crate::trip::Trip;

/// Editing session for one trip
///
/// The only way to change the itinerary. Every change goes through an
/// [`ItineraryEdit`], lands in the history as a full snapshot, and is then
/// handed to the repository. The itinerary shown to the user is always the
/// snapshot under the history pointer, so the two cannot drift apart.
///
/// Every mutating method returns whether the itinerary changed. Edits that
/// point at missing days or events, cross-day moves, and edits that produce
/// an identical itinerary change nothing and record nothing.
pub struct TripEditor {
    trip_id: String,
    trip_name: String,
    updated_at: DateTime<Utc>,
    history: HistoryStack<Itinerary>,
    config: EditorConfig,
    repository: Option<Arc<dyn TripRepository>>,
}

impl TripEditor {
    /// Open an editing session. The itinerary is canonicalized first.
    pub fn open(
        trip: Trip,
        config: EditorConfig,
        repository: Option<Arc<dyn TripRepository>>,
    ) -> Self {
        let itinerary = canonicalize_now(&trip.itinerary);
        info!(
            "[TripEditor] open trip={} days={} events={} history_limit={:?}",
            trip.id,
            itinerary.day_count(),
            itinerary.event_count(),
            config.history_limit
        );

        Self {
            trip_id: trip.id,
            trip_name: trip.name,
            updated_at: trip.updated_at,
            history: HistoryStack::with_limit(itinerary, config.history_limit),
            config,
            repository,
        }
    }

    /// Session with default settings and no storage
    pub fn detached(trip: Trip) -> Self {
        Self::open(trip, EditorConfig::default(), None)
    }

    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    /// The itinerary as currently shown
    pub fn itinerary(&self) -> &Itinerary {
        self.history.current()
    }

    /// Current trip record, as it would be saved
    pub fn trip(&self) -> Trip {
        Trip {
            id: self.trip_id.clone(),
            name: self.trip_name.clone(),
            itinerary: self.history.current().clone(),
            updated_at: self.updated_at,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the itinerary wholesale (e.g. after regeneration). Clears history.
    pub fn load_itinerary(&mut self, itinerary: Itinerary) {
        let itinerary = canonicalize_now(&itinerary);
        info!(
            "[TripEditor] load trip={} days={} events={}",
            self.trip_id,
            itinerary.day_count(),
            itinerary.event_count()
        );
        self.history.reset(itinerary);
        self.touch_and_persist();
    }

    /// Apply an edit and record it. Returns whether anything changed.
    pub fn apply(&mut self, edit: &ItineraryEdit) -> bool {
        let next = match edit.try_apply(self.history.current()) {
            Ok(next) => next,
            Err(reason) => {
                debug!("[TripEditor] {} ignored: {}", edit, reason);
                return false;
            }
        };

        if next == *self.history.current() {
            debug!("[TripEditor] {} left the itinerary unchanged", edit);
            return false;
        }

        self.history.commit_labeled(next, edit.display_name());
        info!(
            "[TripEditor] commit trip={} edit=\"{}\" pointer={} len={}",
            self.trip_id,
            edit,
            self.history.pointer(),
            self.history.len()
        );
        self.touch_and_persist();
        true
    }

    pub fn add_event(&mut self, day_index: usize, event: ItineraryItem) -> bool {
        self.apply(&ItineraryEdit::AddEvent { day_index, event })
    }

    /// Create a user-authored event from `draft` with a fresh id.
    ///
    /// Returns the new id, or `None` when the day does not exist.
    pub fn add_user_event(&mut self, day_index: usize, draft: EventPatch) -> Option<String> {
        let id = new_event_id(&self.config.user_id_prefix);
        let mut event = draft.into_item(id.clone());
        event.source = Some(EventSource::User);

        self.add_event(day_index, event).then_some(id)
    }

    pub fn update_event(&mut self, day_index: usize, id: &str, patch: EventPatch) -> bool {
        self.apply(&ItineraryEdit::UpdateEvent {
            day_index,
            id: id.to_string(),
            patch,
        })
    }

    pub fn delete_event(&mut self, day_index: usize, id: &str) -> bool {
        self.apply(&ItineraryEdit::DeleteEvent {
            day_index,
            id: id.to_string(),
        })
    }

    pub fn reorder_event(&mut self, day_index: usize, from_index: usize, to_index: usize) -> bool {
        self.apply(&ItineraryEdit::ReorderEvent {
            day_index,
            from_index,
            to_index,
        })
    }

    pub fn toggle_like(&mut self, day_index: usize, id: &str, user_id: &str) -> bool {
        self.apply(&ItineraryEdit::ToggleLike {
            day_index,
            id: id.to_string(),
            user_id: user_id.to_string(),
        })
    }

    /// Resolve a finished drag and apply the resulting reorder
    pub fn apply_drop(&mut self, gesture: &DropGesture) -> bool {
        match resolve_drop(gesture) {
            Some(intent) => self.apply(&intent.into_edit()),
            None => {
                debug!(
                    "[TripEditor] drop from {:?} onto {:?} ignored",
                    gesture.source, gesture.target
                );
                false
            }
        }
    }

    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let label = self.history.next_undo_label().map(str::to_string);
        self.history.undo();
        info!(
            "[TripEditor] undo trip={} edit={:?} pointer={}",
            self.trip_id,
            label,
            self.history.pointer()
        );
        self.touch_and_persist();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        self.history.redo();
        info!(
            "[TripEditor] redo trip={} edit={:?} pointer={}",
            self.trip_id,
            self.history.next_undo_label(),
            self.history.pointer()
        );
        self.touch_and_persist();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Name of the edit `undo` would revert, e.g. "Delete event"
    pub fn undo_label(&self) -> Option<&str> {
        self.history.next_undo_label()
    }

    /// Name of the edit `redo` would reapply
    pub fn redo_label(&self) -> Option<&str> {
        self.history.next_redo_label()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Hand the trip to storage. Failures are logged and never undo the edit.
    fn touch_and_persist(&mut self) {
        self.updated_at = Utc::now();

        if !self.config.persist_on_commit {
            return;
        }
        let Some(repository) = &self.repository else {
            return;
        };
        if let Err(e) = repository.save(&self.trip()) {
            warn!("[TripEditor] failed to save trip {}: {}", self.trip_id, e);
        }
    }
}
