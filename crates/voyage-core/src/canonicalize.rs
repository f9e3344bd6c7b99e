//! Load-time normalization of itineraries
//!
//! Generated itineraries may arrive with blank or repeated event ids and with
//! no source tag. Editing relies on every event having a unique id, so this
//! pass runs once when an itinerary enters the editor. Mutations never call it.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;
use voyage_api::{EventSource, Itinerary};

/// Give every event a unique non-empty id and a source tag.
///
/// Events missing an id (or repeating one seen earlier in day/event order) get
/// `evt-{day}-{event}-{now_millis}`. Untagged events become [`EventSource::Ai`].
/// Order and every other field are left alone.
pub fn canonicalize(itinerary: &Itinerary, now_millis: i64) -> Itinerary {
    let mut next = itinerary.clone();

    let mut taken: HashSet<String> = itinerary
        .event_ids()
        .into_iter()
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut reassigned = 0usize;

    for (day_index, day) in next.daily_breakdown.iter_mut().enumerate() {
        for (event_index, event) in day.events.iter_mut().enumerate() {
            if event.id.trim().is_empty() || !seen.insert(event.id.clone()) {
                let base = format!("evt-{}-{}-{}", day_index, event_index, now_millis);
                let mut candidate = base.clone();
                let mut suffix = 1;
                while taken.contains(&candidate) {
                    candidate = format!("{}-{}", base, suffix);
                    suffix += 1;
                }
                taken.insert(candidate.clone());
                seen.insert(candidate.clone());
                event.id = candidate;
                reassigned += 1;
            }

            if event.source.is_none() {
                event.source = Some(EventSource::Ai);
            }
        }
    }

    if reassigned > 0 {
        debug!(
            "[Canonicalize] assigned {} event ids in '{}'",
            reassigned, next.title
        );
    }

    next
}

/// [`canonicalize`] stamped with the current wall clock
pub fn canonicalize_now(itinerary: &Itinerary) -> Itinerary {
    canonicalize(itinerary, chrono::Utc::now().timestamp_millis())
}

/// Fresh id for an event authored in the editor, e.g. `user-5c1e…`
pub fn new_event_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
