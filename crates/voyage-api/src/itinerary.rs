use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// EventSource - who authored an event
// =============================================================================

/// Origin of an itinerary event.
///
/// Only `User` events get edit/delete controls in the detail view. That is a
/// presentation policy: the mutation operations never look at this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    /// Produced by the itinerary generation step
    Ai,
    /// Authored by a traveller in the editor
    User,
}

impl EventSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSource::Ai => "ai",
            EventSource::User => "user",
        }
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// ItineraryItem
// =============================================================================

/// One activity entry within a day.
///
/// `id` is unique within the owning itinerary and never changes after the
/// event has been created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    /// Stable identifier (accepted as `identifier` on input)
    #[serde(default, alias = "identifier")]
    pub id: String,

    /// Free text or `HH:MM`; a sorting hint, not enforced
    #[serde(default)]
    pub time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Display cost, e.g. "$25" or "Free"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time_to_next: Option<String>,

    /// `None` only before canonicalization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EventSource>,

    /// User ids that liked this event. Membership matters, order does not.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub likes: Vec<String>,
}

impl ItineraryItem {
    /// Create an event with the given id and time
    pub fn new(id: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            ..Default::default()
        }
    }

    /// Builder: set the activity title
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder: set the display cost
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    /// Builder: set the source tag
    pub fn with_source(mut self, source: EventSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Whether the detail view should offer edit/delete controls
    pub fn is_user_authored(&self) -> bool {
        self.source == Some(EventSource::User)
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|u| u == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Add `user_id` to the likes if absent, otherwise remove it.
    ///
    /// Returns whether the user likes the event afterwards.
    pub fn toggle_like(&mut self, user_id: &str) -> bool {
        if self.is_liked_by(user_id) {
            self.likes.retain(|u| u != user_id);
            false
        } else {
            self.likes.push(user_id.to_string());
            true
        }
    }

    /// Title for history labels and logs
    pub fn display_title(&self) -> &str {
        self.activity.as_deref().unwrap_or(self.id.as_str())
    }
}

// =============================================================================
// EventPatch - partial update for an event
// =============================================================================

/// Partial update applied to an [`ItineraryItem`].
///
/// `None` fields leave the target untouched. `id` is accepted so that patches
/// built from a whole event deserialize cleanly, but it is never applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, alias = "identifier", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time_to_next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EventSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<String>>,
}

impl EventPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    /// Whether merging this patch would change nothing on any event
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.activity.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.cost.is_none()
            && self.image_url.is_none()
            && self.travel_time_to_next.is_none()
            && self.source.is_none()
            && self.likes.is_none()
    }

    /// Merge the patch onto `item`, leaving `item.id` untouched.
    pub fn merge_into(&self, item: &mut ItineraryItem) {
        if let Some(time) = &self.time {
            item.time = time.clone();
        }
        if let Some(activity) = &self.activity {
            item.activity = Some(activity.clone());
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone());
        }
        if let Some(location) = &self.location {
            item.location = Some(location.clone());
        }
        if let Some(cost) = &self.cost {
            item.cost = Some(cost.clone());
        }
        if let Some(image_url) = &self.image_url {
            item.image_url = Some(image_url.clone());
        }
        if let Some(travel) = &self.travel_time_to_next {
            item.travel_time_to_next = Some(travel.clone());
        }
        if let Some(source) = self.source {
            item.source = Some(source);
        }
        if let Some(likes) = &self.likes {
            item.likes = likes.clone();
        }
    }

    /// Build a new event from this patch using `id` as its identifier
    pub fn into_item(self, id: impl Into<String>) -> ItineraryItem {
        let mut item = ItineraryItem::new(id, String::new());
        self.merge_into(&mut item);
        item
    }
}

// =============================================================================
// DailyItinerary / Itinerary
// =============================================================================

/// One day of the plan. Event order is chronological within the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyItinerary {
    /// Label such as "Day 1"
    pub day: String,

    /// Optional ISO date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default)]
    pub events: Vec<ItineraryItem>,
}

impl DailyItinerary {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            date: None,
            events: Vec::new(),
        }
    }

    /// Builder: set the ISO date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Builder: append an event
    pub fn with_event(mut self, event: ItineraryItem) -> Self {
        self.events.push(event);
        self
    }

    /// Parse `date` when it is a valid ISO calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Position of the event with the given id within this day
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    pub fn event_ids(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.id.as_str()).collect()
    }
}

/// The full day-by-day plan for one trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub title: String,

    /// Trip legs in travel order
    #[serde(default)]
    pub destinations: Vec<String>,

    /// Display string, e.g. "5 days"; not validated against the day count
    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub daily_breakdown: Vec<DailyItinerary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_total_cost: Option<f64>,
}

impl Itinerary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder: append a destination
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destinations.push(destination.into());
        self
    }

    /// Builder: set the duration label
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Builder: append a day
    pub fn with_day(mut self, day: DailyItinerary) -> Self {
        self.daily_breakdown.push(day);
        self
    }

    pub fn day(&self, day_index: usize) -> Option<&DailyItinerary> {
        self.daily_breakdown.get(day_index)
    }

    pub fn day_count(&self) -> usize {
        self.daily_breakdown.len()
    }

    pub fn event_count(&self) -> usize {
        self.daily_breakdown.iter().map(|d| d.events.len()).sum()
    }

    /// Every event id in day/event order
    pub fn event_ids(&self) -> Vec<&str> {
        self.daily_breakdown
            .iter()
            .flat_map(|d| d.events.iter().map(|e| e.id.as_str()))
            .collect()
    }

    pub fn contains_event(&self, id: &str) -> bool {
        self.daily_breakdown
            .iter()
            .any(|d| d.events.iter().any(|e| e.id == id))
    }

    /// Locate an event as `(day_index, event_index)`
    pub fn find_event(&self, id: &str) -> Option<(usize, usize)> {
        self.daily_breakdown
            .iter()
            .enumerate()
            .find_map(|(day_index, day)| day.position_of(id).map(|i| (day_index, i)))
    }

    pub fn event(&self, id: &str) -> Option<&ItineraryItem> {
        self.find_event(id)
            .map(|(d, e)| &self.daily_breakdown[d].events[e])
    }

    /// Whether every event id is non-empty and unique
    pub fn has_unique_event_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.daily_breakdown
            .iter()
            .flat_map(|d| d.events.iter())
            .all(|e| !e.id.trim().is_empty() && seen.insert(e.id.as_str()))
    }
}
