use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voyage_api::Itinerary;

/// The persisted trip record. It exclusively owns its itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub itinerary: Itinerary,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn new(id: impl Into<String>, name: impl Into<String>, itinerary: Itinerary) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            itinerary,
            updated_at: Utc::now(),
        }
    }
}
