// --- File: crates/schedulify_client/src/models.rs ---
use serde::{Deserialize, Serialize};

/// A venue booking as persisted by the scheduling service.
///
/// The client only ever holds a read-only projection of these: ids are
/// assigned by the service and stable for the event's lifetime, and the
/// service guarantees that no two events at the same venue overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    /// Calendar date in YYYY-MM-DD form; selects which day's schedule the
    /// event belongs to.
    pub date: String,
    /// Display interval, two HH:MM tokens joined by " - ".
    pub time: String,
    /// Grouping key; the dimension the service checks overlap over.
    pub venue: String,
}

/// An alternative slot suggested by the service in a conflict response.
///
/// Transient: slots exist only to pre-fill the form's time fields and are
/// never persisted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

impl TimeSlot {
    /// Display label in the same shape as an `Event` time field.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// Validated form input for a create request, before wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventInput {
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
}

/// Body of `POST /events`.
#[derive(Debug, Serialize)]
pub struct NewEventRequest {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

impl From<&NewEventInput> for NewEventRequest {
    fn from(input: &NewEventInput) -> Self {
        NewEventRequest {
            name: input.name.clone(),
            date: input.date.clone(),
            time: format!("{} - {}", input.start_time, input.end_time),
            venue: input.venue.clone(),
        }
    }
}

/// Body of a 409 response.
///
/// Named contract type so the renderer depends on a stable structure rather
/// than the positional shape of the service's JSON.
#[derive(Debug, Deserialize)]
pub struct ConflictResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Suggested non-overlapping slots; absent means none to offer.
    #[serde(default)]
    pub alternatives: Vec<TimeSlot>,
}

/// Body of any other non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
