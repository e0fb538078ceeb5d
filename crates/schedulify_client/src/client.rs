// --- File: crates/schedulify_client/src/client.rs ---
use crate::models::{ApiMessage, ConflictResponse, Event, NewEventInput, NewEventRequest, TimeSlot};
use reqwest::{Client, StatusCode};
use schedulify_common::http::client::create_client;
use schedulify_config::ServiceConfig;
use thiserror::Error;
use tracing::debug;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Scheduling service request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to parse scheduling service response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Scheduling service returned an error: Status={status}, Message='{message}'")]
    Api { status: StatusCode, message: String },
}

/// Classified result of a create request.
///
/// Conflict is recoverable state rather than an error: it carries the
/// service's alternative slots so the caller can offer them for adoption.
/// Collapsing it into `Rejected` would lose that payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Conflict(Vec<TimeSlot>),
    Rejected { message: String },
}

const FALLBACK_CREATE_MESSAGE: &str = "Failed to schedule event";
const FALLBACK_LIST_MESSAGE: &str = "Failed to load schedule";
const FALLBACK_DELETE_MESSAGE: &str = "Failed to delete event";

/// Client for the external scheduling service.
///
/// Mediates every state-changing and state-reading interaction with the
/// service and classifies responses into outcomes the renderer can act on.
/// Holds no event state of its own; callers re-fetch after every mutation.
pub struct SchedulerClient {
    client: Client,
    base_url: String,
}

impl SchedulerClient {
    /// Creates a client from the service section of the app configuration.
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        let client = create_client(config.request_timeout_secs, true)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        SchedulerClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits a new event and classifies the response.
    ///
    /// The `time` field is derived from the input's start and end tokens.
    /// Transport failures and a malformed conflict body surface as errors;
    /// everything the service actually decided comes back as a
    /// [`CreateOutcome`].
    pub async fn create_event(&self, input: &NewEventInput) -> Result<CreateOutcome, ClientError> {
        let request = NewEventRequest::from(input);
        debug!(
            "Creating event '{}' at {} on {}",
            request.name, request.venue, request.date
        );

        let response = self
            .client
            .post(format!("{}/events", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        classify_create_response(status, &body)
    }

    /// Fetches the full event collection.
    ///
    /// The service does not filter by date; projecting out the selected
    /// day's schedule is the renderer's job.
    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        let response = self
            .client
            .get(format!("{}/events", self.base_url))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status,
                message: message_or(&body, FALLBACK_LIST_MESSAGE),
            });
        }

        let events: Vec<Event> = serde_json::from_str(&body)?;
        debug!("Fetched {} events", events.len());
        Ok(events)
    }

    /// Deletes an event by id.
    ///
    /// Deleting an id the service no longer knows is service-defined
    /// behavior; whatever status comes back is surfaced without an
    /// already-deleted special case.
    pub async fn delete_event(&self, id: i64) -> Result<(), ClientError> {
        debug!("Deleting event {}", id);
        let response = self
            .client
            .delete(format!("{}/events/{}", self.base_url, id))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        Err(ClientError::Api {
            status,
            message: message_or(&body, FALLBACK_DELETE_MESSAGE),
        })
    }
}

/// Maps a create response to its outcome.
///
/// 2xx confirms creation (the echoed payload is ignored; callers reload the
/// list instead of trusting it), 409 carries the alternatives sequence, and
/// any other status is a rejection with the service's message when the body
/// has one.
pub fn classify_create_response(
    status: StatusCode,
    body: &str,
) -> Result<CreateOutcome, ClientError> {
    if status.is_success() {
        return Ok(CreateOutcome::Created);
    }

    if status == StatusCode::CONFLICT {
        let conflict: ConflictResponse = serde_json::from_str(body)?;
        if let Some(message) = &conflict.message {
            debug!("Service reported conflict: {}", message);
        }
        return Ok(CreateOutcome::Conflict(conflict.alternatives));
    }

    Ok(CreateOutcome::Rejected {
        message: message_or(body, FALLBACK_CREATE_MESSAGE),
    })
}

/// Extracts the service's `message` field, falling back when the body is
/// not the expected shape.
fn message_or(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .unwrap_or_else(|| fallback.to_string())
}
