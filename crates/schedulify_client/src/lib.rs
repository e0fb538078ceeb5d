// --- File: crates/schedulify_client/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod models;

// Re-export the client surface for the frontend service
pub use client::{classify_create_response, ClientError, CreateOutcome, SchedulerClient};
pub use models::{ApiMessage, ConflictResponse, Event, NewEventInput, NewEventRequest, TimeSlot};
