// --- File: crates/schedulify_view/src/lib.rs ---
// Declare modules within this crate
pub mod banner;
pub mod conflict;
pub mod form;
pub mod schedule;
#[cfg(test)]
mod schedule_proptest;
#[cfg(test)]
mod schedule_test;

pub use banner::{Banner, Severity};
pub use conflict::{render_conflict, ConflictView, SlotControl, OVERLAP_MESSAGE};
pub use form::{EventForm, FormError, Phase};
pub use schedule::{
    format_date_heading, render_schedule, EventRow, ScheduleView, VenueSection,
    NO_EVENTS_PLACEHOLDER,
};
