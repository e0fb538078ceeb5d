// --- File: crates/schedulify_view/src/form.rs ---
use chrono::{NaiveDate, NaiveTime};
use schedulify_client::{NewEventInput, TimeSlot};
use thiserror::Error;

// --- Error Handling ---
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("All fields are required")]
    MissingField,
    #[error("Invalid date format. Use YYYY-MM-DD format")]
    InvalidDate,
    #[error("Invalid time format. Use HH:mm format")]
    InvalidTime,
    #[error("End time must be after start time")]
    EmptyInterval,
}

/// Per-submission-cycle state.
///
/// `AwaitingSelection` is only left by adopting a slot or by editing the
/// fields and resubmitting; there is no timeout-driven exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    AwaitingSelection,
}

/// The submission form's field state.
///
/// Failure paths leave the fields untouched so the operator can correct
/// and resubmit; only a confirmed create resets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
}

impl EventForm {
    /// Clears every field after a confirmed create.
    pub fn reset(&mut self) {
        *self = EventForm::default();
    }

    /// Writes an alternative slot into the time fields.
    ///
    /// Everything else stays as typed and nothing is submitted; the
    /// operator has to retry explicitly.
    pub fn adopt_slot(&mut self, slot: &TimeSlot) {
        self.start_time = slot.start.clone();
        self.end_time = slot.end.clone();
    }

    /// Validates the fields into a create input.
    pub fn validate(&self) -> Result<NewEventInput, FormError> {
        let fields = [
            &self.name,
            &self.date,
            &self.start_time,
            &self.end_time,
            &self.venue,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(FormError::MissingField);
        }

        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(FormError::InvalidDate);
        }

        let start = parse_time(&self.start_time)?;
        let end = parse_time(&self.end_time)?;
        if start >= end {
            return Err(FormError::EmptyInterval);
        }

        Ok(NewEventInput {
            name: self.name.trim().to_string(),
            date: self.date.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            venue: self.venue.trim().to_string(),
        })
    }
}

fn parse_time(token: &str) -> Result<NaiveTime, FormError> {
    NaiveTime::parse_from_str(token.trim(), "%H:%M").map_err(|_| FormError::InvalidTime)
}
