// --- File: crates/schedulify_view/src/schedule.rs ---
use chrono::NaiveDate;
use schedulify_client::Event;

/// Placeholder text shown under the date heading when the day has no events.
pub const NO_EVENTS_PLACEHOLDER: &str = "No events scheduled for this date";

/// One day's schedule: a formatted heading plus venue sections.
///
/// A fresh value is built on every render and fully replaces the previous
/// one; nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    pub heading: String,
    pub sections: Vec<VenueSection>,
}

impl ScheduleView {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// All of one venue's events for the day, in the order the service
/// returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSection {
    pub venue: String,
    pub rows: Vec<EventRow>,
}

/// A single schedule line. `id` is the binding for the row's delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub time: String,
}

/// Projects the full event list into the selected day's grouped view.
///
/// Events are filtered to the selected date, then partitioned by venue.
/// Venues appear in first-seen order; within a venue, rows keep the input
/// order. The projection is a pure function of its arguments.
pub fn render_schedule(events: &[Event], selected_date: NaiveDate) -> ScheduleView {
    let date_key = selected_date.format("%Y-%m-%d").to_string();
    let heading = format_date_heading(selected_date);

    let mut sections: Vec<VenueSection> = Vec::new();
    for event in events.iter().filter(|e| e.date == date_key) {
        let row = EventRow {
            id: event.id,
            name: event.name.clone(),
            time: event.time.clone(),
        };
        match sections.iter_mut().find(|s| s.venue == event.venue) {
            Some(section) => section.rows.push(row),
            None => sections.push(VenueSection {
                venue: event.venue.clone(),
                rows: vec![row],
            }),
        }
    }

    ScheduleView { heading, sections }
}

/// Long-form date heading, fixed English locale.
///
/// `2024-06-01` renders as `Saturday, June 1, 2024`.
pub fn format_date_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
