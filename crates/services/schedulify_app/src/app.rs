// --- File: crates/services/schedulify_app/src/app.rs ---
use chrono::NaiveDate;
use schedulify_client::{ClientError, CreateOutcome, SchedulerClient};
use schedulify_config::UiConfig;
use schedulify_view::{
    render_conflict, render_schedule, Banner, ConflictView, EventForm, Phase, ScheduleView,
    Severity, NO_EVENTS_PLACEHOLDER,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

const CREATED_MESSAGE: &str = "Event scheduled successfully!";
const DELETED_MESSAGE: &str = "Event deleted successfully!";
const SLOT_ADOPTED_MESSAGE: &str = "Time updated! Please try scheduling again.";
const CONNECT_ERROR_MESSAGE: &str =
    "Error connecting to server. Make sure the backend is running.";

/// A form field addressable by the `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Date,
    Start,
    End,
    Venue,
}

impl std::str::FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "date" => Ok(FormField::Date),
            "start" => Ok(FormField::Start),
            "end" => Ok(FormField::End),
            "venue" => Ok(FormField::Venue),
            other => Err(format!("Unknown field '{other}'")),
        }
    }
}

/// A queued state transition.
///
/// Every user action and timer completion becomes one of these. The single
/// consumer applies them strictly in sequence, so one operation's whole
/// request/classify/render cycle finishes before the next begins and two
/// in-flight responses can never race or arrive out of order.
#[derive(Debug)]
pub enum Action {
    /// Replace the form fields and submit them in one user action.
    SubmitNew(EventForm),
    /// Submit whatever the form currently holds.
    Resubmit,
    /// Overwrite a single form field.
    EditField { field: FormField, value: String },
    /// Adopt the indexed alternative from the active conflict.
    PickSlot(usize),
    /// Select another day and reload its schedule.
    ChangeDate(NaiveDate),
    /// Delete an event, then reload the current day.
    Delete(i64),
    /// Reload the current day's schedule.
    Refresh,
    /// Clear the banner if `seq` is still the active one.
    ClearBanner(u64),
    /// Stop the consumer loop.
    Quit,
}

/// The workflow state: form, phase, selected day, and the views built from
/// the last completed operation.
///
/// The view fields are only ever replaced wholesale at the end of an
/// operation; nothing outside [`App::apply`] mutates them.
pub struct App {
    client: SchedulerClient,
    pub form: EventForm,
    pub phase: Phase,
    pub selected_date: NaiveDate,
    pub schedule: Option<ScheduleView>,
    pub conflict: Option<ConflictView>,
    pub banner: Option<Banner>,
    banner_seq: u64,
    banner_auto_clear: Duration,
    actions: mpsc::UnboundedSender<Action>,
}

impl App {
    /// Builds the app state.
    ///
    /// `actions` is the same sender the frontend feeds; the app uses it for
    /// its banner-clear timers so those run through the queue like any
    /// other transition.
    pub fn new(
        client: SchedulerClient,
        ui: &UiConfig,
        selected_date: NaiveDate,
        actions: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let form = EventForm {
            date: selected_date.to_string(),
            ..EventForm::default()
        };
        App {
            client,
            form,
            phase: Phase::Idle,
            selected_date,
            schedule: None,
            conflict: None,
            banner: None,
            banner_seq: 0,
            banner_auto_clear: Duration::from_secs(ui.banner_auto_clear_secs),
            actions,
        }
    }

    /// Consumes the queue until a `Quit` arrives, printing the rendered
    /// state after every transition.
    pub async fn run(mut self, mut queue: mpsc::UnboundedReceiver<Action>) {
        while let Some(action) = queue.recv().await {
            if matches!(action, Action::Quit) {
                info!("Shutting down");
                break;
            }
            let silent = matches!(action, Action::ClearBanner(_));
            self.apply(action).await;
            if !silent {
                println!("{}", self.render_text());
            }
        }
    }

    /// Applies one state transition to completion.
    pub async fn apply(&mut self, action: Action) {
        match action {
            Action::SubmitNew(form) => {
                self.form = form;
                self.submit().await;
            }
            Action::Resubmit => self.submit().await,
            Action::EditField { field, value } => {
                match field {
                    FormField::Name => self.form.name = value,
                    FormField::Date => self.form.date = value,
                    FormField::Start => self.form.start_time = value,
                    FormField::End => self.form.end_time = value,
                    FormField::Venue => self.form.venue = value,
                }
                // A manual edit abandons any pending slot selection.
                if self.phase == Phase::AwaitingSelection {
                    self.phase = Phase::Idle;
                    self.conflict = None;
                }
            }
            Action::PickSlot(index) => self.pick_slot(index),
            Action::ChangeDate(date) => {
                self.selected_date = date;
                self.form.date = date.to_string();
                self.refresh().await;
            }
            Action::Delete(id) => self.delete(id).await,
            Action::Refresh => self.refresh().await,
            Action::ClearBanner(seq) => {
                if seq == self.banner_seq {
                    self.banner = None;
                }
            }
            Action::Quit => {}
        }
    }

    async fn submit(&mut self) {
        let input = match self.form.validate() {
            Ok(input) => input,
            Err(err) => {
                self.show_banner(Banner::error(err.to_string()));
                return;
            }
        };

        self.phase = Phase::Submitting;
        match self.client.create_event(&input).await {
            Ok(CreateOutcome::Created) => {
                self.phase = Phase::Idle;
                self.conflict = None;
                let date = NaiveDate::parse_from_str(&input.date, "%Y-%m-%d")
                    .unwrap_or(self.selected_date);
                self.form.reset();
                // Keep the submitted date selected so the reload shows it.
                self.form.date = input.date.clone();
                self.selected_date = date;
                self.show_banner(Banner::success(CREATED_MESSAGE));
                self.refresh().await;
            }
            Ok(CreateOutcome::Conflict(alternatives)) => {
                let view = render_conflict(&alternatives);
                self.phase = Phase::AwaitingSelection;
                self.show_banner(Banner::warning(view.message.clone()));
                self.conflict = Some(view);
            }
            Ok(CreateOutcome::Rejected { message }) => {
                self.phase = Phase::Idle;
                self.show_banner(Banner::error(message));
            }
            Err(err) => {
                self.phase = Phase::Idle;
                warn!("Create request failed: {}", err);
                self.show_banner(Banner::error(CONNECT_ERROR_MESSAGE));
            }
        }
    }

    fn pick_slot(&mut self, index: usize) {
        let Some(conflict) = &self.conflict else {
            self.show_banner(Banner::error("There is no conflict to resolve"));
            return;
        };
        match conflict.slot(index) {
            Some(slot) => {
                let slot = slot.clone();
                self.form.adopt_slot(&slot);
                self.phase = Phase::Idle;
                self.conflict = None;
                self.show_banner(Banner::info(SLOT_ADOPTED_MESSAGE));
            }
            None => {
                self.show_banner(Banner::error(format!("No alternative with index {index}")));
            }
        }
    }

    async fn delete(&mut self, id: i64) {
        match self.client.delete_event(id).await {
            Ok(()) => {
                self.show_banner(Banner::success(DELETED_MESSAGE));
                self.refresh().await;
            }
            Err(ClientError::Api { status, message }) => {
                warn!("Delete of {} rejected: {} {}", id, status, message);
                self.show_banner(Banner::error(format!("Failed to delete event: {message}")));
            }
            Err(err) => {
                warn!("Delete request failed: {}", err);
                self.show_banner(Banner::error(CONNECT_ERROR_MESSAGE));
            }
        }
    }

    async fn refresh(&mut self) {
        match self.client.list_events().await {
            Ok(events) => {
                self.schedule = Some(render_schedule(&events, self.selected_date));
            }
            Err(ClientError::Api { status, message }) => {
                warn!("List rejected: {} {}", status, message);
                self.show_banner(Banner::error(format!("Failed to load schedule: {message}")));
            }
            Err(err) => {
                warn!("List request failed: {}", err);
                self.show_banner(Banner::error(CONNECT_ERROR_MESSAGE));
            }
        }
    }

    /// Replaces the banner and, for auto-clearing severities, schedules the
    /// clear through the action queue. The sequence number keeps a slow
    /// timer from wiping a banner raised after it.
    fn show_banner(&mut self, banner: Banner) {
        self.banner_seq += 1;
        if banner.severity.auto_clears() {
            let seq = self.banner_seq;
            let delay = self.banner_auto_clear;
            let actions = self.actions.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = actions.send(Action::ClearBanner(seq));
            });
        }
        self.banner = Some(banner);
    }

    /// Renders the current state as terminal text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(banner) = &self.banner {
            out.push_str(&format!("[{}] {}\n", severity_tag(banner.severity), banner.text));
        }

        if let Some(schedule) = &self.schedule {
            out.push_str(&format!("=== {} ===\n", schedule.heading));
            if schedule.is_empty() {
                out.push_str(NO_EVENTS_PLACEHOLDER);
                out.push('\n');
            } else {
                for section in &schedule.sections {
                    out.push_str(&format!("-- {}\n", section.venue));
                    for row in &section.rows {
                        out.push_str(&format!(
                            "   {}  {}  (delete {})\n",
                            row.name, row.time, row.id
                        ));
                    }
                }
            }
        }

        if let Some(conflict) = &self.conflict {
            out.push_str(&conflict.message);
            out.push('\n');
            if conflict.slots.is_empty() {
                out.push_str("No alternative slots were offered.\n");
            } else {
                out.push_str("Available alternatives:\n");
                for control in &conflict.slots {
                    out.push_str(&format!("   pick {} -> {}\n", control.index, control.label));
                }
            }
        }

        out
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "success",
        Severity::Warning => "warning",
        Severity::Error => "error",
        Severity::Info => "info",
    }
}
