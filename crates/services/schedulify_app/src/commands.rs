// --- File: crates/services/schedulify_app/src/commands.rs ---
use crate::app::{Action, FormField};
use chrono::NaiveDate;
use schedulify_view::EventForm;

pub const HELP: &str = "\
Commands:
  add <name>, <date>, <start>, <end>, <venue>   schedule a new event
  retry                                         resubmit the current form
  set <name|date|start|end|venue> <value>       edit one form field
  pick <index>                                  adopt an alternative slot
  date <YYYY-MM-DD>                             switch the displayed day
  delete <id>                                   delete an event
  show                                          reload and display the schedule
  help                                          show this list
  quit                                          exit";

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(EventForm),
    Retry,
    Set { field: FormField, value: String },
    Pick(usize),
    Date(NaiveDate),
    Delete(i64),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Converts the command into a queued action. `Help` and `Quit` are
    /// handled by the frontend itself and produce no transition here.
    pub fn into_action(self) -> Option<Action> {
        match self {
            Command::Submit(form) => Some(Action::SubmitNew(form)),
            Command::Retry => Some(Action::Resubmit),
            Command::Set { field, value } => Some(Action::EditField { field, value }),
            Command::Pick(index) => Some(Action::PickSlot(index)),
            Command::Date(date) => Some(Action::ChangeDate(date)),
            Command::Delete(id) => Some(Action::Delete(id)),
            Command::Show => Some(Action::Refresh),
            Command::Help | Command::Quit => None,
        }
    }
}

/// Parses one input line into a command.
///
/// The `add` arguments are comma-separated so names and venues can contain
/// spaces.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "add" => {
            let parts: Vec<&str> = rest.split(',').map(str::trim).collect();
            if parts.len() != 5 || parts.iter().any(|p| p.is_empty()) {
                return Err("Usage: add <name>, <date>, <start>, <end>, <venue>".to_string());
            }
            Ok(Command::Submit(EventForm {
                name: parts[0].to_string(),
                date: parts[1].to_string(),
                start_time: parts[2].to_string(),
                end_time: parts[3].to_string(),
                venue: parts[4].to_string(),
            }))
        }
        "retry" => Ok(Command::Retry),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "Usage: set <name|date|start|end|venue> <value>".to_string())?;
            Ok(Command::Set {
                field: field.parse()?,
                value: value.trim().to_string(),
            })
        }
        "pick" => rest
            .parse::<usize>()
            .map(Command::Pick)
            .map_err(|_| "Usage: pick <index>".to_string()),
        "date" => NaiveDate::parse_from_str(rest, "%Y-%m-%d")
            .map(Command::Date)
            .map_err(|_| "Usage: date <YYYY-MM-DD>".to_string()),
        "delete" => rest
            .parse::<i64>()
            .map(Command::Delete)
            .map_err(|_| "Usage: delete <id>".to_string()),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!(
            "Unknown command '{other}'. Type 'help' for the command list."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_splits_on_commas_so_names_keep_spaces() {
        let command = parse_command("add Board Sync, 2024-06-01, 10:00, 11:00, Room A").unwrap();
        assert_eq!(
            command,
            Command::Submit(EventForm {
                name: "Board Sync".to_string(),
                date: "2024-06-01".to_string(),
                start_time: "10:00".to_string(),
                end_time: "11:00".to_string(),
                venue: "Room A".to_string(),
            })
        );
    }

    #[test]
    fn add_with_missing_parts_reports_usage() {
        let err = parse_command("add Board Sync, 2024-06-01").unwrap_err();
        assert!(err.starts_with("Usage: add"));
    }

    #[test]
    fn set_takes_the_rest_of_the_line_as_value() {
        let command = parse_command("set venue Main Hall West").unwrap();
        assert_eq!(
            command,
            Command::Set {
                field: FormField::Venue,
                value: "Main Hall West".to_string(),
            }
        );
    }

    #[test]
    fn set_rejects_unknown_fields() {
        let err = parse_command("set color blue").unwrap_err();
        assert!(err.contains("Unknown field"));
    }

    #[test]
    fn pick_date_and_delete_parse_their_arguments() {
        assert_eq!(parse_command("pick 2").unwrap(), Command::Pick(2));
        assert_eq!(
            parse_command("date 2024-06-02").unwrap(),
            Command::Date(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())
        );
        assert_eq!(parse_command("delete 42").unwrap(), Command::Delete(42));
    }

    #[test]
    fn bad_arguments_report_usage() {
        assert!(parse_command("pick two").is_err());
        assert!(parse_command("date tomorrow").is_err());
        assert!(parse_command("delete first").is_err());
    }

    #[test]
    fn unknown_commands_point_at_help() {
        let err = parse_command("frobnicate").unwrap_err();
        assert!(err.contains("help"));
    }

    #[test]
    fn help_and_quit_produce_no_action() {
        assert!(parse_command("help").unwrap().into_action().is_none());
        assert!(parse_command("quit").unwrap().into_action().is_none());
    }
}
