//! Line command parsing and dispatch.
//!
//! # Responsibility
//! - Parse one input line into a [`Command`].
//! - Apply commands to the session's flow and store and render replies.
//!
//! # Invariants
//! - Completion targets are resolved by reminder id (or unique id prefix),
//!   never by list position.

use chrono::{DateTime, NaiveDateTime, Utc};
use remindlist_core::{CreationFlow, Reminder, ReminderId, ReminderStore};
use std::fmt::Write;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const SHORT_ID_LEN: usize = 8;

pub const HELP: &str = "\
commands:
  new                open the create dialog
  title <text>       set draft title
  desc <text>        set draft description
  due <instant>      set draft due (RFC 3339 or YYYY-MM-DD HH:MM, UTC)
  save               submit the draft
  cancel             discard the draft
  done <id>          complete a pending reminder (id or unique prefix)
  list               show pending and completed reminders
  help               show this text
  quit               exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Title(String),
    Description(String),
    Due(DateTime<Utc>),
    Save,
    Cancel,
    Done(String),
    List,
    Help,
    Quit,
}

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "new" => Command::New,
        "title" => Command::Title(rest.to_string()),
        "desc" => Command::Description(rest.to_string()),
        "due" => Command::Due(parse_instant(rest)?),
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "done" if rest.is_empty() => return Err("usage: done <id>".to_string()),
        "done" => Command::Done(rest.to_string()),
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(Some(command))
}

/// Parses RFC 3339 or `YYYY-MM-DD HH:MM` taken as UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, DISPLAY_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            format!("invalid instant `{value}`; expected RFC 3339 or YYYY-MM-DD HH:MM")
        })
}

/// Interactive state for one CLI run.
pub struct Session {
    store: ReminderStore,
    flow: CreationFlow,
}

impl Session {
    pub fn new(store: ReminderStore) -> Self {
        Self {
            store,
            flow: CreationFlow::new(),
        }
    }

    #[cfg(test)]
    fn with_flow(store: ReminderStore, flow: CreationFlow) -> Self {
        Self { store, flow }
    }

    /// Applies `command` and returns the text to show.
    pub fn apply(&mut self, command: Command) -> Result<String, String> {
        match command {
            Command::New => {
                self.flow.open().map_err(|err| err.to_string())?;
                Ok("draft opened".to_string())
            }
            Command::Title(title) => {
                self.flow.set_title(title).map_err(|err| err.to_string())?;
                Ok("title set".to_string())
            }
            Command::Description(description) => {
                self.flow
                    .set_description(description)
                    .map_err(|err| err.to_string())?;
                Ok("description set".to_string())
            }
            Command::Due(due_at) => {
                self.flow.set_due_at(due_at).map_err(|err| err.to_string())?;
                Ok(format!("due set to {}", format_due(&due_at)))
            }
            Command::Save => {
                let reminder = self
                    .flow
                    .submit(&mut self.store)
                    .map_err(|err| match self.flow.invalid_field() {
                        Some(field) => format!("{err} (field: {field:?})"),
                        None => err.to_string(),
                    })?;
                Ok(format!("created {}", render_line(&reminder)))
            }
            Command::Cancel => {
                self.flow.cancel().map_err(|err| err.to_string())?;
                Ok("draft discarded".to_string())
            }
            Command::Done(selector) => {
                let id = self.resolve_pending(&selector)?;
                let reminder = self.store.complete(id).map_err(|err| err.to_string())?;
                Ok(format!("completed {}", render_line(&reminder)))
            }
            Command::List => Ok(self.render_lists()),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    fn resolve_pending(&self, selector: &str) -> Result<ReminderId, String> {
        let selector = selector.to_ascii_lowercase();
        let matches: Vec<ReminderId> = self
            .store
            .list_pending()
            .iter()
            .map(|reminder| reminder.id)
            .filter(|id| id.to_string().starts_with(&selector))
            .collect();
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(format!("no pending reminder matches `{selector}`")),
            _ => Err(format!("`{selector}` matches {} reminders", matches.len())),
        }
    }

    fn render_lists(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "pending ({}):", self.store.pending_len());
        for reminder in self.store.list_pending() {
            let _ = writeln!(out, "  {}", render_line(&reminder));
        }
        let _ = write!(out, "completed ({}):", self.store.completed_len());
        for reminder in self.store.list_completed() {
            let _ = write!(out, "\n  {}", render_line(&reminder));
        }
        out
    }
}

fn format_due(due_at: &DateTime<Utc>) -> String {
    due_at.format(DISPLAY_FORMAT).to_string()
}

fn render_line(reminder: &Reminder) -> String {
    let id = reminder.id.to_string();
    let mut line = format!(
        "[{}] {} {}",
        &id[..SHORT_ID_LEN],
        format_due(&reminder.due_at),
        reminder.title
    );
    if !reminder.description.is_empty() {
        let _ = write!(line, " - {}", reminder.description);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{parse_command, parse_instant, Command, Session};
    use chrono::{DateTime, TimeZone, Utc};
    use remindlist_core::{CreationFlow, ReminderStore};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap()
    }

    fn run(session: &mut Session, line: &str) -> Result<String, String> {
        let command = parse_command(line)?.expect("non-blank line");
        session.apply(command)
    }

    #[test]
    fn parse_command_handles_arguments_and_blank_lines() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(
            parse_command("title  buy milk ").unwrap(),
            Some(Command::Title("buy milk".to_string()))
        );
        assert_eq!(parse_command("EXIT").unwrap(), Some(Command::Quit));
        assert!(parse_command("done").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn parse_instant_accepts_both_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 8, 2, 14, 30, 0).unwrap();
        assert_eq!(parse_instant("2026-08-02 14:30").unwrap(), expected);
        assert_eq!(parse_instant("2026-08-02T16:30:00+02:00").unwrap(), expected);
        assert!(parse_instant("tomorrow").is_err());
    }

    #[test]
    fn session_creates_lists_and_completes_by_id_prefix() {
        let mut session =
            Session::with_flow(ReminderStore::new(), CreationFlow::with_clock(fixed_now));

        run(&mut session, "new").unwrap();
        run(&mut session, "title later").unwrap();
        run(&mut session, "due 2026-08-01 12:00").unwrap();
        run(&mut session, "save").unwrap();
        run(&mut session, "new").unwrap();
        run(&mut session, "title sooner").unwrap();
        run(&mut session, "due 2026-08-01 10:00").unwrap();
        run(&mut session, "save").unwrap();

        let listing = run(&mut session, "list").unwrap();
        let sooner = listing.find("sooner").unwrap();
        let later = listing.find("later").unwrap();
        assert!(sooner < later);

        let id = session.store.list_pending()[0].id.to_string();
        let reply = run(&mut session, &format!("done {}", &id[..8])).unwrap();
        assert!(reply.contains("sooner"));
        assert_eq!(session.store.completed_len(), 1);

        let err = run(&mut session, &format!("done {}", &id[..8])).unwrap_err();
        assert!(err.contains("no pending reminder"));
    }

    #[test]
    fn save_with_blank_title_reports_field() {
        let mut session =
            Session::with_flow(ReminderStore::new(), CreationFlow::with_clock(fixed_now));

        run(&mut session, "new").unwrap();
        let err = run(&mut session, "save").unwrap_err();
        assert!(err.contains("Title"));
        assert_eq!(session.store.total_created(), 0);
    }
}
