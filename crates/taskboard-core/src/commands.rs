use anyhow::{Context, anyhow};
use taskboard_model::{BoardEvent, Filter, TaskId};
use tracing::debug;

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Events are applied to the board in order.
    Board(Vec<BoardEvent>),
    Show,
    Json,
    Help,
    Quit,
}

pub fn known_command_names() -> Vec<&'static str> {
    vec![
        "add", "draft", "submit", "toggle", "delete", "clear", "filter", "show", "json", "help",
        "quit", "exit",
    ]
}

pub fn expand_command_abbrev<'a>(token: &'a str, known: &[&'a str]) -> Option<&'a str> {
    if known.contains(&token) {
        return Some(token);
    }

    let mut matches = known.iter().copied().filter(|name| name.starts_with(token));
    let first = matches.next()?;
    if matches.next().is_some() {
        None
    } else {
        Some(first)
    }
}

pub const HELP_TEXT: &str = "\
commands:
  add <text>        create a task
  draft <text>      type into the input row
  submit            create a task from the input row
  toggle <id>       mark a task done / not done
  delete <id>       remove a task
  clear             remove every completed task
  filter <name>     show all, active or completed tasks
  show              render the board again
  json              print the board as JSON
  help              this text
  quit              leave";

/// Parses one input line. Blank lines parse to `None`.
#[tracing::instrument]
pub fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };
    let word = word.to_ascii_lowercase();

    let known = known_command_names();
    let command = expand_command_abbrev(&word, &known)
        .ok_or_else(|| anyhow!("unknown or ambiguous command: {word}"))?;
    debug!(token = %word, expanded = %command, "resolved command token");

    let parsed = match command {
        "add" => {
            if rest.trim().is_empty() {
                return Err(anyhow!("add requires task text"));
            }
            Command::Board(vec![
                BoardEvent::DraftChanged(rest.to_string()),
                BoardEvent::DraftSubmitted,
            ])
        }
        "draft" => Command::Board(vec![BoardEvent::DraftChanged(rest.to_string())]),
        "submit" => Command::Board(vec![BoardEvent::DraftSubmitted]),
        "toggle" => Command::Board(vec![BoardEvent::ToggleTask(parse_id(command, rest)?)]),
        "delete" => Command::Board(vec![BoardEvent::DeleteTask(parse_id(command, rest)?)]),
        "clear" => Command::Board(vec![BoardEvent::ClearCompleted]),
        "filter" => {
            let filter = rest
                .parse::<Filter>()
                .context("filter requires all, active or completed")?;
            Command::Board(vec![BoardEvent::SetFilter(filter)])
        }
        "show" => Command::Show,
        "json" => Command::Json,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(anyhow!("unhandled command: {other}")),
    };

    Ok(Some(parsed))
}

fn parse_id(command: &str, rest: &str) -> anyhow::Result<TaskId> {
    if rest.trim().is_empty() {
        return Err(anyhow!("{command} requires a task id"));
    }
    rest.parse::<TaskId>()
        .with_context(|| format!("{command} requires a numeric task id"))
}
