//! Line command parser for the interactive session.
//!
//! # Invariants
//! - Text arguments (`search`, `set` values) are taken verbatim after the
//!   single separating space, so leading spaces and case are preserved.

use roster_core::{FormError, FormField, StudentId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP_TEXT: &str = "\
Commands:
  search [text]         filter by name, student ID, email or major (blank clears)
  list                  show the current page
  add                   open the form for a new student
  edit <id>             open the form for student <id>
  delete <id>           delete student <id> (asks for confirmation)
  set <field> <value>   fill a form field (name, studentId, email, phone, dob,
                        major, year, gpa, enrollmentDate)
  save                  submit the open form
  cancel                close the form without saving
  json                  print visible students as JSON
  help                  show this help
  quit                  end the session";

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    List,
    Add,
    Edit(StudentId),
    Delete(StudentId),
    Set(FormField, String),
    Save,
    Cancel,
    Json,
    Help,
    Quit,
    /// Blank line.
    Noop,
}

/// Parse error for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidId(String),
    Field(FormError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; type `help`"),
            Self::MissingArgument(what) => write!(f, "missing argument: {what}"),
            Self::InvalidId(value) => write!(f, "invalid student id `{value}`"),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormError> for CommandError {
    fn from(value: FormError) -> Self {
        Self::Field(value)
    }
}

/// Parses one input line (without its line terminator).
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Noop),
        "search" | "find" => Ok(Command::Search(rest.to_string())),
        "list" | "ls" => Ok(Command::List),
        "add" | "new" => Ok(Command::Add),
        "edit" => parse_id(rest).map(Command::Edit),
        "delete" | "rm" => parse_id(rest).map(Command::Delete),
        "set" => parse_set(rest),
        "save" | "submit" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}

fn parse_id(rest: &str) -> Result<StudentId, CommandError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(CommandError::MissingArgument("student id"));
    }
    value
        .trim_start_matches('#')
        .parse::<StudentId>()
        .map_err(|_| CommandError::InvalidId(value.to_string()))
}

fn parse_set(rest: &str) -> Result<Command, CommandError> {
    let rest = rest.trim_start();
    let (key, value) = rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
    if key.is_empty() {
        return Err(CommandError::MissingArgument("field name"));
    }
    let field = FormField::parse_key(key)?;
    Ok(Command::Set(field, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use roster_core::{FormError, FormField};

    #[test]
    fn parses_bare_commands_case_insensitively() {
        assert_eq!(parse_command("ADD").unwrap(), Command::Add);
        assert_eq!(parse_command("  save  ").unwrap(), Command::Save);
        assert_eq!(parse_command("").unwrap(), Command::Noop);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn search_keeps_text_verbatim() {
        assert_eq!(
            parse_command("search  Maria G").unwrap(),
            Command::Search(" Maria G".to_string())
        );
        assert_eq!(parse_command("search").unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn ids_accept_optional_hash_prefix() {
        assert_eq!(parse_command("edit 2").unwrap(), Command::Edit(2));
        assert_eq!(parse_command("delete #1").unwrap(), Command::Delete(1));
        assert_eq!(
            parse_command("edit").unwrap_err(),
            CommandError::MissingArgument("student id")
        );
        assert_eq!(
            parse_command("delete abc").unwrap_err(),
            CommandError::InvalidId("abc".to_string())
        );
    }

    #[test]
    fn set_splits_field_from_value() {
        assert_eq!(
            parse_command("set name Sam Lee").unwrap(),
            Command::Set(FormField::Name, "Sam Lee".to_string())
        );
        assert_eq!(
            parse_command("set enrollment_date").unwrap(),
            Command::Set(FormField::EnrollmentDate, String::new())
        );
        assert_eq!(
            parse_command("set color blue").unwrap_err(),
            CommandError::Field(FormError::UnknownField("color".to_string()))
        );
        assert_eq!(
            parse_command("set").unwrap_err(),
            CommandError::MissingArgument("field name")
        );
    }

    #[test]
    fn unknown_words_are_reported() {
        let err = parse_command("fly away").unwrap_err();
        assert_eq!(err, CommandError::Unknown("fly".to_string()));
        assert!(err.to_string().contains("help"));
    }
}
