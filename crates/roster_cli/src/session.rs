//! Interactive roster session over line-based input and output.
//!
//! # Responsibility
//! - Read commands, apply them to the roster service, print the page.
//! - Ask the delete confirmation on the same input stream.
//!
//! # Invariants
//! - Command errors are printed and the loop continues.
//! - EOF or `quit` ends the session; only I/O failures are returned.
//! - An unreadable or missing confirmation answer counts as "no".
//! - Input bytes that are not UTF-8 never end the session.

use crate::command::{parse_command, Command, HELP_TEXT};
use log::{debug, warn};
use roster_core::{
    render_modal, render_page, DeleteOutcome, RosterService, StudentStore, SubmitOutcome,
};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "roster> ";

/// Runs the command loop until `quit` or end of input.
pub fn run_session<S, R, W>(
    service: &mut RosterService<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: StudentStore,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_page(service))?;

    loop {
        write!(output, "\n{PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        apply_command(service, command, input, output)?;
    }

    debug!(
        "event=session_end module=cli status=ok count={}",
        service.store().len()
    );
    Ok(())
}

fn apply_command<S, R, W>(
    service: &mut RosterService<S>,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: StudentStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Noop | Command::Quit => {}
        Command::Help => writeln!(output, "{HELP_TEXT}")?,
        Command::List => write!(output, "{}", render_page(service))?,
        Command::Search(text) => {
            service.set_search(text);
            write!(output, "{}", render_page(service))?;
        }
        Command::Add => {
            service.open_create();
            write!(output, "{}", render_modal(service.modal()))?;
        }
        Command::Edit(id) => match service.open_edit(id) {
            Ok(()) => write!(output, "{}", render_modal(service.modal()))?,
            Err(err) => writeln!(output, "error: {err}")?,
        },
        Command::Set(field, value) => match service.set_field(field, &value) {
            Ok(()) => write!(output, "{}", render_modal(service.modal()))?,
            Err(err) => writeln!(output, "error: {err}")?,
        },
        Command::Save => match service.submit() {
            Ok(outcome) => {
                if let Some(message) = describe_submit(outcome) {
                    writeln!(output, "{message}")?;
                }
                write!(output, "{}", render_page(service))?;
            }
            Err(err) => writeln!(output, "error: {err}")?,
        },
        Command::Cancel => {
            service.cancel();
            write!(output, "{}", render_page(service))?;
        }
        Command::Delete(id) => {
            let mut prompt = |message: &str| confirm_line(&mut *input, &mut *output, message);
            let outcome = service.delete_student(id, &mut prompt);
            match outcome {
                Ok(DeleteOutcome::Deleted(record)) => {
                    writeln!(output, "Deleted student #{}.", record.id)?;
                    write!(output, "{}", render_page(service))?;
                }
                Ok(DeleteOutcome::Cancelled) => writeln!(output, "Delete cancelled.")?,
                Err(err) => writeln!(output, "error: {err}")?,
            }
        }
        Command::Json => {
            let visible = service.visible_students();
            let json = serde_json::to_string_pretty(&visible).map_err(io::Error::other)?;
            writeln!(output, "{json}")?;
        }
    }
    Ok(())
}

// A stale edit is a silent no-op; the service already logs it.
fn describe_submit(outcome: SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Created(id) => Some(format!("Added student #{id}.")),
        SubmitOutcome::Updated(id) => Some(format!("Updated student #{id}.")),
        SubmitOutcome::Unchanged(_) => None,
    }
}

/// Asks `message` and reads the answer from the session input.
fn confirm_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> bool {
    ask(input, output, message).unwrap_or_else(|err| {
        warn!("event=confirm_prompt module=cli status=error error={err}");
        false
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<bool> {
    write!(output, "{message} [y/N] ")?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Reads one line without its terminator; `None` at end of input.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the session.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut raw = Vec::new();
    if input.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    let decoded = String::from_utf8_lossy(&raw);
    if let Cow::Owned(_) = decoded {
        warn!("event=input_decode module=cli status=lossy bytes={}", raw.len());
    }
    Ok(Some(decoded.trim_end_matches(['\n', '\r']).to_string()))
}
