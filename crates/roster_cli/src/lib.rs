//! Terminal front end for the student roster.
//!
//! # Responsibility
//! - Parse process arguments and line commands.
//! - Drive a `roster_core` session from any `BufRead`/`Write` pair.

pub mod cli;
pub mod command;
pub mod session;

pub use cli::Cli;
pub use command::{parse_command, Command, CommandError};
pub use session::run_session;
