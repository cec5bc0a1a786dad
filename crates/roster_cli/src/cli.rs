//! Command-line arguments for the roster terminal.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Student roster manager - search, add, edit and delete student records",
    long_about = "Interactive student roster held in memory for one session.\n\n\
                  Type `help` at the prompt for the command list. Nothing is saved on exit."
)]
pub struct Cli {
    /// Start with an empty roster instead of the sample students.
    #[arg(long)]
    pub empty: bool,

    /// Log level (trace, debug, info, warn, error). Defaults per build mode.
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
