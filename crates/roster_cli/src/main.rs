//! Roster terminal entry point.

use clap::Parser;
use log::info;
use roster_cli::{run_session, Cli};
use roster_core::{
    default_log_level, init_logging, seeded_session, InMemoryStudentStore, RosterService,
};
use std::io;

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(error) = init_logging(level, log_dir) {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    }

    let mut service = if cli.empty {
        RosterService::new(InMemoryStudentStore::new())
    } else {
        seeded_session()
    };
    info!(
        "event=session_open module=cli status=ok seeded={} version={}",
        !cli.empty,
        roster_core::core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(error) = run_session(&mut service, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
