//! `roster`: terminal front end for the roster store.
//!
//! Plays the part of the grid: prints the records as a table and forwards
//! add/edit/delete intents to the store through the form session.

mod commands;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use roster_engine::RosterConfig;
use roster_executor::Roster;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::{parse_line, run, Flow};

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Edit an in-memory user roster")]
struct Cli {
    /// Seed records from this roster.toml instead of the demo data
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run a single command and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,

    /// Log store activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut roster = match open_roster(&cli) {
        Ok(roster) => roster,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    if let Some(line) = &cli.command {
        return match execute_line(&mut roster, line) {
            Ok(_) => ExitCode::SUCCESS,
            Err(()) => ExitCode::FAILURE,
        };
    }

    repl(&mut roster)
}

fn open_roster(cli: &Cli) -> Result<Roster, String> {
    let config = match &cli.config {
        Some(path) => RosterConfig::from_file(path).map_err(|e| e.to_string())?,
        None => RosterConfig::default(),
    };
    Roster::from_config(&config).map_err(|e| format!("invalid seed: {}", e))
}

/// Parse and run one line. `Err` means the line was rejected.
fn execute_line(roster: &mut Roster, line: &str) -> Result<Flow, ()> {
    match parse_line(line) {
        Ok(Some(cmd)) => run(roster, cmd),
        Ok(None) => Ok(Flow::Continue),
        Err(message) => {
            eprintln!("(error) {}", message);
            Err(())
        }
    }
}

fn repl(roster: &mut Roster) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("failed to start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", render::table(roster.records()));
    println!("Type `help` for commands.");

    loop {
        match editor.readline("roster> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if let Ok(Flow::Quit) = execute_line(roster, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
