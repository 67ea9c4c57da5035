//! Interactive menu loop.
//!
//! All state lives in a [`Session`] that is handed to each action handler;
//! nothing is kept in globals.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, error, info};

use crate::analyzers::analyzer::analyze;
use crate::analyzers::grade::build_grades;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::{Console, manual_entry};
use crate::output::{export_table, render_summary, render_table};
use crate::parser::load_csv;
use crate::store::ScoreStore;

const MENU: &[&str] = &[
    "=== GradeBook Analyzer ===",
    "1. Manual entry of students",
    "2. Load students from CSV",
    "3. Show current data",
    "4. Run analysis on current data",
    "5. Clear current data",
    "6. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManualEntry,
    LoadCsv,
    ShowData,
    Analyze,
    Clear,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::ManualEntry),
            "2" => Ok(Self::LoadCsv),
            "3" => Ok(Self::ShowData),
            "4" => Ok(Self::Analyze),
            "5" => Ok(Self::Clear),
            "6" => Ok(Self::Exit),
            other => Err(Error::InvalidChoice(other.to_string())),
        }
    }
}

/// State carried across menu iterations.
#[derive(Debug, Default)]
pub struct Session {
    pub store: ScoreStore,
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            store: ScoreStore::new(),
            config,
        }
    }
}

/// Runs the menu until the user exits or input ends.
///
/// # Errors
///
/// Only failures of the console streams themselves are returned; load,
/// parse and export problems are reported to the user and the loop goes on.
pub fn run<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> Result<()> {
    console.say("Welcome to GradeBook Analyzer")?;
    console.say("Choose manual entry or CSV to start.")?;

    loop {
        console.say("")?;
        for line in MENU {
            console.say(line)?;
        }

        let Some(selection) = console.prompt("Choose an option (1-6): ")? else {
            info!("Input closed, leaving menu");
            break;
        };

        match selection.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                console.say("Goodbye!")?;
                break;
            }
            Ok(choice) => {
                debug!(?choice, "Menu selection");
                dispatch(choice, session, console)?;
            }
            Err(e) => {
                debug!(selection = %selection, "Invalid menu selection");
                console.say(e)?;
            }
        }
    }

    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    match choice {
        MenuChoice::ManualEntry => handle_manual_entry(session, console),
        MenuChoice::LoadCsv => handle_load_csv(session, console),
        MenuChoice::ShowData => handle_show_data(session, console),
        MenuChoice::Analyze => handle_analyze(session, console),
        MenuChoice::Clear => handle_clear(session, console),
        MenuChoice::Exit => Ok(()),
    }
}

fn handle_manual_entry<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let added = manual_entry(console)?;
    let count = added.len();
    session.store.merge(added);

    info!(added = count, total = session.store.len(), "Manual entry finished");
    console.say(format!(
        "Added {count} student(s). Total now: {}",
        session.store.len()
    ))?;
    Ok(())
}

fn handle_load_csv<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let prompt = format!(
        "Enter CSV path (default: {}): ",
        session.config.default_input.display()
    );
    let path = path_or_default(console.prompt(&prompt)?, &session.config.default_input);

    match load_csv(&path) {
        Ok(load) => {
            for row in &load.skipped {
                console.say(format!(
                    "Warning: skipping {} because marks '{}' is not a number.",
                    row.name, row.raw_score
                ))?;
            }

            if load.store.is_empty() {
                console.say("No data loaded from CSV.")?;
            } else {
                let count = load.store.len();
                session.store.merge(load.store);
                console.say(format!(
                    "Loaded {count} students. Total now: {}",
                    session.store.len()
                ))?;
            }
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "CSV load failed");
            console.say(e)?;
            console.say("No data loaded from CSV.")?;
        }
    }
    Ok(())
}

fn handle_show_data<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    if session.store.is_empty() {
        console.say("No data loaded yet.")?;
    } else {
        let grades = build_grades(&session.store);
        console.say(render_table(&session.store, &grades))?;
    }
    Ok(())
}

fn handle_analyze<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(analysis) = analyze(&session.store, session.config.pass_mark) else {
        console.say("No student data to analyze.")?;
        return Ok(());
    };

    console.say(render_summary(&analysis))?;
    console.say("")?;
    console.say(render_table(&session.store, &analysis.grades))?;

    let answer = console
        .prompt("Export results table to CSV? (y/N): ")?
        .unwrap_or_default();
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let prompt = format!(
        "Enter file name (default: {}): ",
        session.config.default_export.display()
    );
    let path = path_or_default(console.prompt(&prompt)?, &session.config.default_export);

    match export_table(&session.store, &analysis.grades, &path) {
        Ok(()) => console.say(format!("Results exported to {}", path.display()))?,
        Err(e) => {
            error!(error = %e, "Export failed");
            console.say(e)?;
        }
    }
    Ok(())
}

fn handle_clear<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let cleared = session.store.len();
    session.store.clear();

    info!(cleared, "Store cleared");
    console.say("Cleared current data.")?;
    Ok(())
}

fn path_or_default(answer: Option<String>, default: &Path) -> PathBuf {
    match answer {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => default.to_path_buf(),
    }
}
