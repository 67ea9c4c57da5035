//! CLI entry point for the GradeBook Analyzer.
//!
//! Runs the interactive menu by default, or a single non-interactive
//! analysis of a CSV file with the `analyze` subcommand.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook::analyzers::analyzer::analyze;
use gradebook::config::{Config, DEFAULT_PASS_MARK};
use gradebook::input::Console;
use gradebook::logging;
use gradebook::menu::{self, Session};
use gradebook::output::{export_table, render_summary, render_table, write_json};
use gradebook::parser::load_csv;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Aggregate student scores and report grades", long_about = None)]
struct Cli {
    /// Inclusive score at or above which a student passes
    #[arg(long, global = true, default_value_t = DEFAULT_PASS_MARK)]
    pass_mark: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// Analyze a CSV of student scores and print the report
    Analyze {
        /// CSV file with a name column and a marks column
        #[arg(value_name = "CSV")]
        input: PathBuf,

        /// Also write the results table to this CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Print the analysis as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = logging::init();

    let cli = Cli::parse();
    let config = Config::default().with_pass_mark(cli.pass_mark);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut session = Session::new(config);
            let stdin = std::io::stdin();
            let mut console = Console::new(stdin.lock(), std::io::stdout());
            menu::run(&mut session, &mut console)?;
        }
        Commands::Analyze {
            input,
            export,
            json,
        } => {
            analyze_file(&input, export.as_deref(), json, &config)?;
        }
    }

    Ok(())
}

/// Loads one CSV, prints its analysis and optionally exports the table.
#[tracing::instrument(skip(config), fields(input = %input.display()))]
fn analyze_file(input: &Path, export: Option<&Path>, json: bool, config: &Config) -> Result<()> {
    let load = load_csv(input)?;
    for row in &load.skipped {
        println!(
            "Warning: skipping {} because marks '{}' is not a number.",
            row.name, row.raw_score
        );
    }

    let Some(analysis) = analyze(&load.store, config.pass_mark) else {
        warn!("CSV contained no usable rows");
        println!("No student data to analyze.");
        return Ok(());
    };

    if json {
        write_json(&analysis, std::io::stdout().lock())?;
    } else {
        println!("{}", render_summary(&analysis));
        println!();
        println!("{}", render_table(&load.store, &analysis.grades));
    }

    if let Some(path) = export {
        export_table(&load.store, &analysis.grades, path)?;
        info!(path = %path.display(), "Export written");
        if !json {
            println!("Results exported to {}", path.display());
        }
    }

    Ok(())
}
