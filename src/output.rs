//! Rendering and export of analysis results.
//!
//! Supports the fixed-width results table, the textual analysis summary,
//! CSV export and a JSON summary.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::{debug, info};

use crate::analyzers::grade::GRADE_LETTERS;
use crate::analyzers::types::{Analysis, GradeAssignment};
use crate::error::{Error, Result};
use crate::store::ScoreStore;

const NAME_WIDTH: usize = 20;
const MARKS_WIDTH: usize = 10;
const RULE_WIDTH: usize = 40;

/// Header row of the exported CSV.
pub const EXPORT_HEADERS: [&str; 3] = ["Name", "Marks", "Grade"];

/// Formats a score the way it is shown in tables and exports.
///
/// Integral scores keep a trailing `.0` (`85.0`); everything else uses the
/// shortest text that parses back to the same value.
pub fn format_marks(score: f64) -> String {
    format!("{score:?}")
}

/// Renders the three-column results table, one row per student in store order.
pub fn render_table(scores: &ScoreStore, grades: &GradeAssignment) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::with_capacity(scores.len() + 3);

    lines.push(table_row("Name", "Marks", "Grade"));
    lines.push(rule.clone());
    for (name, score) in scores.iter() {
        let grade = grades.get(name).unwrap_or("");
        lines.push(table_row(name, &format_marks(score), grade));
    }
    lines.push(rule);

    lines.join("\n")
}

fn table_row(name: &str, marks: &str, grade: &str) -> String {
    format!(
        "{name:<nw$}{marks:<mw$}{grade}",
        nw = NAME_WIDTH,
        mw = MARKS_WIDTH
    )
}

/// Renders the textual analysis summary shown before the results table.
pub fn render_summary(analysis: &Analysis) -> String {
    let mut lines = vec![
        "=== Analysis Summary ===".to_string(),
        format!("Total students: {}", analysis.total_students),
        format!("Average (mean): {:.2}", analysis.average),
        format!("Median: {:.2}", analysis.median),
        format!(
            "Highest: {} -> {}",
            analysis.highest.name,
            format_marks(analysis.highest.score)
        ),
        format!(
            "Lowest:  {} -> {}",
            analysis.lowest.name,
            format_marks(analysis.lowest.score)
        ),
        String::new(),
        "Grade distribution:".to_string(),
    ];

    for letter in GRADE_LETTERS {
        let count = analysis.distribution.get(letter).copied().unwrap_or(0);
        lines.push(format!("  {letter}: {count}"));
    }

    lines.push(String::new());
    lines.push(name_list("Passed", &analysis.partition.passed));
    lines.push(name_list("Failed", &analysis.partition.failed));

    lines.join("\n")
}

fn name_list(label: &str, names: &[String]) -> String {
    let joined = if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    };
    format!("{label} ({}): {joined}", names.len())
}

/// Writes the results table as CSV: a `Name,Marks,Grade` header followed by
/// one row per student in store order. Overwrites any existing file.
///
/// # Errors
///
/// Returns [`Error::Export`] if the file cannot be created or written.
#[tracing::instrument(skip(scores, grades, path), fields(path = %path.as_ref().display(), rows = scores.len()))]
pub fn export_table(
    scores: &ScoreStore,
    grades: &GradeAssignment,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();

    write_table(scores, grades, path).map_err(|source| Error::Export {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Results table exported");
    Ok(())
}

fn write_table(scores: &ScoreStore, grades: &GradeAssignment, path: &Path) -> csv::Result<()> {
    debug!("Writing CSV export");
    let mut writer = WriterBuilder::new().from_path(path)?;

    writer.write_record(EXPORT_HEADERS)?;
    for (name, score) in scores.iter() {
        let marks = format_marks(score);
        writer.write_record([name, marks.as_str(), grades.get(name).unwrap_or("")])?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the analysis as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(analysis: &Analysis, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, analysis)?;
    writeln!(writer)?;
    Ok(())
}
