//! CSV ingestion of student scores.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::store::ScoreStore;

/// Accepted name column headers, highest priority first.
pub const NAME_HEADERS: &[&str] = &["Name", "name", "Student"];

/// Accepted score column headers, highest priority first.
pub const SCORE_HEADERS: &[&str] = &["Marks", "marks", "Score"];

/// A row left out of the store because its score was not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub name: String,
    pub raw_score: String,
}

/// Scores read from a CSV source, plus the rows that had to be skipped.
#[derive(Debug, Default)]
pub struct CsvLoad {
    pub store: ScoreStore,
    pub skipped: Vec<SkippedRow>,
}

/// Parses a score as typed by a user or found in a CSV cell.
///
/// # Errors
///
/// Returns [`Error::InvalidScore`] if the trimmed text is not a float.
pub fn parse_score(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    raw.parse::<f64>()
        .map_err(|_| Error::InvalidScore(raw.to_string()))
}

/// Loads scores from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file does not exist, or an I/O or
/// CSV error if it cannot be read. Rows with unparseable scores are not
/// errors; see [`CsvLoad::skipped`].
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_csv(path: impl AsRef<Path>) -> Result<CsvLoad> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let load = read_scores(file)?;
    info!(
        loaded = load.store.len(),
        skipped = load.skipped.len(),
        "CSV loaded"
    );
    Ok(load)
}

/// Reads header-based CSV scores from any reader.
///
/// The name and score of each row come from the first alias column (see
/// [`NAME_HEADERS`] and [`SCORE_HEADERS`]) holding a non-empty value.
pub fn read_scores<R: Read>(reader: R) -> Result<CsvLoad> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_cols = alias_columns(&headers, NAME_HEADERS);
    let score_cols = alias_columns(&headers, SCORE_HEADERS);
    debug!(?name_cols, ?score_cols, "Resolved CSV columns");

    let mut load = CsvLoad::default();

    for result in rdr.records() {
        let record = result?;
        let name = first_present(&record, &name_cols).trim();
        let raw_score = first_present(&record, &score_cols);

        match parse_score(raw_score) {
            Ok(score) => {
                load.store.insert(name, score);
            }
            Err(_) => {
                warn!(name, raw_score, "Skipping row with non-numeric marks");
                load.skipped.push(SkippedRow {
                    name: name.to_string(),
                    raw_score: raw_score.to_string(),
                });
            }
        }
    }

    Ok(load)
}

/// Positions of the alias columns present in `headers`, in alias priority order.
fn alias_columns(headers: &StringRecord, aliases: &[&str]) -> Vec<usize> {
    aliases
        .iter()
        .filter_map(|alias| headers.iter().position(|h| h == *alias))
        .collect()
}

fn first_present<'r>(record: &'r StringRecord, columns: &[usize]) -> &'r str {
    columns
        .iter()
        .filter_map(|&i| record.get(i))
        .find(|value| !value.is_empty())
        .unwrap_or("")
}
