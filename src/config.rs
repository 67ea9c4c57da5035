//! Runtime configuration.
//!
//! Every value has a compiled-in default; the CLI may override the pass mark.

use std::path::PathBuf;

/// Inclusive score at or above which a student passes.
pub const DEFAULT_PASS_MARK: f64 = 40.0;

/// CSV offered when the user presses ENTER at the load prompt.
pub const DEFAULT_INPUT_PATH: &str = "students.csv";

/// CSV offered when the user presses ENTER at the export prompt.
pub const DEFAULT_EXPORT_PATH: &str = "final_grades.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub pass_mark: f64,
    pub default_input: PathBuf,
    pub default_export: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pass_mark: DEFAULT_PASS_MARK,
            default_input: PathBuf::from(DEFAULT_INPUT_PATH),
            default_export: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl Config {
    pub fn with_pass_mark(mut self, pass_mark: f64) -> Self {
        self.pass_mark = pass_mark;
        self
    }
}
