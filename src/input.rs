//! Line-oriented console I/O and interactive score entry.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::parser::parse_score;
use crate::store::ScoreStore;

/// Prompts and messages over a pair of streams.
///
/// Production code wraps stdin/stdout; tests script the input with a
/// `Cursor` and capture output in a `Vec<u8>`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes one line of output.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }

    /// Shows `prompt` and reads one trimmed line. `None` means end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Collects `(name, score)` pairs typed by the user.
///
/// An empty name, or end of input, finishes entry. Marks that are not a
/// number are rejected and asked for again without re-asking the name.
pub fn manual_entry<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<ScoreStore> {
    console.say("Enter student name and marks. Press ENTER on an empty name to stop.")?;
    let mut store = ScoreStore::new();

    loop {
        let Some(name) = console.prompt("Student name (or press ENTER to finish): ")? else {
            break;
        };
        if name.is_empty() {
            break;
        }

        let score = loop {
            let Some(raw) = console.prompt(&format!("Marks for {name}: "))? else {
                return Ok(store);
            };
            match parse_score(&raw) {
                Ok(score) => break score,
                Err(e) => {
                    debug!(name = %name, error = %e, "Rejected marks");
                    console.say("Invalid marks. Please enter a number.")?;
                }
            }
        };

        store.insert(name, score);
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_entry(script: &str) -> (ScoreStore, String) {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let store = manual_entry(&mut console).unwrap();
        let output = String::from_utf8(console.into_writer()).unwrap();
        (store, output)
    }

    #[test]
    fn test_manual_entry_until_blank_name() {
        let (store, _) = run_entry("Alice\n88\nBob\n  42.5 \n\n");

        let pairs: Vec<_> = store.iter().collect();
        assert_eq!(pairs, vec![("Alice", 88.0), ("Bob", 42.5)]);
    }

    #[test]
    fn test_manual_entry_reasks_marks_only() {
        let (store, output) = run_entry("Alice\nninety\n\n90\n\n");

        assert_eq!(store.get("Alice"), Some(90.0));
        assert_eq!(output.matches("Invalid marks. Please enter a number.").count(), 2);
        assert_eq!(output.matches("Student name").count(), 2);
        assert_eq!(output.matches("Marks for Alice: ").count(), 3);
    }

    #[test]
    fn test_manual_entry_end_of_input() {
        let (store, _) = run_entry("Alice\n70\nBob\n");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Bob"), None);
    }

    #[test]
    fn test_prompt_returns_none_at_eof() {
        let mut console = Console::new(Cursor::new(String::new()), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), None);
    }
}
