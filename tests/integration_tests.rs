use gradebook::analyzers::analyzer::analyze;
use gradebook::analyzers::grade::build_grades;
use gradebook::config::Config;
use gradebook::input::Console;
use gradebook::menu::{self, Session};
use gradebook::output::export_table;
use gradebook::parser::{load_csv, read_scores};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_load_analyze_export_round_trip() {
    let input = write_csv("Student,Score\nAlice,91\nBob,absent\nCarol,72.25\nDan,39.99\n");
    let load = load_csv(input.path()).unwrap();
    assert_eq!(load.store.len(), 3);
    assert_eq!(load.skipped.len(), 1);

    let analysis = analyze(&load.store, 40.0).unwrap();
    assert_eq!(analysis.partition.passed, vec!["Alice", "Carol"]);
    assert_eq!(analysis.partition.failed, vec!["Dan"]);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("final_grades.csv");
    export_table(&load.store, &analysis.grades, &out).unwrap();

    // Re-read by column position and compare (name, score, grade) triples.
    let mut rdr = csv::Reader::from_path(&out).unwrap();
    assert_eq!(rdr.headers().unwrap(), vec!["Name", "Marks", "Grade"]);
    let triples: Vec<(String, f64, String)> = rdr
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].to_string(), r[1].parse().unwrap(), r[2].to_string())
        })
        .collect();

    let expected: Vec<(String, f64, String)> = load
        .store
        .iter()
        .map(|(name, score)| {
            (
                name.to_string(),
                score,
                analysis.grades.get(name).unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(triples, expected);

    // The export is itself a valid input.
    let reloaded = load_csv(&out).unwrap();
    assert_eq!(reloaded.store, load.store);
}

#[test]
fn test_grades_follow_store_after_reload() {
    let first = read_scores("Name,Marks\nAlice,55\n".as_bytes()).unwrap();
    let second = read_scores("Name,Marks\nAlice,85\nBob,61\n".as_bytes()).unwrap();

    let mut store = first.store;
    assert_eq!(build_grades(&store).get("Alice"), Some("F"));

    store.merge(second.store);
    let grades = build_grades(&store);
    assert_eq!(grades.get("Alice"), Some("B"));
    assert_eq!(grades.get("Bob"), Some("D"));
}

#[test]
fn test_menu_session_load_analyze_export() {
    let input = write_csv("Name,Marks\nAlice,91\nBob,x\nCarol,40\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");

    let script = format!(
        "2\n{}\n4\ny\n{}\n6\n",
        input.path().display(),
        out.display()
    );
    let mut session = Session::new(Config::default());
    let mut console = Console::new(Cursor::new(script), Vec::new());

    menu::run(&mut session, &mut console).unwrap();
    let output = String::from_utf8(console.into_writer()).unwrap();

    assert!(output.contains("Warning: skipping Bob because marks 'x' is not a number."));
    assert!(output.contains("Loaded 2 students. Total now: 2"));
    assert!(output.contains("Average (mean): 65.50"));
    assert!(output.contains("Passed (2): Alice, Carol"));
    assert!(output.contains(&format!("Results exported to {}", out.display())));

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content, "Name,Marks,Grade\nAlice,91.0,A\nCarol,40.0,F\n");
}

#[test]
fn test_menu_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("missing").join("report.csv");

    let script = format!("1\nAlice\n70\n\n4\ny\n{}\n3\n6\n", bad.display());
    let mut session = Session::default();
    let mut console = Console::new(Cursor::new(script), Vec::new());

    menu::run(&mut session, &mut console).unwrap();
    let output = String::from_utf8(console.into_writer()).unwrap();

    assert!(output.contains("Failed to export CSV"));
    assert!(output.contains("Alice               70.0      C"));
    assert!(output.ends_with("Goodbye!\n"));
    assert!(!bad.exists());
}
