use crate::analyzers::grade::{build_grades, distribution};
use crate::analyzers::partition::partition;
use crate::analyzers::types::Analysis;
use crate::stats::{average, max_score, median, min_score};
use crate::store::ScoreStore;
use chrono::Utc;
use tracing::info;

/// Computes the full analysis of the current store.
///
/// Returns `None` when there are no students to analyze.
#[tracing::instrument(skip(scores), fields(students = scores.len()))]
pub fn analyze(scores: &ScoreStore, pass_mark: f64) -> Option<Analysis> {
    if scores.is_empty() {
        info!("No student data to analyze");
        return None;
    }

    let grades = build_grades(scores);
    let analysis = Analysis {
        generated_at: Utc::now(),
        total_students: scores.len(),
        pass_mark,
        average: average(scores),
        median: median(scores),
        highest: max_score(scores),
        lowest: min_score(scores),
        distribution: distribution(&grades),
        partition: partition(scores, pass_mark),
        grades,
    };

    info!(
        average = analysis.average,
        median = analysis.median,
        passed = analysis.partition.passed.len(),
        failed = analysis.partition.failed.len(),
        "Analysis complete"
    );

    Some(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Extremum;

    #[test]
    fn test_analyze_empty_store() {
        assert!(analyze(&ScoreStore::new(), 40.0).is_none());
    }

    #[test]
    fn test_analyze_class() {
        let store: ScoreStore = [
            ("alice", 92.0),
            ("bob", 35.5),
            ("carol", 78.0),
            ("dave", 40.0),
        ]
        .into_iter()
        .collect();

        let analysis = analyze(&store, 40.0).unwrap();

        assert_eq!(analysis.total_students, 4);
        assert_eq!(analysis.average, 61.375);
        assert_eq!(analysis.median, 59.0);
        assert_eq!(analysis.highest, Extremum::new("alice", 92.0));
        assert_eq!(analysis.lowest, Extremum::new("bob", 35.5));
        assert_eq!(analysis.distribution["A"], 1);
        assert_eq!(analysis.distribution["C"], 1);
        assert_eq!(analysis.distribution["F"], 2);
        assert_eq!(analysis.partition.passed, vec!["alice", "carol", "dave"]);
        assert_eq!(analysis.partition.failed, vec!["bob"]);
        assert_eq!(analysis.grades.get("carol"), Some("C"));
    }

    #[test]
    fn test_analysis_serializes_grades_as_object() {
        let store: ScoreStore = [("alice", 92.0), ("bob", 35.5)].into_iter().collect();
        let analysis = analyze(&store, 40.0).unwrap();

        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["grades"]["alice"], "A");
        assert_eq!(json["grades"]["bob"], "F");
        assert_eq!(json["distribution"]["B"], 0);
        assert_eq!(json["highest"]["name"], "alice");
        assert_eq!(json["partition"]["failed"][0], "bob");
    }
}
