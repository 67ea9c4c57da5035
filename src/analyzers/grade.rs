use crate::analyzers::types::{Distribution, GradeAssignment};
use crate::store::ScoreStore;

/// Letters every [`Distribution`] reports, even when nobody earned them.
pub const GRADE_LETTERS: [&str; 5] = ["A", "B", "C", "D", "F"];

/// Converts a score into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
///
/// There is no bounds check: negative scores (and NaN) land in F.
pub fn assign_grade(score: f64) -> String {
    match score {
        s if s >= 90.0 => "A".into(),
        s if s >= 80.0 => "B".into(),
        s if s >= 70.0 => "C".into(),
        s if s >= 60.0 => "D".into(),
        _ => "F".into(),
    }
}

/// Grades every student in the store, keeping store order.
pub fn build_grades(scores: &ScoreStore) -> GradeAssignment {
    scores
        .iter()
        .map(|(name, score)| (name, assign_grade(score)))
        .collect()
}

/// Counts students per letter.
///
/// All five canonical letters start at zero. A letter outside that set is
/// counted under its own key rather than rejected.
pub fn distribution(grades: &GradeAssignment) -> Distribution {
    let mut dist: Distribution = GRADE_LETTERS
        .iter()
        .map(|letter| (letter.to_string(), 0))
        .collect();

    for (_, grade) in grades.iter() {
        *dist.entry(grade.to_string()).or_default() += 1;
    }

    dist
}
