//! Data types produced by the analysis.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Student count per letter grade, iterated in letter order.
pub type Distribution = BTreeMap<String, usize>;

/// Letter grade per student, in the order of the store it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeAssignment {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl GradeAssignment {
    /// Records a grade, replacing any earlier grade for the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, grade: impl Into<String>) {
        let name = name.into();
        let grade = grade.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = grade,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, grade));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, grade)| (name.as_str(), grade.as_str()))
    }
}

impl<N: Into<String>, G: Into<String>> FromIterator<(N, G)> for GradeAssignment {
    fn from_iter<I: IntoIterator<Item = (N, G)>>(iter: I) -> Self {
        let mut grades = GradeAssignment::default();
        for (name, grade) in iter {
            grades.insert(name, grade);
        }
        grades
    }
}

// Serialized as a JSON object so the grades read as `{"alice": "A", ...}`.
impl Serialize for GradeAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, grade) in &self.entries {
            map.serialize_entry(name, grade)?;
        }
        map.end()
    }
}

/// A student holding the highest or lowest score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extremum {
    pub name: String,
    pub score: f64,
}

impl Extremum {
    pub fn new(name: &str, score: f64) -> Self {
        Self {
            name: name.to_string(),
            score,
        }
    }
}

/// Students split by the pass mark. Together the lists cover every student once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PassFailPartition {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

/// Everything the analysis report shows for one snapshot of the store.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub generated_at: DateTime<Utc>,
    pub total_students: usize,
    pub pass_mark: f64,
    pub average: f64,
    pub median: f64,
    pub highest: Extremum,
    pub lowest: Extremum,
    pub distribution: Distribution,
    pub partition: PassFailPartition,
    pub grades: GradeAssignment,
}
