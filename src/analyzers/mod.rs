//! Grading and analysis over a [`ScoreStore`](crate::store::ScoreStore).
//!
//! This module assigns letter grades, counts the grade distribution, splits
//! students into passed and failed, and gathers everything the analysis
//! report shows into a single [`types::Analysis`].

pub mod analyzer;
pub mod grade;
pub mod partition;
pub mod types;
pub mod utility;
