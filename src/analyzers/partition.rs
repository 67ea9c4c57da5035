use crate::analyzers::types::PassFailPartition;
use crate::store::ScoreStore;

/// Splits students into passed and failed, keeping store order.
///
/// The pass mark is inclusive. Any score that does not pass fails, so every
/// student lands in exactly one list.
pub fn partition(scores: &ScoreStore, pass_mark: f64) -> PassFailPartition {
    let mut result = PassFailPartition::default();

    for (name, score) in scores.iter() {
        if score >= pass_mark {
            result.passed.push(name.to_string());
        } else {
            result.failed.push(name.to_string());
        }
    }

    result
}
