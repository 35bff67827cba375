use crate::cues::{count_math_operations, has_sequence_connective, mentions_knowledge, mentions_translation};

/// Decide whether a request needs more than one step.
///
/// True when the text contains an explicit sequence connective, more than
/// one "operation N and M" phrase, or cues for at least two different kinds
/// of work (translation, arithmetic, knowledge lookup).
pub fn is_multi_step(query: &str) -> bool {
    let lower = query.to_lowercase();

    if has_sequence_connective(&lower) {
        return true;
    }

    let math_count = count_math_operations(&lower);
    if math_count > 1 {
        return true;
    }

    let kinds_needed = [mentions_translation(&lower), math_count > 0, mentions_knowledge(&lower)]
        .into_iter()
        .filter(|needed| *needed)
        .count();

    kinds_needed > 1
}
