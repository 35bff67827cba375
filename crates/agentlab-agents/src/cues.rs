//! Fixed textual cues shared by the classifier, splitter and step router.

use once_cell::sync::Lazy;
use regex::Regex;

/// "add 2 and 3", "multiply 4 and 5", ...
pub static MATH_OPERATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(add|multiply|subtract|divide)\s+\d+\s+and\s+\d+").unwrap());

/// First single- or double-quoted span
pub static QUOTED_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).unwrap());

pub const KNOWLEDGE_CUES: [&str; 3] = ["capital", "distance", "tell me"];

/// Knowledge cues that suggest a connectivity problem when the model is unreachable
pub const LOOKUP_CUES: [&str; 2] = ["capital", "distance"];

/// Expects lowercased text
pub fn has_sequence_connective(lower: &str) -> bool {
    lower.contains("and then") || lower.contains("then ")
}

/// Expects lowercased text
pub fn mentions_translation(lower: &str) -> bool {
    lower.contains("translate") && lower.contains("german")
}

/// Expects lowercased text
pub fn mentions_knowledge(lower: &str) -> bool {
    KNOWLEDGE_CUES.iter().any(|cue| lower.contains(cue))
}

pub fn mentions_math(text: &str) -> bool {
    MATH_OPERATION.is_match(text)
}

pub fn count_math_operations(text: &str) -> usize {
    MATH_OPERATION.find_iter(text).count()
}

/// Text inside the first quoted span, if any
pub fn extract_quoted(text: &str) -> Option<&str> {
    QUOTED_TEXT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
