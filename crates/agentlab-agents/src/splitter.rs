use once_cell::sync::Lazy;
use regex::Regex;

use crate::cues::MATH_OPERATION;

static AND_THEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+and\s+then\s+").unwrap());
static THEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+then\s+").unwrap());
static TRANSLATE_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)translate\s+['"][^'"]*['"].*?german"#).unwrap());
static LEADING_CONNECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(and\s+then\s+|,\s*|and\s+)").unwrap());

/// Split a multi-step request into ordered sub-queries.
///
/// Boundaries are tried in order: an "and then" connective, a bare "then",
/// several "operation N and M" phrases (only the matched phrases are kept),
/// and finally a quoted translate-to-German clause separated from the rest.
/// When no boundary is found the whole query comes back as the only step.
pub fn split_query(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();

    if lower.contains("and then") {
        return split_trimmed(&AND_THEN_SPLIT, query);
    }
    if lower.contains("then ") {
        return split_trimmed(&THEN_SPLIT, query);
    }

    let math_expressions: Vec<String> = MATH_OPERATION
        .find_iter(query)
        .map(|m| m.as_str().to_string())
        .collect();
    if math_expressions.len() > 1 {
        return math_expressions;
    }

    if lower.contains("translate") {
        if let Some(parts) = split_translate_clause(query) {
            return parts;
        }
    }

    vec![query.to_string()]
}

fn split_trimmed(pattern: &Regex, query: &str) -> Vec<String> {
    pattern
        .split(query)
        .map(|part| part.trim().to_string())
        .collect()
}

fn split_translate_clause(query: &str) -> Option<Vec<String>> {
    let translate_part = TRANSLATE_CLAUSE.find(query)?.as_str();

    let without_clause = query.replace(translate_part, "");
    let remaining = LEADING_CONNECTIVE
        .replace(without_clause.trim(), "")
        .trim()
        .to_string();

    if remaining.is_empty() {
        return None;
    }

    // Order by position in the source text; a remainder that no longer
    // appears verbatim goes first.
    let translate_first = match (query.find(translate_part), query.find(&remaining)) {
        (Some(t), Some(r)) => t < r,
        _ => false,
    };

    let translate_part = translate_part.to_string();
    Some(if translate_first {
        vec![translate_part, remaining]
    } else {
        vec![remaining, translate_part]
    })
}
