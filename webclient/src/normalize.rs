//! Pure mappings from raw upstream shapes to the normalized stat schema.
//! No network, no shared state.

use std::collections::{HashMap, HashSet};

use ::lazy_regex::{lazy_regex, Lazy, Regex};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Difficulty {
    All,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Option<Self> {
        use Difficulty::*;
        match label.trim().to_ascii_lowercase().as_str() {
            "all" => Some(All),
            "easy" => Some(Easy),
            "medium" => Some(Medium),
            "hard" => Some(Hard),
            _ => None,
        }
    }
}

/// Per-difficulty count map built from a difficulty-tagged list.
///
/// Upstream ordering is not stable, so entries are matched on their label
/// and never on position. Unknown labels are ignored; a missing label is
/// simply absent from the map (read with `.copied().unwrap_or(0)`).
pub fn difficulty_counts<I, S>(entries: I) -> HashMap<Difficulty, u32>
where
    I: IntoIterator<Item = (S, u32)>,
    S: AsRef<str>,
{
    let mut counts = HashMap::new();
    for (label, count) in entries {
        if let Some(difficulty) = Difficulty::from_label(label.as_ref()) {
            counts.insert(difficulty, count);
        }
    }
    counts
}

/// Identity of a problem across submission entries.
/// Archive problems without a contest id key on (None, index + name).
pub type ProblemKey = (Option<i64>, String);

/// A submission-list entry that can say whether it was accepted and
/// which problem it belongs to.
pub trait AcceptedProblem {
    fn is_accepted(&self) -> bool;
    fn problem_key(&self) -> ProblemKey;
}

/// Cardinality of the set of distinct accepted problems.
///
/// Set semantics, not multiset: repeated accepted submissions for the
/// same problem collapse to one.
pub fn distinct_accepted<'a, I, T>(submissions: I) -> u32
where
    I: IntoIterator<Item = &'a T>,
    T: AcceptedProblem + 'a,
{
    let solved: HashSet<ProblemKey> = submissions
        .into_iter()
        .filter(|s| s.is_accepted())
        .map(|s| s.problem_key())
        .collect();
    solved.len() as u32
}

/// String coercion with an explicit default: numbers render to their
/// decimal form, blank strings and nulls fall back to `default`.
pub fn string_or(v: Option<&Value>, default: &str) -> String {
    match v {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_owned(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_owned(),
    }
}

/// Non-negative integer coercion with an explicit default.
pub fn uint_or(v: Option<&Value>, default: u64) -> u64 {
    match v {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

static RE_STARS: Lazy<Regex> = lazy_regex!(r"^\s*(\d+)");

/// CodeChef star tier as a decimal string. Accepts a bare number or a
/// label like "4★"; anything else is "0".
pub fn stars_label(v: Option<&Value>) -> String {
    match v {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(n) => n.to_string(),
            None => "0".to_owned(),
        },
        Some(Value::String(s)) => match RE_STARS.captures(s) {
            Some(caps) => caps[1].to_owned(),
            None => "0".to_owned(),
        },
        _ => "0".to_owned(),
    }
}
