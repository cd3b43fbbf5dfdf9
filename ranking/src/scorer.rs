//! Relevance scoring of a single candidate string against a query.
//!
//! Rules are tried in a fixed order and the first one that matches wins:
//!
//! 1. every query character must occur somewhere in the candidate, else `0`
//! 2. candidate prefix: `100 - len(candidate) / len(query)`
//! 3. prefix of the capital/digit initials ("GitHub" -> "gh"):
//!    `100 - len(initials) / len(query)`
//! 4. exact match of one alphanumeric atom: `100 - len(candidate) / len(query)`
//! 5. prefix of the atom initials: `100 - len(initials) / len(query)`,
//!    infix of the atom initials: `95 - len(initials) / len(query)`
//! 6. candidate substring: `90 - len(candidate) / len(query)`
//!
//! All lengths are counted in `char`s. Matching is case-insensitive except
//! for picking the capital initials, which looks at the original case.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The rule that produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchRule {
    /// No rule matched, or the query was empty
    None,
    /// Candidate starts with the query
    Prefix,
    /// Capital/digit initials start with the query
    Initials,
    /// Query equals one atom of the candidate
    Atom,
    /// Atom initials start with the query
    AtomInitialsPrefix,
    /// Atom initials contain the query
    AtomInitialsInfix,
    /// Candidate contains the query
    Substring,
}

/// A score together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub rule: MatchRule,
}

impl Scored {
    const NO_MATCH: Scored = Scored {
        score: 0.0,
        rule: MatchRule::None,
    };

    fn new(score: f64, rule: MatchRule) -> Self {
        Self { score, rule }
    }

    pub fn is_match(&self) -> bool {
        self.rule != MatchRule::None
    }
}

/// Score `candidate` against `query`. `0.0` means no match.
///
/// An empty query scores `0.0` for every candidate; callers that want
/// "no query means no ranking" should check for that before ranking.
pub fn score(query: &str, candidate: &str) -> f64 {
    score_with_rule(query, candidate).score
}

/// Like [`score`], but also reports which rule matched.
pub fn score_with_rule(query: &str, candidate: &str) -> Scored {
    let query = query.to_lowercase();
    let query_len = char_len(&query);
    if query_len == 0 {
        return Scored::NO_MATCH;
    }
    let query_len = query_len as f64;

    let lowered = candidate.to_lowercase();
    if !covers(&lowered, &query) {
        return Scored::NO_MATCH;
    }

    let candidate_len = char_len(candidate) as f64;
    if lowered.starts_with(&query) {
        return Scored::new(100.0 - candidate_len / query_len, MatchRule::Prefix);
    }

    let initials = capital_initials(candidate);
    if initials.to_lowercase().starts_with(&query) {
        let initials_len = char_len(&initials) as f64;
        return Scored::new(100.0 - initials_len / query_len, MatchRule::Initials);
    }

    let atoms = atoms(candidate);
    if atoms.iter().any(|atom| *atom == query) {
        return Scored::new(100.0 - candidate_len / query_len, MatchRule::Atom);
    }

    let atom_initials: String = atoms.iter().filter_map(|atom| atom.chars().next()).collect();
    let atom_initials_len = char_len(&atom_initials) as f64;
    if atom_initials.starts_with(&query) {
        return Scored::new(
            100.0 - atom_initials_len / query_len,
            MatchRule::AtomInitialsPrefix,
        );
    }
    if atom_initials.contains(&query) {
        return Scored::new(
            95.0 - atom_initials_len / query_len,
            MatchRule::AtomInitialsInfix,
        );
    }

    if lowered.contains(&query) {
        return Scored::new(90.0 - candidate_len / query_len, MatchRule::Substring);
    }

    Scored::NO_MATCH
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// True if every distinct character of `query` appears in `candidate`.
/// Order and multiplicity are ignored.
fn covers(candidate: &str, query: &str) -> bool {
    let available: HashSet<char> = candidate.chars().collect();
    query.chars().all(|c| available.contains(&c))
}

/// Upper-case letters and ASCII digits, in order: "Word2Vec" -> "W2V".
fn capital_initials(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| c.is_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Lower-cased maximal runs of ASCII letters and digits.
fn atoms(candidate: &str) -> Vec<String> {
    candidate
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|atom| !atom.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}
