//! Parsing of routing-condition expressions.
//!
//! Apigee flows carry boolean routing conditions of the form
//! `(request.verb = "GET") and (proxy.pathsuffix MatchesPath "/users/list")`,
//! with clauses joined by `and` in any order. This module normalizes such an
//! expression, splits it into clauses, and classifies each clause into a path
//! suffix or an HTTP verb.

use std::fmt;

/// An HTTP verb recognized in a `request.verb` clause.
///
/// `Unknown` is the sentinel for conditions with no recognizable verb clause;
/// it is a legitimate output, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Unknown,
}

impl Verb {
    /// Classifies the right-hand side of a `request.verb` clause.
    /// Unrecognized values collapse to `Unknown`.
    fn from_clause_value(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "PATCH" => Self::Patch,
            _ => Self::Unknown,
        }
    }

    /// The HTTP method name, or the `"Unknown"` sentinel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of classifying one routing condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCondition {
    /// The path suffix named by a `MatchesPath` clause, stripped of leading
    /// and trailing slashes. `None` when no clause matches a path, in which
    /// case the flow is not a routable endpoint.
    pub path_suffix: Option<String>,
    /// The verb named by a `request.verb` clause, or `Verb::Unknown`.
    pub verb: Verb,
}

/// Normalizes a routing condition, splits it into clauses on the literal
/// keyword `and`, and classifies each clause.
///
/// Parsing is deliberately permissive: clauses matching neither category are
/// ignored rather than rejected, and when a category's keyword appears in
/// more than one clause the last occurrence wins.
pub fn parse_condition(condition: &str) -> ParsedCondition {
    let normalized = normalize(condition);

    let mut path_suffix = None;
    let mut verb = Verb::Unknown;

    for raw_clause in normalized.split("and") {
        let clause = raw_clause.trim();

        if let Some((_, remainder)) = clause.split_once("MatchesPath") {
            let suffix = remainder.trim_matches(|c: char| c.is_whitespace() || c == '/');
            path_suffix = Some(suffix.to_string());
        }
        if clause.contains("request.verb") {
            if let Some((_, value)) = clause.split_once('=') {
                verb = Verb::from_clause_value(value.trim());
            }
        }
    }

    ParsedCondition { path_suffix, verb }
}

/// Strips parentheses and quote characters, leaving clause keywords and
/// values intact for splitting.
fn normalize(condition: &str) -> String {
    condition
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}
