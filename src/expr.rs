//! Rule-expression parser.
//!
//! A rule expression is one or more clauses separated by `|`, where each
//! clause is `token` or `token(argument)`.  Clauses combine with AND
//! semantics: every clause's check must pass, evaluated left to right
//! with a stop at the first failure.
//!
//! The clause split is parenthesis-aware: a `|` inside parentheses never
//! splits, so `each(gt(0) | lt(10))` stays one clause and the `each`
//! constructor re-parses its inner text recursively.

use crate::check::BoxedCheck;
use crate::registry::Registry;

/// Parses a rule expression into its checks, in clause order.
///
/// Clauses whose token has no registered constructor are skipped rather
/// than treated as errors, so rule strings written for a newer
/// vocabulary still validate the clauses this registry knows.  An empty
/// rule string yields no checks.
#[must_use]
pub fn parse(registry: &Registry, rule: &str) -> Vec<BoxedCheck> {
    let mut parsed = Vec::new();
    for clause in split_clauses(rule) {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }
        let token = token_of(clause);
        match registry.resolve(token, argument_of(clause)) {
            Some(check) => parsed.push(check),
            None => {
                tracing::trace!(token, "no constructor registered for token, clause skipped");
            }
        }
    }
    parsed
}

/// Splits a rule expression on `|` at parenthesis depth zero.
fn split_clauses(rule: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in rule.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => {
                clauses.push(&rule[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    clauses.push(&rule[start..]);
    clauses
}

/// The clause's token: text before the first `(`, or the whole clause.
fn token_of(clause: &str) -> &str {
    match clause.find('(') {
        Some(open) => clause[..open].trim_end(),
        None => clause,
    }
}

/// The clause's argument: text strictly between the first `(` and the
/// last `)`.  Missing or inverted parenthesis markers yield an empty
/// argument, not an error.
fn argument_of(clause: &str) -> &str {
    match (clause.find('('), clause.rfind(')')) {
        (Some(open), Some(close)) if open < close => clause[open + 1..close].trim(),
        _ => "",
    }
}
