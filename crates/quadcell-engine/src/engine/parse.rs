//! Input classification.
//!
//! Every edit is classified as exactly one of:
//! - empty: the empty string
//! - literal: an optional sign followed by ASCII digits that fit in an `i64`
//! - formula: one or more letters from the cell alphabet, nothing else
//! - invalid: anything else (`3A`, `ABxy`, ` 1`, `A B`, ...)
//!
//! Matches must cover the whole input. Whitespace is not trimmed.

use regex::Regex;
use std::sync::OnceLock;

use super::cell::Kind;
use super::cell_id::CellId;

/// Classify raw cell input.
pub fn classify(text: &str) -> Kind {
    if text.is_empty() {
        return Kind::Empty;
    }
    if let Some(n) = parse_literal(text) {
        return Kind::Literal(n);
    }
    if formula_re().is_match(text) {
        return Kind::Formula;
    }
    Kind::Invalid
}

/// Parse a literal integer. Returns None unless the whole input is a signed
/// or unsigned run of digits that fits in an `i64`.
pub fn parse_literal(text: &str) -> Option<i64> {
    if !literal_re().is_match(text) {
        return None;
    }
    text.parse::<i64>().ok()
}

/// Split a formula into its references, preserving order and duplicates.
/// Returns None unless the whole input is a formula.
pub fn parse_formula(text: &str) -> Option<Vec<CellId>> {
    if !formula_re().is_match(text) {
        return None;
    }
    text.chars().map(CellId::from_char).collect()
}

fn literal_re() -> &'static Regex {
    static LITERAL_RE: OnceLock<Regex> = OnceLock::new();
    LITERAL_RE.get_or_init(|| {
        Regex::new(r"^[+-]?[0-9]+$").expect("literal regex must compile")
    })
}

fn formula_re() -> &'static Regex {
    static FORMULA_RE: OnceLock<Regex> = OnceLock::new();
    FORMULA_RE.get_or_init(|| {
        Regex::new(&format!("^[{}]+$", CellId::alphabet())).expect("formula regex must compile")
    })
}
