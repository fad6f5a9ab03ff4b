//! Dependency extraction from cell input.
//!
//! A formula depends on every cell it names, once per occurrence: `AAB`
//! depends on `[A, A, B]`. Any other kind of input has no dependencies.

use super::cell::Kind;
use super::cell_id::CellId;
use super::parse::parse_formula;

/// Extract the ordered references of a classified input.
pub fn extract_dependencies(input: &str, kind: Kind) -> Vec<CellId> {
    match kind {
        Kind::Formula => parse_formula(input).unwrap_or_default(),
        Kind::Empty | Kind::Literal(_) | Kind::Invalid => Vec::new(),
    }
}

/// Distinct references in first-seen order.
pub fn unique_dependencies(deps: &[CellId]) -> Vec<CellId> {
    let mut out: Vec<CellId> = Vec::with_capacity(deps.len());
    for dep in deps {
        if !out.contains(dep) {
            out.push(*dep);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_dependencies_ignores_kind_mismatch() {
        // A literal never has references even if the caller passes its text.
        assert!(extract_dependencies("12", Kind::Literal(12)).is_empty());
        assert!(extract_dependencies("AB", Kind::Invalid).is_empty());
    }

    #[test]
    fn test_unique_dependencies_keeps_first_seen_order() {
        let deps = [CellId::C, CellId::A, CellId::C, CellId::B, CellId::A];
        assert_eq!(
            unique_dependencies(&deps),
            vec![CellId::C, CellId::A, CellId::B]
        );
    }
}
