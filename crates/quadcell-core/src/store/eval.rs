use super::Store;
use quadcell_engine::engine::{CellError, CellId, Kind, Resolved};
use std::collections::HashMap;

/// State of one resolution pass.
///
/// `resolving` is the chain of formulas currently being summed; meeting one
/// of them again is a cycle. `memo` holds every cell finished in this pass,
/// so each cell is summed at most once however often it is referenced.
#[derive(Debug, Default)]
pub(crate) struct Pass {
    resolving: Vec<CellId>,
    memo: HashMap<CellId, Resolved>,
    /// First cycle met in this pass, closing cell repeated at the end.
    pub(crate) cycle: Option<Vec<CellId>>,
}

impl Store {
    /// Compute the current value of a cell from the raw state of the grid.
    ///
    /// A cell that reaches a cycle is `UnresolvedCycle`, even when one of its
    /// other references is invalid for another reason.
    pub fn resolve(&self, id: CellId) -> Resolved {
        self.resolve_in(id, &mut Pass::default())
    }

    pub(crate) fn resolve_in(&self, id: CellId, pass: &mut Pass) -> Resolved {
        if let Some(value) = pass.memo.get(&id) {
            return *value;
        }
        let cell = self.cell(id);
        let value = match cell.kind {
            Kind::Empty => Resolved::Blank,
            Kind::Literal(n) => Resolved::Number(n),
            Kind::Invalid => Resolved::Unresolved(CellError::InvalidSyntax),
            Kind::Formula => {
                if let Some(pos) = pass.resolving.iter().position(|c| *c == id) {
                    if pass.cycle.is_none() {
                        let mut path = pass.resolving[pos..].to_vec();
                        path.push(id);
                        pass.cycle = Some(path);
                    }
                    // Still in progress further up the chain; not memoized.
                    return Resolved::Unresolved(CellError::UnresolvedCycle);
                }
                pass.resolving.push(id);
                let result = self.sum_dependencies(&cell.depends_on, pass);
                pass.resolving.pop();
                match result {
                    Ok(sum) => Resolved::Number(sum),
                    Err(err) => Resolved::Unresolved(err),
                }
            }
        };
        pass.memo.insert(id, value);
        value
    }

    fn sum_dependencies(&self, deps: &[CellId], pass: &mut Pass) -> Result<i64, CellError> {
        let mut acc: Result<i64, CellError> = Ok(0);
        for dep in deps {
            match self.resolve_in(*dep, pass).as_operand() {
                Err(CellError::UnresolvedCycle) => return Err(CellError::UnresolvedCycle),
                // Keep walking: a later reference may still reach a cycle.
                Err(err) => {
                    if acc.is_ok() {
                        acc = Err(cascade(*dep, err));
                    }
                }
                Ok(n) => {
                    if let Ok(sum) = acc {
                        acc = sum.checked_add(n).ok_or(CellError::Overflow);
                    }
                }
            }
        }
        acc
    }
}

/// Error a formula inherits from a failing reference. Cycles keep their
/// identity; anything else is attributed to the cell it started from.
fn cascade(dep: CellId, err: CellError) -> CellError {
    match err {
        CellError::UnresolvedCycle => CellError::UnresolvedCycle,
        CellError::UnresolvedDependency(origin) => CellError::UnresolvedDependency(origin),
        CellError::InvalidSyntax | CellError::Overflow => CellError::UnresolvedDependency(dep),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcell_engine::engine::CellId::{A, B, C, D};

    #[test]
    fn test_cascade_keeps_cycle_identity() {
        assert_eq!(
            cascade(CellId::B, CellError::UnresolvedCycle),
            CellError::UnresolvedCycle
        );
        assert_eq!(
            cascade(CellId::B, CellError::InvalidSyntax),
            CellError::UnresolvedDependency(CellId::B)
        );
        assert_eq!(
            cascade(CellId::C, CellError::UnresolvedDependency(CellId::A)),
            CellError::UnresolvedDependency(CellId::A)
        );
    }

    #[test]
    fn test_cycle_wins_over_earlier_invalid_reference() {
        let mut store = Store::new();
        store.edit(B, "x");
        store.edit(A, "BA");
        assert_eq!(store.value(A), &Resolved::Unresolved(CellError::UnresolvedCycle));
    }

    #[test]
    fn test_pass_memoizes_repeated_references() {
        let mut store = Store::new();
        store.edit(D, "3");
        store.edit(C, "DD");
        let mut pass = Pass::default();
        assert_eq!(store.resolve_in(C, &mut pass), Resolved::Number(6));
        assert_eq!(pass.memo.len(), 2);
        assert!(pass.resolving.is_empty());
        assert!(pass.cycle.is_none());
    }
}
