use super::Store;
use super::eval::Pass;
use crate::error::{QuadcellError, Result};
use quadcell_engine::engine::{Cell, CellId, unique_dependencies};
use std::collections::{BTreeSet, HashMap, HashSet};

/// What a single edit touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditReport {
    pub edited: CellId,
    /// Every recomputed cell, the edited one first, in recompute order.
    pub recomputed: Vec<CellId>,
    /// The first cycle met while recomputing, closing cell repeated at the
    /// end. Any cycle reachable from the edited cell is found here.
    pub cycle: Option<Vec<CellId>>,
}

impl Store {
    /// Replace a cell's raw input and bring every affected value up to date.
    ///
    /// The edited cell is reclassified, the dependency map is rebuilt, the
    /// edited cell and all its transitive dependents are recomputed in
    /// dependency order, and subscribers are notified. Never fails: bad
    /// input and cycles end up as cell state.
    pub fn edit(&mut self, id: CellId, text: &str) -> EditReport {
        let cell = Cell::from_input(text);
        tracing::debug!(cell = %id, input = text, kind = ?cell.kind, "edit");
        self.grid.insert(id, cell);

        // Dependencies may have changed arbitrarily; rebuild from scratch.
        self.rebuild_dependents();

        let affected = self.collect_dependents(id);
        let order = self.recompute_order(id, &affected);
        // One pass for the whole edit: every cell is summed at most once.
        let mut pass = Pass::default();
        for cell_id in &order {
            let value = self.resolve_in(*cell_id, &mut pass);
            tracing::trace!(cell = %cell_id, ?value, "recomputed");
            if let Some(cell) = self.grid.get_mut(cell_id) {
                cell.value = value;
            }
        }

        let cycle = pass.cycle;
        if let Some(path) = &cycle {
            tracing::warn!(cell = %id, path = ?path, "circular reference");
        }

        self.notify();

        EditReport {
            edited: id,
            recomputed: order,
            cycle,
        }
    }

    /// Edit a cell named by its letter, e.g. from command-line input.
    pub fn edit_by_name(&mut self, name: &str, text: &str) -> Result<EditReport> {
        let id = name.parse::<CellId>().map_err(QuadcellError::InvalidCellId)?;
        Ok(self.edit(id, text))
    }

    /// The changed cell plus every cell that depends on it, transitively.
    fn collect_dependents(&self, changed: CellId) -> BTreeSet<CellId> {
        let mut to_process = vec![changed];
        let mut visited = BTreeSet::new();
        while let Some(cell_id) = to_process.pop() {
            if !visited.insert(cell_id) {
                continue;
            }
            if let Some(deps) = self.dependents.get(&cell_id) {
                to_process.extend(deps.iter().copied());
            }
        }
        visited
    }

    /// Order the affected cells so each comes after the affected cells it
    /// references. Cells left on a cycle (or behind one) are appended in id
    /// order; resolving them yields the cycle error rather than a loop.
    fn recompute_order(&self, changed: CellId, affected: &BTreeSet<CellId>) -> Vec<CellId> {
        let mut pending: HashMap<CellId, usize> = HashMap::new();
        for id in affected {
            let inside = unique_dependencies(&self.cell(*id).depends_on)
                .into_iter()
                .filter(|dep| affected.contains(dep) && dep != id)
                .count();
            let self_ref = self.cell(*id).depends_on.contains(id);
            pending.insert(*id, inside + usize::from(self_ref));
        }

        let mut ready: BTreeSet<CellId> = pending
            .iter()
            .filter(|(_, n)| **n == 0)
            .map(|(id, _)| *id)
            .collect();
        let mut order = Vec::with_capacity(affected.len());
        let mut placed = HashSet::new();

        while let Some(id) = ready.pop_first() {
            order.push(id);
            placed.insert(id);
            for dependent in self.dependents_of(id) {
                if dependent == id || !affected.contains(&dependent) {
                    continue;
                }
                if let Some(n) = pending.get_mut(&dependent) {
                    *n -= 1;
                    if *n == 0 {
                        ready.insert(dependent);
                    }
                }
            }
        }

        // The edited cell always leads when it was not placed by the sort.
        if !placed.contains(&changed) {
            order.push(changed);
            placed.insert(changed);
        }
        order.extend(affected.iter().filter(|id| !placed.contains(*id)));
        order
    }
}
