use quadcell_engine::engine::{Cell, CellId, Grid, Kind, Resolved, empty_grid};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use super::notify::Subscribers;

/// Read-only view of one cell, as handed to subscribers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellView {
    pub id: CellId,
    pub raw_input: String,
    pub kind: Kind,
    pub value: Resolved,
    pub is_valid: bool,
}

/// Every cell at one point in time, in `A..D` order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub cells: Vec<CellView>,
}

impl Snapshot {
    pub fn get(&self, id: CellId) -> &CellView {
        &self.cells[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellView> {
        self.cells.iter()
    }
}

/// UI-agnostic state for the four-cell sheet.
///
/// All mutation goes through [`Store::edit`]; the grid is never handed out
/// mutably.
pub struct Store {
    /// The cells, always exactly one per [`CellId`]
    pub(crate) grid: Grid,
    /// Reverse dependency map: cell -> cells that reference it
    pub(crate) dependents: HashMap<CellId, BTreeSet<CellId>>,
    pub(crate) subscribers: Subscribers,
}

impl Store {
    /// Create a store with every cell empty.
    pub fn new() -> Self {
        Store {
            grid: empty_grid(),
            dependents: HashMap::new(),
            subscribers: Subscribers::default(),
        }
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.grid[&id]
    }

    /// Stored value of a cell as of the last edit.
    pub fn value(&self, id: CellId) -> &Resolved {
        &self.cell(id).value
    }

    /// Cells whose formula references `id` directly.
    pub fn dependents_of(&self, id: CellId) -> Vec<CellId> {
        self.dependents
            .get(&id)
            .map(|deps| deps.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: CellId::ALL
                .iter()
                .map(|id| {
                    let cell = self.cell(*id);
                    CellView {
                        id: *id,
                        raw_input: cell.raw_input.clone(),
                        kind: cell.kind,
                        value: cell.value,
                        is_valid: cell.is_valid(),
                    }
                })
                .collect(),
        }
    }

    /// Rebuild the reverse dependency map from the grid.
    /// Called after every edit so no stale edge survives.
    pub(crate) fn rebuild_dependents(&mut self) {
        self.dependents.clear();
        for (id, cell) in &self.grid {
            for dep in &cell.depends_on {
                self.dependents.entry(*dep).or_default().insert(*id);
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
