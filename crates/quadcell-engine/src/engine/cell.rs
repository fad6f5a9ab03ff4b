//! Cell data structures.
//!
//! This module provides the core data types for representing cells:
//! - [`Kind`] - The classification of a cell's raw input
//! - [`Resolved`] - The computed value of a cell, or why it has none
//! - [`Cell`] - A cell with its raw input, dependencies and resolved value
//! - [`Grid`] - Storage for the fixed set of cells

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cell_id::CellId;
use super::deps::extract_dependencies;
use super::parse::classify;

/// The classification of a cell's raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Empty,
    Literal(i64),
    Formula,
    Invalid,
}

/// Why a cell has no value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellError {
    /// Input is neither a literal nor a pure formula.
    InvalidSyntax,
    /// The formula reaches itself through its references.
    UnresolvedCycle,
    /// A referenced cell (named here) is invalid for a non-cycle reason.
    UnresolvedDependency(CellId),
    /// The sum does not fit in an `i64`.
    Overflow,
}

/// The computed value of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolved {
    /// Empty input. Displays as nothing, counts as 0 in sums.
    Blank,
    Number(i64),
    Unresolved(CellError),
}

impl Resolved {
    /// Contribution of this value to a formula sum.
    pub fn as_operand(&self) -> Result<i64, CellError> {
        match self {
            Resolved::Blank => Ok(0),
            Resolved::Number(n) => Ok(*n),
            Resolved::Unresolved(err) => Err(*err),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolved::Unresolved(_))
    }

    pub fn error(&self) -> Option<CellError> {
        match self {
            Resolved::Unresolved(err) => Some(*err),
            _ => None,
        }
    }
}

/// A cell of the sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub raw_input: String,
    pub kind: Kind,
    pub depends_on: Vec<CellId>,
    pub value: Resolved,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell {
            raw_input: String::new(),
            kind: Kind::Empty,
            depends_on: vec![],
            value: Resolved::Blank,
        }
    }

    /// Build a cell from raw user input.
    ///
    /// Empty, literal and invalid cells get their final value here. Formula
    /// cells come back with a blank placeholder; resolving them needs the
    /// rest of the grid.
    pub fn from_input(input: &str) -> Cell {
        let kind = classify(input);
        let value = match kind {
            Kind::Empty => Resolved::Blank,
            Kind::Literal(n) => Resolved::Number(n),
            Kind::Formula => Resolved::Blank,
            Kind::Invalid => Resolved::Unresolved(CellError::InvalidSyntax),
        };
        Cell {
            raw_input: input.to_string(),
            depends_on: extract_dependencies(input, kind),
            kind,
            value,
        }
    }

    /// False for invalid input, and for a formula that currently has no value.
    pub fn is_valid(&self) -> bool {
        match self.kind {
            Kind::Invalid => false,
            Kind::Formula => self.value.is_resolved(),
            Kind::Empty | Kind::Literal(_) => true,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new_empty()
    }
}

/// Storage for every cell, keyed and ordered by id.
pub type Grid = BTreeMap<CellId, Cell>;

/// A grid holding an empty cell for each id.
pub fn empty_grid() -> Grid {
    CellId::ALL.iter().map(|id| (*id, Cell::new_empty())).collect()
}
