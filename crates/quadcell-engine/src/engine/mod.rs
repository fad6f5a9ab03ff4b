//! Cell engine API.
//!
//! This module provides the pure building blocks of the sheet:
//!
//! - [`CellId`] - The fixed cell alphabet (`A`..`D`)
//! - [`classify`], [`parse_literal`], [`parse_formula`] - Input classification
//! - [`Cell`], [`Kind`], [`Resolved`], [`Grid`] - Data structures for cell storage
//! - [`extract_dependencies`] - Formula references in input order
//! - [`format_value`] - Format values for display

mod cell;
mod cell_id;
mod deps;
mod format;
mod parse;

pub use cell::{Cell, CellError, Grid, Kind, Resolved, empty_grid};
pub use cell_id::CellId;
pub use deps::{extract_dependencies, unique_dependencies};
pub use format::{DisplayOptions, describe_error, format_value};
pub use parse::{classify, parse_formula, parse_literal};
