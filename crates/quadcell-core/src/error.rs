//! Error types for Quadcell core.
//!
//! Cell-level problems (bad syntax, cycles) are stored as cell state and
//! never surface here.

use thiserror::Error;

/// Errors returned at the store boundary
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuadcellError {
    #[error("{0}")]
    InvalidCellId(String),

    #[error("Unknown subscription {0}")]
    UnknownSubscription(u64),
}

pub type Result<T> = std::result::Result<T, QuadcellError>;
