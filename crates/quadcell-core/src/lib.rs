//! quadcell-core - UI-agnostic cell store with dependency propagation.

pub mod error;
pub mod store;

pub use error::{QuadcellError, Result};
pub use store::{CellView, EditReport, Snapshot, Store, SubscriptionId};

pub use quadcell_engine::engine::{CellError, CellId, Kind, Resolved};
