//! Cell store state and logic (UI-agnostic).

mod eval;
mod notify;
mod ops;
mod state;

pub use notify::SubscriptionId;
pub use ops::EditReport;
pub use state::{CellView, Snapshot, Store};
