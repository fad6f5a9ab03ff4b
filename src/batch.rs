//! Non-interactive mode: apply `CELL=TEXT` edits in order, print the sheet.

use quadcell_core::{Snapshot, Store};
use quadcell_engine::engine::{DisplayOptions, format_value};

use crate::error::{CliError, Result};

/// Split a `CELL=TEXT` argument. The text may be empty or contain `=`.
pub fn parse_edit(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .ok_or_else(|| CliError::MalformedEdit(arg.to_string()))
}

/// Apply the edits to a fresh store and return the final snapshot.
pub fn run_edits(edits: &[String]) -> Result<Snapshot> {
    let mut store = Store::new();
    for arg in edits {
        let (name, text) = parse_edit(arg)?;
        let report = store.edit_by_name(name, text)?;
        tracing::info!(
            cell = %report.edited,
            recomputed = report.recomputed.len(),
            cycle = report.cycle.is_some(),
            "applied edit"
        );
    }
    Ok(store.snapshot())
}

/// One `id<TAB>raw<TAB>display` line per cell.
pub fn render(snapshot: &Snapshot, options: &DisplayOptions) -> String {
    let mut out = String::new();
    for view in snapshot.iter() {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            view.id,
            view.raw_input,
            format_value(&view.value, options)
        ));
    }
    out
}
