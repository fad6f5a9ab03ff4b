//! Application state.
//!
//! [`App`] owns the cell [`Store`] and the cursor. The screen is drawn from
//! the latest snapshot pushed by the store's subscription, never from the
//! store's internals.

use quadcell_core::{Snapshot, Store};
use quadcell_engine::engine::{CellId, DisplayOptions, describe_error};
use std::cell::RefCell;
use std::rc::Rc;

/// Main application state container.
pub struct App {
    store: Store,
    /// Latest snapshot published by the store
    snapshot: Rc<RefCell<Snapshot>>,
    /// Cell being edited
    pub selected: CellId,
    /// Cursor position within the selected cell's text (byte offset)
    pub edit_cursor: usize,
    /// Markers for empty and invalid values
    pub display: DisplayOptions,
    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(display: DisplayOptions) -> Self {
        let mut store = Store::new();
        let snapshot = Rc::new(RefCell::new(store.snapshot()));
        let sink = Rc::clone(&snapshot);
        store.subscribe(move |snap| *sink.borrow_mut() = snap.clone());

        App {
            store,
            snapshot,
            selected: CellId::A,
            edit_cursor: 0,
            display,
            status_message: String::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    /// Raw text of the selected cell.
    pub fn current_input(&self) -> String {
        self.snapshot.borrow().get(self.selected).raw_input.clone()
    }

    /// Send the selected cell's new text to the store.
    pub fn commit_input(&mut self, text: &str) {
        self.store.edit(self.selected, text);
        self.refresh_status();
    }

    pub fn select(&mut self, id: CellId) {
        self.selected = id;
        self.edit_cursor = self.current_input().len();
        self.refresh_status();
    }

    pub fn select_next(&mut self) {
        let next = CellId::ALL[(self.selected.index() + 1) % CellId::ALL.len()];
        self.select(next);
    }

    pub fn select_prev(&mut self) {
        let len = CellId::ALL.len();
        let prev = CellId::ALL[(self.selected.index() + len - 1) % len];
        self.select(prev);
    }

    fn refresh_status(&mut self) {
        let snap = self.snapshot.borrow();
        let view = snap.get(self.selected);
        self.status_message = match view.value.error() {
            Some(err) => format!("{}: {}", view.id, describe_error(&err)),
            None => String::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadcell_engine::engine::Resolved;

    #[test]
    fn test_snapshot_follows_edits() {
        let mut app = App::new(DisplayOptions::default());
        app.commit_input("4");
        app.select(CellId::B);
        app.commit_input("AA");
        let snap = app.snapshot();
        assert_eq!(snap.get(CellId::B).value, Resolved::Number(8));

        app.select(CellId::A);
        app.commit_input("1");
        assert_eq!(app.snapshot().get(CellId::B).value, Resolved::Number(2));
    }

    #[test]
    fn test_status_describes_error() {
        let mut app = App::new(DisplayOptions::default());
        app.commit_input("A");
        assert_eq!(app.status_message, "A: circular reference");
        app.commit_input("");
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = App::new(DisplayOptions::default());
        app.select_prev();
        assert_eq!(app.selected, CellId::D);
        app.select_next();
        assert_eq!(app.selected, CellId::A);
    }
}
