use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use std::io;

use super::actions::{ApplyResult, apply_key};
use super::app::App;
use super::ui;

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (Windows reports Press + Release)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if apply_key(app, key) == ApplyResult::Quit {
                return Ok(());
            }
        }
    }
}
