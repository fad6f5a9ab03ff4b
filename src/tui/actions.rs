use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Apply an editing key to `text` at byte offset `cursor`, which always sits
/// on a char boundary. Returns true if the text changed.
fn edit_text(text: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    let before = text[..*cursor].chars().next_back().map_or(0, char::len_utf8);
    let after = text[*cursor..].chars().next().map_or(0, char::len_utf8);
    match key.code {
        KeyCode::Left => *cursor -= before,
        KeyCode::Right => *cursor += after,
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = text.len(),
        KeyCode::Backspace if before > 0 => {
            *cursor -= before;
            text.drain(*cursor..*cursor + before);
            return true;
        }
        KeyCode::Delete if after > 0 => {
            text.drain(*cursor..*cursor + after);
            return true;
        }
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            text.insert(*cursor, c);
            *cursor += c.len_utf8();
            return true;
        }
        _ => {}
    }
    false
}

/// Result of applying a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply a key press to the application state.
///
/// Every change to the selected cell's text is one edit on the store.
pub fn apply_key(app: &mut App, key: KeyEvent) -> ApplyResult {
    match key.code {
        KeyCode::Esc => return ApplyResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return ApplyResult::Quit;
        }
        KeyCode::Up | KeyCode::BackTab => app.select_prev(),
        KeyCode::Down | KeyCode::Tab | KeyCode::Enter => app.select_next(),
        _ => {
            let mut buffer = app.current_input();
            let mut cursor = app.edit_cursor.min(buffer.len());
            if edit_text(&mut buffer, &mut cursor, key) {
                app.commit_input(&buffer);
            }
            app.edit_cursor = cursor;
        }
    }
    ApplyResult::Continue
}
