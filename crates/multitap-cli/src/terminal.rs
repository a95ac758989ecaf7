//! Terminal backend: raw mode and crossterm key events.

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};

use crate::capture::KeyPress;

/// Keeps the terminal in raw mode until dropped.
pub struct RawMode;

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocks until the next key press. Release events are skipped.
pub fn read_key() -> io::Result<KeyPress> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(convert_key_event(key));
            }
        }
    }
}

/// Maps a crossterm key event onto a [`KeyPress`]. Ctrl+C becomes
/// [`KeyPress::Interrupt`]; keys the capture has no use for become
/// [`KeyPress::Other`].
pub fn convert_key_event(event: KeyEvent) -> KeyPress {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyPress::Interrupt
        }
        KeyCode::Char(ch) => KeyPress::Char(ch),
        KeyCode::Enter => KeyPress::Enter,
        KeyCode::Backspace => KeyPress::Backspace,
        KeyCode::Esc => KeyPress::Escape,
        _ => KeyPress::Other,
    }
}
