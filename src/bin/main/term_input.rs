use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rondo_core::input::{InputEvent, InputProvider};

/// Keyboard input mapped to carousel actions. `q`, `Esc`, and ctrl-c
/// request shutdown through the shared flag instead of producing an
/// event.
pub struct TermInput {
    quit: Arc<AtomicBool>,
}

impl TermInput {
    pub fn new(quit: Arc<AtomicBool>) -> Self {
        Self { quit }
    }
}

impl InputProvider for TermInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if is_quit(key) {
                self.quit.store(true, Ordering::Relaxed);
                return Ok(None);
            }

            if let Some(mapped) = map_key(key.code) {
                return Ok(Some(mapped));
            }
        }

        Ok(None)
    }
}

fn map_key(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Right | KeyCode::Char('l') => Some(InputEvent::Next),
        KeyCode::Left | KeyCode::Char('h') => Some(InputEvent::Prev),
        KeyCode::Char(digit @ '1'..='9') => Some(InputEvent::Goto(digit as u16 - '1' as u16)),
        _ => None,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
