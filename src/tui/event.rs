use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Key, KeyCode};

pub enum AppEvent {
    Key(Key),
    Tick,
}

/// Wait up to `tick_rate` for a key press; anything else is a tick.
pub fn poll(tick_rate: Duration) -> Result<AppEvent> {
    if event::poll(tick_rate)?
        && let Event::Key(key) = event::read()?
        && let Some(key) = convert(key)
    {
        return Ok(AppEvent::Key(key));
    }
    Ok(AppEvent::Tick)
}

/// Map a crossterm key event onto the editor's key type.
///
/// Releases are dropped (some terminals report them).
pub fn convert(ev: KeyEvent) -> Option<Key> {
    use crossterm::event::KeyCode as Ct;

    if ev.kind == KeyEventKind::Release {
        return None;
    }

    let code = match ev.code {
        Ct::Char(c) if ev.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyCode::Char(c.to_ascii_lowercase())
        }
        Ct::Char(c) => KeyCode::Char(c),
        Ct::Up => KeyCode::Up,
        Ct::Down => KeyCode::Down,
        Ct::Left => KeyCode::Left,
        Ct::Right => KeyCode::Right,
        Ct::Home => KeyCode::Home,
        Ct::End => KeyCode::End,
        Ct::Enter => KeyCode::Enter,
        Ct::Esc => KeyCode::Esc,
        Ct::Backspace => KeyCode::Backspace,
        Ct::Delete => KeyCode::Delete,
        Ct::Tab => KeyCode::Tab,
        _ => KeyCode::Other,
    };

    Some(Key {
        code,
        ctrl: ev.modifiers.contains(KeyModifiers::CONTROL),
        alt: ev.modifiers.contains(KeyModifiers::ALT),
    })
}
