use std::fmt;

use anyhow::{Result, bail};

/// Terminal-independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    /// Anything the host could not map (function keys, media keys, ...).
    Other,
}

/// A single key press as seen by the controller.
///
/// Shift is folded into the character itself (`'?'`, `'K'`), so only the
/// modifiers that change meaning are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
}

impl Key {
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
        }
    }

    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            ctrl: true,
            alt: false,
        }
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: true,
        }
    }

    /// Canonical name, e.g. `"q"`, `"ctrl+c"`, `"alt+left"`, `"space"`.
    pub fn name(&self) -> String {
        let base = match self.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Other => "unknown".to_string(),
        };
        let mut name = String::new();
        if self.ctrl {
            name.push_str("ctrl+");
        }
        if self.alt {
            name.push_str("alt+");
        }
        name.push_str(&base);
        name
    }

    /// Parse a canonical key name (case-insensitive for modifiers and named keys).
    pub fn parse(name: &str) -> Result<Self> {
        let mut rest = name.trim();
        if rest.is_empty() {
            bail!("empty key name");
        }

        let mut key = Key::new(KeyCode::Other);
        loop {
            let lower = rest.to_ascii_lowercase();
            if lower.len() > 5 && lower.starts_with("ctrl+") {
                key.ctrl = true;
                rest = &rest[5..];
            } else if lower.len() > 4 && lower.starts_with("alt+") {
                key.alt = true;
                rest = &rest[4..];
            } else {
                break;
            }
        }

        let mut chars = rest.chars();
        key.code = match (chars.next(), chars.next()) {
            (Some('↑'), None) => KeyCode::Up,
            (Some('↓'), None) => KeyCode::Down,
            (Some('←'), None) => KeyCode::Left,
            (Some('→'), None) => KeyCode::Right,
            // Terminals report ctrl+letter as the lowercase letter.
            (Some(c), None) if key.ctrl && c.is_ascii_alphabetic() => {
                KeyCode::Char(c.to_ascii_lowercase())
            }
            (Some(c), None) => KeyCode::Char(c),
            _ => match rest.to_ascii_lowercase().as_str() {
                "space" => KeyCode::Char(' '),
                "up" => KeyCode::Up,
                "down" => KeyCode::Down,
                "left" => KeyCode::Left,
                "right" => KeyCode::Right,
                "home" => KeyCode::Home,
                "end" => KeyCode::End,
                "enter" | "return" => KeyCode::Enter,
                "esc" | "escape" => KeyCode::Esc,
                "backspace" | "bk" => KeyCode::Backspace,
                "delete" | "del" => KeyCode::Delete,
                "tab" => KeyCode::Tab,
                _ => bail!("unknown key name: {name:?}"),
            },
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
