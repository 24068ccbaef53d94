use anyhow::{Context, Result};

use super::key::{Key, KeyCode};

// ── Actions ──────────────────────────────────────────────────────────

/// Every discrete action available while browsing the list.
///
/// Input and help modes have fixed keys and don't go through the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    AddTask,
    ShowHelp,
    DeleteTask,
}

impl Action {
    pub const ALL: [Self; 6] = [
        Self::MoveUp,
        Self::MoveDown,
        Self::AddTask,
        Self::DeleteTask,
        Self::ShowHelp,
        Self::Quit,
    ];

    /// Name used for the `[keys]` table in `config.toml`.
    pub fn config_name(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::MoveUp => "up",
            Self::MoveDown => "down",
            Self::AddTask => "add",
            Self::ShowHelp => "help",
            Self::DeleteTask => "delete",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::MoveUp => "Move selection up",
            Self::MoveDown => "Move selection down",
            Self::AddTask => "Add a new task",
            Self::ShowHelp => "Toggle this help view",
            Self::DeleteTask => "Remove selected task",
        }
    }

    fn category(self) -> HelpCategory {
        match self {
            Self::MoveUp | Self::MoveDown => HelpCategory::Navigation,
            Self::AddTask | Self::DeleteTask => HelpCategory::Tasks,
            Self::ShowHelp | Self::Quit => HelpCategory::Application,
        }
    }
}

// ── Help categories ──────────────────────────────────────────────────

/// Logical groupings shown on the help screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpCategory {
    Navigation,
    Tasks,
    Application,
}

impl HelpCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation:",
            Self::Tasks => "Tasks:",
            Self::Application => "Application:",
        }
    }

    /// Fixed display order for the help screen.
    const ORDERED: &[Self] = &[Self::Navigation, Self::Tasks, Self::Application];
}

// ── Keybinding ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub action: Action,
    /// Keys that trigger the action, in display order.
    pub keys: Vec<Key>,
}

/// A single row on the help screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub label: String,
    pub description: &'static str,
}

// ── KeyMap ────────────────────────────────────────────────────────────

/// Declarative registry of the browsing-mode key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::default_keymap()
    }
}

impl KeyMap {
    pub fn default_keymap() -> Self {
        let bindings = Action::ALL
            .iter()
            .map(|&action| KeyBinding {
                action,
                keys: default_keys(action),
            })
            .collect();
        Self { bindings }
    }

    /// Look up the action bound to `key`, if any.
    pub fn lookup(&self, key: &Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|kb| kb.keys.contains(key))
            .map(|kb| kb.action)
    }

    pub fn keys_for(&self, action: Action) -> &[Key] {
        self.bindings
            .iter()
            .find(|kb| kb.action == action)
            .map(|kb| kb.keys.as_slice())
            .unwrap_or_default()
    }

    /// Replace the keys bound to `action` with the parsed `names`.
    ///
    /// Keys are unbound from any other action first so a single key never
    /// maps to two actions.
    pub fn rebind(&mut self, action: Action, names: &[String]) -> Result<()> {
        let keys = names
            .iter()
            .map(|n| Key::parse(n))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("invalid binding for `{}`", action.config_name()))?;

        for kb in &mut self.bindings {
            if kb.action != action {
                kb.keys.retain(|k| !keys.contains(k));
            }
        }
        if let Some(kb) = self.bindings.iter_mut().find(|kb| kb.action == action) {
            tracing::debug!(action = action.config_name(), ?keys, "rebound");
            kb.keys = keys;
        }
        Ok(())
    }

    /// Short label for the first key of `action`, e.g. `"n"` or `"?"`.
    pub fn primary_label(&self, action: Action) -> String {
        self.keys_for(action)
            .first()
            .map_or_else(|| "-".to_string(), display_label)
    }

    /// Generate grouped help entries in display order.
    ///
    /// The enter/confirm line belongs to input mode and is appended to the
    /// tasks group by hand.
    pub fn help_entries(&self) -> Vec<(&'static str, Vec<HelpEntry>)> {
        let mut out = Vec::new();

        for &cat in HelpCategory::ORDERED {
            let mut entries: Vec<HelpEntry> = self
                .bindings
                .iter()
                .filter(|kb| kb.action.category() == cat && !kb.keys.is_empty())
                .map(|kb| HelpEntry {
                    label: kb
                        .keys
                        .iter()
                        .map(display_label)
                        .collect::<Vec<_>>()
                        .join(" / "),
                    description: kb.action.description(),
                })
                .collect();

            if cat == HelpCategory::Tasks {
                entries.push(HelpEntry {
                    label: "Enter".to_string(),
                    description: "Confirm new task (in input mode)",
                });
            }

            if !entries.is_empty() {
                out.push((cat.label(), entries));
            }
        }

        out
    }
}

/// Human-facing label for a key: arrows as glyphs, named keys capitalised.
pub fn display_label(key: &Key) -> String {
    let base = match key.code {
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Backspace => "bk".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Char(c) if key.ctrl => return format!("Ctrl+{}", c.to_ascii_uppercase()),
        _ => return key.name(),
    };
    if key.alt {
        format!("Alt+{base}")
    } else {
        base
    }
}

fn default_keys(action: Action) -> Vec<Key> {
    match action {
        Action::Quit => vec![Key::char('q'), Key::new(KeyCode::Esc), Key::ctrl('c')],
        Action::MoveUp => vec![Key::new(KeyCode::Up), Key::char('k')],
        Action::MoveDown => vec![Key::new(KeyCode::Down), Key::char('j')],
        Action::AddTask => vec![Key::char('n'), Key::char('a')],
        Action::ShowHelp => vec![Key::char('?'), Key::char('h')],
        Action::DeleteTask => vec![
            Key::char('x'),
            Key::char('d'),
            Key::new(KeyCode::Backspace),
        ],
    }
}

// ── Tests ────────────────────────────────────────────────────────────
