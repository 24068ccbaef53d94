use super::draft::DEFAULT_MAX_LEN;
use super::key::{Key, KeyCode};
use super::keymap::{Action, KeyMap};
use super::session::{Mode, Session};

/// Instruction for the host that is not itself a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stop the event loop.
    Quit,
    /// The input line gained focus; start blinking the caret.
    FocusInput,
}

/// Pure transition function over [`Session`].
#[derive(Debug, Clone)]
pub struct Controller {
    keymap: KeyMap,
    max_len: usize,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(KeyMap::default_keymap(), DEFAULT_MAX_LEN)
    }
}

impl Controller {
    pub fn new(keymap: KeyMap, max_len: usize) -> Self {
        Self { keymap, max_len }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Consume one key and produce the next session.
    ///
    /// Total over every (mode, key) pair. A quitting session is returned
    /// untouched.
    pub fn step(&self, mut session: Session, key: Key) -> (Session, Option<Effect>) {
        if session.quitting {
            return (session, None);
        }

        let before = session.mode;
        let effect = match session.mode {
            Mode::Browsing => self.browsing(&mut session, key),
            Mode::Inputting => self.inputting(&mut session, key),
            Mode::Help => {
                help(&mut session, key);
                None
            }
        };

        if session.mode != before {
            tracing::debug!(from = before.as_str(), to = session.mode.as_str(), "mode");
        }
        (session, effect)
    }

    fn browsing(&self, s: &mut Session, key: Key) -> Option<Effect> {
        match self.keymap.lookup(&key)? {
            Action::Quit => {
                s.quitting = true;
                return Some(Effect::Quit);
            }
            Action::MoveUp => s.cursor = s.cursor.saturating_sub(1),
            Action::MoveDown => {
                if !s.tasks.is_empty() {
                    s.cursor = (s.cursor + 1).min(s.tasks.len() - 1);
                }
            }
            Action::AddTask => {
                s.mode = Mode::Inputting;
                return Some(Effect::FocusInput);
            }
            Action::ShowHelp => s.mode = Mode::Help,
            Action::DeleteTask => {
                if s.cursor < s.tasks.len() {
                    let removed = s.tasks.remove(s.cursor);
                    tracing::debug!(index = s.cursor, task = %removed, "removed task");
                    if s.cursor >= s.tasks.len() && s.cursor > 0 {
                        s.cursor -= 1;
                    }
                }
            }
        }
        None
    }

    fn inputting(&self, s: &mut Session, key: Key) -> Option<Effect> {
        match (key.code, key.ctrl, key.alt) {
            (KeyCode::Esc, false, false) => {
                s.draft.take();
                s.mode = Mode::Browsing;
            }
            (KeyCode::Enter, false, false) => {
                let text = s.draft.take();
                if !text.is_empty() {
                    tracing::debug!(task = %text, "added task");
                    s.tasks.push(text);
                    s.cursor = s.tasks.len() - 1;
                }
                s.mode = Mode::Browsing;
            }
            _ => {
                s.draft.apply(key, self.max_len);
            }
        }
        None
    }
}

/// Help consumes every key; only the return keys leave it.
fn help(s: &mut Session, key: Key) {
    if key.ctrl || key.alt {
        return;
    }
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?' | 'h')
    ) {
        s.mode = Mode::Browsing;
    }
}
