use super::draft::Draft;

/// Which key table and which screen are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Inputting,
    Help,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Browsing => "browsing",
            Mode::Inputting => "inputting",
            Mode::Help => "help",
        }
    }
}

/// Everything the editor knows. Replaced wholesale by the controller on
/// every key; nothing else writes to it.
///
/// Invariants: `cursor < tasks.len()` whenever `tasks` is non-empty (0
/// otherwise), and `draft` is empty unless `mode` is [`Mode::Inputting`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub tasks: Vec<String>,
    pub cursor: usize,
    pub mode: Mode,
    pub draft: Draft,
    pub quitting: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-filled list, cursor on the first item.
    pub fn with_tasks<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: tasks.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.tasks.get(self.cursor).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let s = Session::new();
        assert!(s.tasks.is_empty());
        assert_eq!(s.cursor, 0);
        assert_eq!(s.mode, Mode::Browsing);
        assert!(s.draft.is_empty());
        assert!(!s.quitting);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn with_tasks_selects_first() {
        let s = Session::with_tasks(["A", "B"]);
        assert_eq!(s.selected(), Some("A"));
    }
}
