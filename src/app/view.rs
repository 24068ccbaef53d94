use std::fmt;

use super::draft::format_with_caret;
use super::keymap::{Action, KeyMap};
use super::session::{Mode, Session};

pub const TITLE: &str = "To-Do";
pub const HELP_TITLE: &str = "Help & Commands";
pub const EMPTY_LIST: &str = "No tasks yet. Press 'n' to add one.";
pub const SELECTED_MARKER: &str = "→ ";
pub const PROMPT: &str = "New Task:";
pub const DRAFT_PLACEHOLDER: &str = "Enter task name...";
pub const INPUT_HINT: &str = "enter: save • esc: cancel";
pub const HELP_HINT: &str = "Press any key to return...";
pub const FAREWELL: &str = "Goodbye!";

const PLAIN_INDENT: &str = "  ";
const ENTRY_LABEL_WIDTH: usize = 10;

/// Structural role of a rendered line. The host maps each role to a style;
/// nothing here knows about colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Title(String),
    Selected(String),
    Normal(String),
    Placeholder(String),
    Prompt(String),
    /// The draft being typed. `caret` is a byte offset into `text`; an empty
    /// `text` is shown as the placeholder.
    Draft { text: String, caret: usize },
    Heading(String),
    Entry { label: String, description: String },
    Hint(String),
    Farewell(String),
    Blank,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Title(t)
            | Line::Prompt(t)
            | Line::Heading(t)
            | Line::Hint(t)
            | Line::Farewell(t) => f.write_str(t),
            Line::Selected(t) => write!(f, "{SELECTED_MARKER}{t}"),
            Line::Normal(t) | Line::Placeholder(t) => write!(f, "{PLAIN_INDENT}{t}"),
            Line::Draft { text, .. } if text.is_empty() => {
                write!(f, "{PLAIN_INDENT}> \u{2588}{DRAFT_PLACEHOLDER}")
            }
            Line::Draft { text, caret } => {
                write!(f, "{PLAIN_INDENT}> {}", format_with_caret(text, *caret))
            }
            Line::Entry { label, description } => write!(
                f,
                "{PLAIN_INDENT}{label:<width$} - {description}",
                width = ENTRY_LABEL_WIDTH
            ),
            Line::Blank => Ok(()),
        }
    }
}

/// One full frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub lines: Vec<Line>,
}

impl View {
    fn push(&mut self, line: Line) {
        self.lines.push(line);
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Project the session into a frame. Never mutates; same input, same frame.
pub fn build(session: &Session, keymap: &KeyMap) -> View {
    let mut view = View::default();

    if session.quitting {
        view.push(Line::Farewell(FAREWELL.to_string()));
        return view;
    }

    match session.mode {
        Mode::Browsing => {
            task_list(&mut view, session);
            view.push(Line::Blank);
            view.push(Line::Hint(browsing_hint(keymap)));
        }
        Mode::Inputting => {
            task_list(&mut view, session);
            view.push(Line::Blank);
            view.push(Line::Prompt(PROMPT.to_string()));
            view.push(Line::Draft {
                text: session.draft.text().to_string(),
                caret: session.draft.caret(),
            });
            view.push(Line::Blank);
            view.push(Line::Hint(INPUT_HINT.to_string()));
        }
        Mode::Help => help_screen(&mut view, keymap),
    }

    view
}

/// Render the session to plain text.
pub fn render(session: &Session, keymap: &KeyMap) -> String {
    build(session, keymap).to_string()
}

fn task_list(view: &mut View, session: &Session) {
    view.push(Line::Title(TITLE.to_string()));
    view.push(Line::Blank);

    if session.tasks.is_empty() {
        view.push(Line::Placeholder(EMPTY_LIST.to_string()));
        return;
    }
    for (i, task) in session.tasks.iter().enumerate() {
        if i == session.cursor {
            view.push(Line::Selected(task.clone()));
        } else {
            view.push(Line::Normal(task.clone()));
        }
    }
}

/// The help screen replaces the list entirely.
fn help_screen(view: &mut View, keymap: &KeyMap) {
    view.push(Line::Title(HELP_TITLE.to_string()));
    view.push(Line::Blank);
    for (heading, entries) in keymap.help_entries() {
        view.push(Line::Heading(heading.to_string()));
        for e in entries {
            view.push(Line::Entry {
                label: e.label,
                description: e.description.to_string(),
            });
        }
        view.push(Line::Blank);
    }
    view.push(Line::Hint(HELP_HINT.to_string()));
}

fn browsing_hint(keymap: &KeyMap) -> String {
    let nav = format!(
        "{}/{}",
        keymap.primary_label(Action::MoveUp),
        keymap.primary_label(Action::MoveDown)
    );
    [
        (nav, "navigate"),
        (keymap.primary_label(Action::AddTask), "add"),
        (keymap.primary_label(Action::DeleteTask), "delete"),
        (keymap.primary_label(Action::ShowHelp), "help"),
        (keymap.primary_label(Action::Quit), "quit"),
    ]
    .iter()
    .map(|(key, what)| format!("{key}: {what}"))
    .collect::<Vec<_>>()
    .join(" • ")
}
