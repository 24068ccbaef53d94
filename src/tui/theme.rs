use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::app::Line;

/// Colours for every line role the renderer emits.
///
/// Any field can be overridden via `[theme]` in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: Color,
    pub accent: Color,
    pub text: Color,
    pub heading: Color,
    pub hint: Color,
    pub placeholder: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::Indexed(99),
            accent: Color::Indexed(212),
            text: Color::Indexed(245),
            heading: Color::Indexed(205),
            hint: Color::Indexed(241),
            placeholder: Color::Indexed(240),
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Selected row, selection marker, prompt and caret.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.heading)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.placeholder)
    }

    /// Base style for a whole line of the given role.
    pub fn line_style(&self, line: &Line) -> Style {
        match line {
            Line::Title(_) => self.title_style(),
            Line::Selected(_) | Line::Prompt(_) | Line::Farewell(_) => self.accent_style(),
            Line::Normal(_) | Line::Placeholder(_) | Line::Entry { .. } | Line::Draft { .. } => {
                self.text_style()
            }
            Line::Heading(_) => self.heading_style(),
            Line::Hint(_) => self.hint_style(),
            Line::Blank => Style::default(),
        }
    }
}

// ── Config deserialization ────────────────────────────────────────────

/// All-optional mirror of [`Theme`] for the `[theme]` section.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub title: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub heading: Option<String>,
    pub hint: Option<String>,
    pub placeholder: Option<String>,
}

/// Parse a colour string into a ratatui `Color`.
///
/// `rgb(R,G,B)` is handled here; everything else goes to ratatui's own
/// parser, which knows names (`"cyan"`, `"dark gray"`), `#rrggbb` and
/// palette indices (`"212"`).
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        Some(inner) => parse_rgb(inner),
        None => s.parse().ok(),
    }
}

fn parse_rgb(inner: &str) -> Option<Color> {
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Some(Color::Rgb(r, g, b)),
        _ => None,
    }
}

fn apply(name: &str, target: &mut Color, source: Option<&String>) {
    let Some(s) = source else { return };
    match parse_color(s) {
        Some(color) => *target = color,
        None => tracing::warn!(field = name, value = %s, "ignoring unparseable theme colour"),
    }
}

impl ThemeConfig {
    /// Build a `Theme` from defaults, overriding whatever the config sets.
    pub fn build(&self) -> Theme {
        let mut t = Theme::default();

        apply("title", &mut t.title, self.title.as_ref());
        apply("accent", &mut t.accent, self.accent.as_ref());
        apply("text", &mut t.text, self.text.as_ref());
        apply("heading", &mut t.heading, self.heading.as_ref());
        apply("hint", &mut t.hint, self.hint.as_ref());
        apply("placeholder", &mut t.placeholder, self.placeholder.as_ref());

        t
    }
}
