use ratatui::{
    Frame,
    layout::{Margin, Rect},
    text::{Line as TextLine, Span, Text},
    widgets::Paragraph,
};

use crate::app::view::{DRAFT_PLACEHOLDER, SELECTED_MARKER};
use crate::app::{Line, View};

use super::theme::Theme;

const INDENT: &str = "  ";
const DRAFT_PROMPT: &str = "> ";
const CARET: &str = "\u{2588}";

pub fn draw(frame: &mut Frame, view: &View, theme: &Theme, caret_visible: bool) {
    let area = frame.area().inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    draw_view(frame, area, view, theme, caret_visible);
}

fn draw_view(frame: &mut Frame, area: Rect, view: &View, theme: &Theme, caret_visible: bool) {
    let lines: Vec<TextLine<'_>> = view
        .lines
        .iter()
        .map(|line| styled_line(line, theme, caret_visible, area.width))
        .collect();
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Style one frame line. Text content matches `Line`'s `Display` except for
/// the blinking caret and a draft too wide for `width`.
fn styled_line<'a>(
    line: &'a Line,
    theme: &Theme,
    caret_visible: bool,
    width: u16,
) -> TextLine<'a> {
    let style = theme.line_style(line);
    match line {
        Line::Selected(text) => TextLine::from(vec![
            Span::styled(SELECTED_MARKER, theme.accent_style()),
            Span::styled(text.as_str(), style),
        ]),
        Line::Normal(text) | Line::Placeholder(text) => TextLine::from(vec![
            Span::raw(INDENT),
            Span::styled(text.as_str(), style),
        ]),
        Line::Draft { text, caret } => {
            let caret_span = if caret_visible {
                Span::styled(CARET, theme.accent_style())
            } else {
                Span::raw(" ")
            };
            let mut spans = vec![
                Span::raw(INDENT),
                Span::styled(DRAFT_PROMPT, theme.accent_style()),
            ];
            if text.is_empty() {
                spans.push(caret_span);
                spans.push(Span::styled(DRAFT_PLACEHOLDER, theme.placeholder_style()));
            } else {
                let room =
                    usize::from(width).saturating_sub(INDENT.len() + DRAFT_PROMPT.len() + 1);
                let (before, after) = caret_window(text, *caret, room);
                spans.push(Span::styled(before, style));
                spans.push(caret_span);
                spans.push(Span::styled(after, style));
            }
            TextLine::from(spans)
        }
        Line::Entry { .. } => TextLine::styled(line.to_string(), style),
        Line::Title(text)
        | Line::Prompt(text)
        | Line::Heading(text)
        | Line::Hint(text)
        | Line::Farewell(text) => TextLine::styled(text.as_str(), style),
        Line::Blank => TextLine::default(),
    }
}

/// Split `text` at the byte offset `caret` and keep at most `room` chars
/// around it, sliding the window right so the caret is never cut off.
fn caret_window(text: &str, caret: usize, room: usize) -> (&str, &str) {
    let (before, after) = text.split_at(caret.min(text.len()));
    let before_chars = before.chars().count();
    let shown = before_chars.min(room);
    let start = before
        .char_indices()
        .nth(before_chars - shown)
        .map_or(before.len(), |(i, _)| i);
    let end = after
        .char_indices()
        .nth(room - shown)
        .map_or(after.len(), |(i, _)| i);
    (&before[start..], &after[..end])
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::{KeyMap, Mode, Session, view};

    fn screen(session: &Session, caret_visible: bool) -> Vec<String> {
        screen_sized(session, caret_visible, 70)
    }

    fn screen_sized(session: &Session, caret_visible: bool, width: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, 24)).unwrap();
        let frame_view = view::build(session, &KeyMap::default_keymap());
        terminal
            .draw(|f| draw(f, &frame_view, &Theme::default(), caret_visible))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn selected_row_is_marked_and_accented() {
        let s = Session {
            cursor: 1,
            ..Session::with_tasks(["A", "B"])
        };
        let rows = screen(&s, true);
        assert_eq!(rows[1], " To-Do");
        assert_eq!(rows[3], "   A");
        assert_eq!(rows[4], " → B");

        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let frame_view = view::build(&s, &KeyMap::default_keymap());
        let theme = Theme::default();
        terminal
            .draw(|f| draw(f, &frame_view, &theme, true))
            .unwrap();
        let cell = &terminal.backend().buffer()[(3, 4)];
        assert_eq!(cell.symbol(), "B");
        assert_eq!(cell.fg, theme.accent);
    }

    #[test]
    fn caret_blinks_without_changing_text() {
        let mut s = Session {
            mode: Mode::Inputting,
            ..Session::new()
        };
        for c in "milk".chars() {
            s.draft.apply(crate::app::Key::char(c), 100);
        }
        let on = screen(&s, true);
        let off = screen(&s, false);
        assert!(on.iter().any(|r| r == "   > milk\u{2588}"));
        assert!(off.iter().any(|r| r == "   > milk"));
    }

    #[test]
    fn long_draft_scrolls_to_keep_caret_visible() {
        use crate::app::{Key, KeyCode};

        let mut s = Session {
            mode: Mode::Inputting,
            ..Session::new()
        };
        for c in 'a'..='z' {
            s.draft.apply(Key::char(c), 100);
        }
        // 20 columns: 18 inside the margin, 4 for "  > ", 1 for the caret.
        let rows = screen_sized(&s, true, 20);
        assert!(
            rows.iter().any(|r| r == "   > nopqrstuvwxyz\u{2588}"),
            "{rows:#?}"
        );

        s.draft.apply(Key::new(KeyCode::Home), 100);
        let rows = screen_sized(&s, true, 20);
        assert!(
            rows.iter().any(|r| r == "   > \u{2588}abcdefghijklm"),
            "{rows:#?}"
        );
    }

    #[test]
    fn caret_window_respects_char_boundaries() {
        // caret sits after the two-byte 'é'
        assert_eq!(caret_window("héllo", 3, 2), ("hé", ""));
        assert_eq!(caret_window("héllo", 3, 1), ("é", ""));
        assert_eq!(caret_window("héllo", 1, 2), ("h", "é"));
        assert_eq!(caret_window("abc", 3, 10), ("abc", ""));
        assert_eq!(caret_window("abc", 0, 0), ("", ""));
        assert_eq!(caret_window("", 0, 5), ("", ""));
    }

    #[test]
    fn plain_text_matches_render_string() {
        let s = Session {
            mode: Mode::Help,
            ..Session::new()
        };
        let rows = screen(&s, true);
        let expected = view::render(&s, &KeyMap::default_keymap());
        for (row, line) in rows.iter().skip(1).zip(expected.lines()) {
            assert_eq!(row.trim_start_matches(' '), line.trim_start_matches(' '));
        }
    }
}
