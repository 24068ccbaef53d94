use super::key::{Key, KeyCode};

/// Upper bound on draft length, in characters.
pub const DEFAULT_MAX_LEN: usize = 100;

/// Single-line text buffer edited while adding a task.
///
/// `caret` is a byte offset into `text` and always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    caret: usize,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take the text out, leaving an empty draft behind.
    pub fn take(&mut self) -> String {
        self.caret = 0;
        std::mem::take(&mut self.text)
    }

    /// Apply one editing key. Returns `true` if the key was consumed.
    ///
    /// Inserts stop at `max_len` characters; control characters are never
    /// inserted so a draft can't contain a line break.
    pub fn apply(&mut self, key: Key, max_len: usize) -> bool {
        let buf = &mut self.text;
        let cursor = &mut self.caret;

        match (key.code, key.ctrl, key.alt) {
            // --- Caret movement ---
            (KeyCode::Left, false, true) | (KeyCode::Char('b'), false, true) => {
                *cursor = word_boundary_left(buf, *cursor);
            }
            (KeyCode::Right, false, true) | (KeyCode::Char('f'), false, true) => {
                *cursor = word_boundary_right(buf, *cursor);
            }
            (KeyCode::Left, false, false) | (KeyCode::Char('b'), true, false) => {
                *cursor = prev_boundary(buf, *cursor);
            }
            (KeyCode::Right, false, false) | (KeyCode::Char('f'), true, false) => {
                *cursor = next_boundary(buf, *cursor);
            }
            (KeyCode::Home, ..) | (KeyCode::Char('a'), true, false) => *cursor = 0,
            (KeyCode::End, ..) | (KeyCode::Char('e'), true, false) => *cursor = buf.len(),

            // --- Deletion ---
            (KeyCode::Backspace, false, true) | (KeyCode::Char('w'), true, false) => {
                let new_pos = word_boundary_left(buf, *cursor);
                buf.drain(new_pos..*cursor);
                *cursor = new_pos;
            }
            (KeyCode::Char('u'), true, false) => {
                buf.drain(..*cursor);
                *cursor = 0;
            }
            (KeyCode::Char('k'), true, false) => buf.truncate(*cursor),
            (KeyCode::Backspace, ..) | (KeyCode::Char('h'), true, false) => {
                let new_pos = prev_boundary(buf, *cursor);
                buf.drain(new_pos..*cursor);
                *cursor = new_pos;
            }
            (KeyCode::Delete, ..) | (KeyCode::Char('d'), true, false) => {
                let end = next_boundary(buf, *cursor);
                buf.drain(*cursor..end);
            }

            // --- Character insertion ---
            (KeyCode::Char(c), false, false) if !c.is_control() => {
                if buf.chars().count() >= max_len {
                    return false;
                }
                buf.insert(*cursor, c);
                *cursor += c.len_utf8();
            }
            _ => return false,
        }
        true
    }
}

fn prev_boundary(s: &str, pos: usize) -> usize {
    s[..pos].chars().next_back().map_or(pos, |ch| pos - ch.len_utf8())
}

fn next_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |ch| pos + ch.len_utf8())
}

/// Byte offset of the previous word start (for word-left navigation).
pub fn word_boundary_left(s: &str, pos: usize) -> usize {
    let trimmed = s[..pos].trim_end();
    match trimmed.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, ch)) => idx + ch.len_utf8(),
        None => 0,
    }
}

/// Byte offset of the next word start (for word-right navigation).
pub fn word_boundary_right(s: &str, pos: usize) -> usize {
    let after = &s[pos..];
    let Some(ws) = after.find(char::is_whitespace) else {
        return s.len();
    };
    match after[ws..].find(|c: char| !c.is_whitespace()) {
        None => s.len(),
        Some(word_start) => pos + ws + word_start,
    }
}

/// Format a buffer with a visible block caret at byte offset `caret`.
pub fn format_with_caret(buf: &str, caret: usize) -> String {
    let (before, after) = buf.split_at(caret.min(buf.len()));
    format!("{before}\u{2588}{after}")
}

// ── Tests ─────────────────────────────────────────────────────────────
