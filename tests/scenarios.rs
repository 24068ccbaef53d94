//! End-to-end key sequences against the public editor API.

use pretty_assertions::assert_eq;
use tudu::app::{Controller, Effect, Key, KeyMap, Mode, Session, render, view};

fn press(ctl: &Controller, session: Session, names: &[&str]) -> (Session, Vec<Effect>) {
    let mut effects = Vec::new();
    let session = names.iter().fold(session, |s, name| {
        let (next, effect) = ctl.step(s, Key::parse(name).unwrap());
        effects.extend(effect);
        next
    });
    (session, effects)
}

fn type_text(ctl: &Controller, session: Session, text: &str) -> Session {
    text.chars()
        .fold(session, |s, c| ctl.step(s, Key::char(c)).0)
}

#[test]
fn add_first_task() {
    let ctl = Controller::default();
    let (s, effects) = press(&ctl, Session::new(), &["n"]);
    assert_eq!(effects, [Effect::FocusInput]);
    let s = type_text(&ctl, s, "Buy milk");
    let (s, effects) = press(&ctl, s, &["enter"]);

    assert!(effects.is_empty());
    assert_eq!(s.tasks, ["Buy milk"]);
    assert_eq!(s.cursor, 0);
    assert_eq!(s.mode, Mode::Browsing);
    assert_eq!(
        render(&s, &KeyMap::default_keymap()),
        "To-Do\n\n→ Buy milk\n\n↑/↓: navigate • n: add • x: delete • ?: help • q: quit\n"
    );
}

#[test]
fn delete_from_the_middle() {
    let ctl = Controller::default();
    let start = Session {
        cursor: 1,
        ..Session::with_tasks(["A", "B", "C"])
    };
    let (s, _) = press(&ctl, start, &["x"]);
    assert_eq!(s.tasks, ["A", "C"]);
    assert_eq!(s.cursor, 1);
    assert_eq!(s.selected(), Some("C"));
}

#[test]
fn delete_the_only_task() {
    let ctl = Controller::default();
    let (s, _) = press(&ctl, Session::with_tasks(["A"]), &["x"]);
    assert!(s.tasks.is_empty());
    assert_eq!(s.cursor, 0);
}

#[test]
fn quit_renders_farewell_from_any_mode() {
    let ctl = Controller::default();
    let keymap = KeyMap::default_keymap();

    // browsing: q quits directly
    let (s, effects) = press(&ctl, Session::with_tasks(["A"]), &["q"]);
    assert_eq!(effects, [Effect::Quit]);
    assert_eq!(render(&s, &keymap), format!("{}\n", view::FAREWELL));

    // help: q returns to the list, a second q quits
    let (s, effects) = press(&ctl, Session::new(), &["?", "q", "q"]);
    assert_eq!(effects, [Effect::Quit]);
    assert_eq!(render(&s, &keymap), "Goodbye!\n");

    // inputting: esc leaves the input line, then q quits
    let (s, effects) = press(&ctl, Session::new(), &["n", "q", "esc", "q"]);
    assert_eq!(effects, [Effect::FocusInput, Effect::Quit]);
    assert!(s.tasks.is_empty());
    assert_eq!(render(&s, &keymap), "Goodbye!\n");
}

#[test]
fn help_ignores_everything_but_return_keys() {
    let ctl = Controller::default();
    let (s, effects) = press(
        &ctl,
        Session::with_tasks(["A"]),
        &["h", "x", "n", "j", "k", "a", "space", "backspace", "ctrl+c"],
    );
    assert!(effects.is_empty());
    assert_eq!(s.mode, Mode::Help);
    assert_eq!(s.tasks, ["A"]);
}

#[test]
fn help_keys_are_typed_into_the_draft() {
    let ctl = Controller::default();
    let (s, _) = press(&ctl, Session::new(), &["a", "?", "h", "enter"]);
    assert_eq!(s.tasks, ["?h"]);
    assert_eq!(s.mode, Mode::Browsing);
}

#[test]
fn esc_while_inputting_keeps_tasks() {
    let ctl = Controller::default();
    let start = Session {
        cursor: 1,
        ..Session::with_tasks(["A", "B"])
    };
    let s = press(&ctl, start.clone(), &["n"]).0;
    let s = type_text(&ctl, s, "never saved");
    let (s, _) = press(&ctl, s, &["esc"]);
    assert_eq!(s, start);
}

#[test]
fn editing_inside_the_draft() {
    let ctl = Controller::default();
    let s = press(&ctl, Session::new(), &["n"]).0;
    let s = type_text(&ctl, s, "Buy mlk");
    let (s, _) = press(&ctl, s, &["left", "left"]);
    let s = type_text(&ctl, s, "i");
    let (s, _) = press(&ctl, s, &["end", "backspace", "backspace", "enter"]);
    assert_eq!(s.tasks, ["Buy mi"]);
}

#[test]
fn inputting_frame_keeps_frozen_selection() {
    let ctl = Controller::default();
    let start = Session::with_tasks(["A", "B"]);
    let (s, _) = press(&ctl, start, &["j", "n"]);
    let s = type_text(&ctl, s, "C");
    assert_eq!(
        render(&s, ctl.keymap()),
        "To-Do\n\n  A\n→ B\n\nNew Task:\n  > C\u{2588}\n\nenter: save • esc: cancel\n"
    );
}

#[test]
fn duplicates_are_allowed() {
    let ctl = Controller::default();
    let mut s = Session::new();
    for _ in 0..2 {
        s = press(&ctl, s, &["n"]).0;
        s = type_text(&ctl, s, "same");
        s = press(&ctl, s, &["enter"]).0;
    }
    assert_eq!(s.tasks, ["same", "same"]);
    assert_eq!(s.cursor, 1);
}
