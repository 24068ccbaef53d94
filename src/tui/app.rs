use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::DefaultTerminal;

use crate::app::{Controller, Effect, Key, Mode, Session, view};

use super::event::{self, AppEvent};
use super::theme::Theme;
use super::ui;

/// Host-side caret blink. Lives outside the session: toggling it never
/// produces a new state, only a different frame.
#[derive(Debug, Clone)]
pub struct Blink {
    period: Duration,
    active: bool,
    visible: bool,
    last: Instant,
}

impl Blink {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            active: false,
            visible: true,
            last: Instant::now(),
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.active = true;
        self.reset(now);
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.visible = true;
    }

    /// Typing keeps the caret solid for a full period.
    pub fn reset(&mut self, now: Instant) {
        self.visible = true;
        self.last = now;
    }

    pub fn tick(&mut self, now: Instant) {
        if self.active && now.duration_since(self.last) >= self.period {
            self.visible = !self.visible;
            self.last = now;
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

pub struct App {
    controller: Controller,
    theme: Theme,
    tick_rate: Duration,
    blink: Blink,
    session: Session,
}

impl App {
    pub fn new(controller: Controller, theme: Theme, tick_rate: Duration) -> Self {
        Self {
            controller,
            theme,
            tick_rate,
            blink: Blink::new(tick_rate),
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Feed one key through the controller. Returns `true` once the loop
    /// should stop.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let (next, effect) = self
            .controller
            .step(std::mem::take(&mut self.session), key);
        self.session = next;

        match effect {
            Some(Effect::Quit) => return true,
            Some(Effect::FocusInput) => self.blink.start(Instant::now()),
            None if self.session.mode == Mode::Inputting => self.blink.reset(Instant::now()),
            None => self.blink.stop(),
        }
        false
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            let frame_view = view::build(&self.session, self.controller.keymap());
            terminal.draw(|frame| ui::draw(frame, &frame_view, &self.theme, self.blink.visible()))?;

            match event::poll(self.tick_rate)? {
                AppEvent::Key(key) => {
                    tracing::trace!(key = %key, mode = self.session.mode.as_str(), "key");
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                AppEvent::Tick => self.blink.tick(Instant::now()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            Controller::default(),
            Theme::default(),
            Duration::from_millis(500),
        )
    }

    fn press(app: &mut App, name: &str) -> bool {
        app.handle_key(Key::parse(name).unwrap())
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app();
        assert!(!press(&mut app, "j"));
        assert!(press(&mut app, "q"));
        assert!(app.session().quitting);
    }

    #[test]
    fn add_task_through_host() {
        let mut app = app();
        for name in ["n", "B", "u", "y", "enter"] {
            assert!(!press(&mut app, name));
        }
        assert_eq!(app.session().tasks, ["Buy"]);
        assert_eq!(app.session().mode, Mode::Browsing);
    }

    #[test]
    fn focus_input_starts_blinking() {
        let mut app = app();
        press(&mut app, "n");
        assert!(app.blink.active);
        press(&mut app, "esc");
        assert!(!app.blink.active);
        assert!(app.blink.visible());
    }

    #[test]
    fn blink_toggles_only_after_period() {
        let start = Instant::now();
        let mut blink = Blink::new(Duration::from_millis(500));
        blink.start(start);
        blink.tick(start + Duration::from_millis(100));
        assert!(blink.visible());
        blink.tick(start + Duration::from_millis(500));
        assert!(!blink.visible());
        blink.tick(start + Duration::from_millis(1000));
        assert!(blink.visible());
    }

    #[test]
    fn inactive_blink_never_hides_caret() {
        let start = Instant::now();
        let mut blink = Blink::new(Duration::from_millis(10));
        blink.tick(start + Duration::from_secs(1));
        assert!(blink.visible());
    }

    #[test]
    fn typing_resets_blink_phase() {
        let start = Instant::now();
        let mut blink = Blink::new(Duration::from_millis(500));
        blink.start(start);
        blink.tick(start + Duration::from_millis(600));
        assert!(!blink.visible());
        blink.reset(start + Duration::from_millis(700));
        assert!(blink.visible());
        blink.tick(start + Duration::from_millis(900));
        assert!(blink.visible());
    }
}
