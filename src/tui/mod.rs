mod app;
mod event;
mod theme;
mod ui;

use std::io::{Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::app::{Controller, view};
use crate::config::Config;

pub use app::App;
pub use theme::{Theme, ThemeConfig};

/// Run the editor until the user quits, then print the farewell frame on
/// the restored screen.
pub fn run(config: &Config) -> Result<()> {
    let keymap = config.keymap()?;
    let controller = Controller::new(keymap, config.max_task_len);
    let mut app = App::new(
        controller,
        config.theme.build(),
        Duration::from_millis(config.tick_rate_ms),
    );

    tracing::info!("starting editor");
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;

    let farewell = view::render(app.session(), app.controller().keymap());
    let mut out = stdout();
    out.write_all(farewell.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write to stdout")?;
    Ok(())
}
