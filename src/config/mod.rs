use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::app::{Action, DEFAULT_MAX_LEN, KeyMap};
use crate::tui::ThemeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Event poll interval and caret blink period, in milliseconds. Default: 500
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Longest task the input line accepts, in characters. Default: 100
    #[serde(default = "default_max_task_len")]
    pub max_task_len: usize,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub keys: KeysConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_rate_ms: default_tick_rate_ms(),
            max_task_len: default_max_task_len(),
            theme: ThemeConfig::default(),
            keys: KeysConfig::default(),
        }
    }
}

/// Browsing-mode key overrides. A present entry replaces every default key
/// for that action; an empty list unbinds it.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct KeysConfig {
    pub quit: Option<Vec<String>>,
    pub up: Option<Vec<String>>,
    pub down: Option<Vec<String>>,
    pub add: Option<Vec<String>>,
    pub help: Option<Vec<String>>,
    pub delete: Option<Vec<String>>,
}

impl KeysConfig {
    fn get(&self, action: Action) -> Option<&Vec<String>> {
        match action {
            Action::Quit => self.quit.as_ref(),
            Action::MoveUp => self.up.as_ref(),
            Action::MoveDown => self.down.as_ref(),
            Action::AddTask => self.add.as_ref(),
            Action::ShowHelp => self.help.as_ref(),
            Action::DeleteTask => self.delete.as_ref(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    500
}

fn default_max_task_len() -> usize {
    DEFAULT_MAX_LEN
}

impl Config {
    /// Default key map with the `[keys]` overrides applied.
    pub fn keymap(&self) -> Result<KeyMap> {
        let mut keymap = KeyMap::default_keymap();
        for action in Action::ALL {
            if let Some(names) = self.keys.get(action) {
                keymap.rebind(action, names)?;
            }
        }
        Ok(keymap)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            bail!("tick_rate_ms must be greater than 0");
        }
        if self.max_task_len == 0 {
            bail!("max_task_len must be greater than 0");
        }
        self.keymap().map(|_| ())
    }
}

/// Returns the base tudu directory: ~/.tudu/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".tudu"))
}

/// Returns the default config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

/// Returns the path to the log file
pub fn log_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("tudu.log"))
}

/// Ensure the base directory exists
pub fn ensure_dirs() -> Result<()> {
    let base = base_dir()?;
    fs::create_dir_all(&base).context("failed to create ~/.tudu/")?;
    Ok(())
}

/// Load config from `path`, falling back to defaults when the file is absent.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Commented starter config written by `tudu init`.
pub const DEFAULT_CONFIG: &str = r##"# tudu configuration

# Event poll interval and caret blink period (ms)
tick_rate_ms = 500

# Longest task the input line accepts (characters)
max_task_len = 100

# Colours: names ("cyan", "dark gray"), "#rrggbb", "rgb(R,G,B)" or palette indices ("212")
[theme]
# title = "99"
# accent = "212"
# text = "245"
# heading = "205"
# hint = "241"
# placeholder = "240"

# Browsing keys. Each entry replaces the defaults for that action.
[keys]
# quit = ["q", "esc", "ctrl+c"]
# up = ["up", "k"]
# down = ["down", "j"]
# add = ["n", "a"]
# help = ["?", "h"]
# delete = ["x", "d", "backspace"]
"##;

/// Write [`DEFAULT_CONFIG`] to `path` unless a file is already there.
/// Returns `true` if a file was written.
pub fn write_default(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
