use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tudu::app::{KeyMap, Mode, Session, view};
use tudu::{config, logging, tui};

#[derive(Parser)]
#[command(
    name = "tudu",
    version = env!("TUDU_VERSION"),
    about = "A minimal keyboard-driven to-do list"
)]
struct Cli {
    /// Config file to use instead of ~/.tudu/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the list editor (default)
    Run,
    /// Create ~/.tudu/ and write a starter config.toml
    Init,
    /// Print the key reference
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Init => {
            config::ensure_dirs()?;
            if config::write_default(&config_path)? {
                println!("Wrote {}", config_path.display());
            } else {
                println!("{} already exists", config_path.display());
            }
            Ok(())
        }
        Commands::Keys => {
            config::ensure_dirs()?;
            logging::init(&config::log_path()?)?;
            let cfg = config::load_from(&config_path)?;
            print_keys(&cfg.keymap()?);
            Ok(())
        }
        Commands::Run => {
            config::ensure_dirs()?;
            logging::init(&config::log_path()?)?;
            let cfg = config::load_from(&config_path)?;
            tui::run(&cfg)
        }
    }
}

fn print_keys(keymap: &KeyMap) {
    let help = Session {
        mode: Mode::Help,
        ..Session::new()
    };
    // Drop the trailing "press any key" hint, it means nothing outside the editor.
    let text = view::render(&help, keymap);
    let body = text
        .trim_end()
        .strip_suffix(view::HELP_HINT)
        .unwrap_or(&text)
        .trim_end();
    println!("{body}");
}
