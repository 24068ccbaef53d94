//! A minimal keyboard-driven to-do list for the terminal.
//!
//! [`app`] holds the editor core (session state, the browsing / inputting /
//! help state machine, and the frame projection) and never touches the
//! terminal. [`tui`] is the crossterm/ratatui host that drives it.

pub mod app;
pub mod config;
pub mod logging;
pub mod tui;
