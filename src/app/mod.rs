//! The editor core: session state, the key-driven state machine over it, and
//! the frame projection. No terminal I/O happens here.

mod controller;
mod draft;
mod key;
mod keymap;
mod session;
pub mod view;

pub use controller::{Controller, Effect};
pub use draft::{DEFAULT_MAX_LEN, Draft};
pub use key::{Key, KeyCode};
pub use keymap::{Action, HelpEntry, KeyMap};
pub use session::{Mode, Session};
pub use view::{Line, View, render};
