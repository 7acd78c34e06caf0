//! Scripted navigation sessions, used by the `navtree replay` command.

mod runner;
mod script;

pub use runner::{Replay, ReplayError, DEEPLINK_SCHEME};
pub use script::{to_path, ElementSpec, NamedScreen, Script, ScreenSpec, Step, StyleSpec, Target};
