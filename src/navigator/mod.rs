//! Navigation commands and the state they mutate.

mod error;
mod intent;
mod queue;
mod state;

pub use error::NavigationError;
pub use intent::NavigationIntent;
pub use queue::MainQueue;
pub use state::{NavigationCommand, NavigationLogEntry, Navigator};
