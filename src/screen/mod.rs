//! Screens, their identity, and how they are presented.

mod any;
mod id;
mod presentation;

pub use any::{AnyScreen, Screen};
pub use id::{IdGenerator, IdStrategy, ScreenId};
pub use presentation::{Detent, DetentStyle, PresentationStyle};
