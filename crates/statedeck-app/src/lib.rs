//! StateDeck Application
//!
//! The native shell hosting the indicator gallery: frame loop, input
//! translation and layout.

mod app;
mod events;
mod shortcuts;

pub use app::{AppConfig, CONFIG_ENV, GalleryApp};
pub use events::{key_event, pointer_event};
pub use shortcuts::{Shortcut, ShortcutRegistry};
