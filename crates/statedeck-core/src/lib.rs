//! StateDeck Core Library
//!
//! Platform-agnostic logic for the StateDeck indicator gallery: the timed
//! indicator lifecycle, nearest-anchor drag snapping and the host that routes
//! input between them.

pub mod config;
pub mod drag;
pub mod gallery;
pub mod indicator;
pub mod input;
pub mod snap;
pub mod spring;
pub mod timer;

pub use config::{ArenaConfig, ConfigError, ConfigResult, GalleryConfig, TimingConfig};
pub use drag::{DragController, DragSession};
pub use gallery::{Gallery, KeyHints};
pub use indicator::{
    FeedbackEffect, IndicatorMachine, IndicatorPreset, IndicatorState, IndicatorWidget,
    VariantKind, VisualStyle,
};
pub use input::{KeyEvent, PointerEvent};
pub use snap::{Anchor, AnchorKey, AnchorSet, nearest_anchor};
pub use spring::{Spring, SpringParams, SpringPoint};
pub use timer::{Duration, Instant, TimerId, TimerSlot};
