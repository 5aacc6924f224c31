//! Indicator widgets: the four-state lifecycle shared by every gallery entry.
//!
//! - [`IndicatorState`]: the lifecycle states and their cycle order
//! - [`IndicatorMachine`]: key and timer driven transitions
//! - [`VariantKind`]: the gallery entries and their presentation presets
//! - [`IndicatorWidget`]: a mounted machine plus renderer feedback

mod machine;
mod state;
mod variant;
mod widget;

pub use machine::IndicatorMachine;
pub use state::IndicatorState;
pub use variant::{
    ActiveWidth, DRAGGABLE_TOOLTIP, FEEDBACK_LABEL, FeedbackEffect, IndicatorPreset, Labels,
    PillGeometry, VariantKind, VisualStyle,
};
pub use widget::IndicatorWidget;
