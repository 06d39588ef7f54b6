#![forbid(unsafe_code)]

//! Style types shared by the widgets and the demo application.
//!
//! # This crate provides
//! - [`Style`] with patch (cascade) semantics.
//! - [`InteractiveStyle`] for hover / pinned variants.
//! - [`Theme`] mapping semantic [`Accent`] tokens to colors, plus the two
//!   circle opacity levels used by the diagram.

/// Interactive style variants for stateful widgets.
pub mod interactive;
/// Style values with optional properties.
pub mod style;
/// Accent tokens and the color theme.
pub mod theme;

pub use interactive::{InteractionState, InteractiveStyle};
pub use style::Style;
pub use theme::{Accent, DEFAULT_DIM_OPACITY, DEFAULT_EMPHASIZED_OPACITY, Theme};
