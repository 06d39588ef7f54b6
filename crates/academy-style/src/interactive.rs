//! Interactive style variants.
//!
//! A selectable element is drawn in one of three states: untouched, under the
//! pointer, or pinned by a click. [`InteractiveStyle`] keeps one optional
//! overlay per state and resolves it on top of the normal style with
//! [`Style::patch`].
//!
//! ```
//! use academy_style::{InteractionState, InteractiveStyle, Style};
//! use academy_render::cell::PackedRgba;
//!
//! let label = InteractiveStyle::new(Style::new().fg(PackedRgba::WHITE))
//!     .hover(Style::new().bold())
//!     .active(Style::new().bold().underline());
//!
//! let pinned = label.resolve(InteractionState::Active);
//! assert_eq!(pinned.fg, Some(PackedRgba::WHITE));
//! ```

#![forbid(unsafe_code)]

use crate::style::Style;

/// Interaction state of a selectable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Normal,
    /// Pointer is over the element.
    Hovered,
    /// Element is pinned (clicked).
    Active,
}

/// Style overlays per [`InteractionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractiveStyle {
    pub normal: Style,
    pub hover: Option<Style>,
    pub active: Option<Style>,
}

impl InteractiveStyle {
    pub fn new(normal: Style) -> Self {
        Self {
            normal,
            hover: None,
            active: None,
        }
    }

    #[must_use]
    pub fn hover(mut self, style: Style) -> Self {
        self.hover = Some(style);
        self
    }

    #[must_use]
    pub fn active(mut self, style: Style) -> Self {
        self.active = Some(style);
        self
    }

    /// Resolve the style for `state`. A state without an overlay falls back
    /// to `normal`.
    pub fn resolve(&self, state: InteractionState) -> Style {
        let overlay = match state {
            InteractionState::Normal => None,
            InteractionState::Hovered => self.hover.as_ref(),
            InteractionState::Active => self.active.as_ref(),
        };
        match overlay {
            Some(o) => self.normal.patch(o),
            None => self.normal,
        }
    }
}

impl From<Style> for InteractiveStyle {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}
