#![forbid(unsafe_code)]

//! Outcome of routing a mouse event to a widget.

/// What a widget's `handle_mouse` did with an event.
///
/// Indices follow the hit-data convention of the widget (for the diagram,
/// the region index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseResult {
    /// The event did not concern this widget.
    #[default]
    Ignored,
    /// The hovered target changed; nothing was pinned or unpinned.
    HoverChanged,
    /// The target at this index was pinned.
    Selected(usize),
    /// The pinned target at this index was released.
    Deselected(usize),
}

impl MouseResult {
    /// True for anything except [`MouseResult::Ignored`].
    pub const fn is_handled(self) -> bool {
        !matches!(self, MouseResult::Ignored)
    }
}
