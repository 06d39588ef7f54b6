#![forbid(unsafe_code)]

use academy_render::cell::{PackedRgba, StyleFlags};

/// A set of optional style properties.
///
/// Unset properties inherit from whatever is underneath when applied to a
/// cell, and from the base style when [`patch`](Style::patch)ed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags to any already set.
    #[must_use]
    pub fn add_attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attrs(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.add_attrs(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attrs(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_attrs(StyleFlags::REVERSE)
    }

    /// True when no property is set.
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay `other` on `self`: every property `other` sets wins.
    ///
    /// Attribute flags are unioned rather than replaced.
    #[must_use]
    pub fn patch(self, other: &Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: match (self.attrs, other.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => b.or(a),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RED: PackedRgba = PackedRgba::rgb(255, 0, 0);
    const BLUE: PackedRgba = PackedRgba::rgb(0, 0, 255);

    #[test]
    fn new_is_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().bold().is_empty());
    }

    #[test]
    fn patch_prefers_overlay() {
        let base = Style::new().fg(RED).bg(BLUE);
        let patched = base.patch(&Style::new().fg(BLUE));
        assert_eq!(patched.fg, Some(BLUE));
        assert_eq!(patched.bg, Some(BLUE));
    }

    #[test]
    fn patch_unions_attrs() {
        let patched = Style::new().bold().patch(&Style::new().underline());
        assert_eq!(
            patched.attrs,
            Some(StyleFlags::BOLD | StyleFlags::UNDERLINE)
        );
    }

    fn color() -> impl Strategy<Value = Option<PackedRgba>> {
        proptest::option::of(any::<u32>().prop_map(PackedRgba))
    }

    proptest! {
        #[test]
        fn patch_with_empty_is_identity(fg in color(), bg in color()) {
            let style = Style { fg, bg, attrs: None };
            prop_assert_eq!(style.patch(&Style::new()), style);
            prop_assert_eq!(Style::new().patch(&style), style);
        }
    }
}
