#![forbid(unsafe_code)]

//! Cell types: the unit of the render buffer.
//!
//! A [`Cell`] holds one character plus foreground/background colors and style
//! flags. Colors are [`PackedRgba`] values so widgets can composite
//! translucent fills (the Venn circles) over whatever is already drawn.

use bitflags::bitflags;

/// RGBA color packed into a `u32` as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent. The terminal's own color shows through.
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same color with alpha scaled by `opacity` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = (f32::from(self.a()) * opacity).round() as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Porter-Duff source-over: `self` composited on top of `dst`.
    #[must_use]
    pub fn over(self, dst: Self) -> Self {
        let sa = f32::from(self.a()) / 255.0;
        if sa >= 1.0 {
            return self;
        }
        if sa <= 0.0 {
            return dst;
        }
        let da = f32::from(dst.a()) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }
        let channel = |s: u8, d: u8| -> u8 {
            let s = f32::from(s) * sa;
            let d = f32::from(d) * da * (1.0 - sa);
            ((s + d) / out_a).round().clamp(0.0, 255.0) as u8
        };
        Self::rgba(
            channel(self.r(), dst.r()),
            channel(self.g(), dst.g()),
            channel(self.b(), dst.b()),
            (out_a * 255.0).round() as u8,
        )
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// Cell content: a single Unicode scalar, or empty.
///
/// Stored as a raw `u32` so cells stay `Copy` and cheap to compare in diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellContent(u32);

impl CellContent {
    /// No content. Presented as a space.
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The stored character, or `None` when empty.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// Display width in columns. Empty cells count as one column.
    pub fn width(self) -> usize {
        self.as_char().map_or(1, |ch| crate::char_width(ch).max(1))
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub content: CellContent,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub attrs: StyleFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: CellContent::EMPTY,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            attrs: StyleFlags::empty(),
        }
    }
}

impl Cell {
    #[inline]
    pub fn from_char(ch: char) -> Self {
        Self {
            content: CellContent::from_char(ch),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_char(mut self, ch: char) -> Self {
        self.content = CellContent::from_char(ch);
        self
    }

    #[must_use]
    pub fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    #[must_use]
    pub fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// True when the cell has no character content (colors are ignored).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_components_roundtrip() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
        assert_eq!(PackedRgba::WHITE.a(), 255);
        assert_eq!(PackedRgba::TRANSPARENT.a(), 0);
    }

    #[test]
    fn opacity_scales_alpha_only() {
        let c = PackedRgba::rgb(200, 100, 50).with_opacity(0.5);
        assert_eq!((c.r(), c.g(), c.b()), (200, 100, 50));
        assert_eq!(c.a(), 128);
        assert_eq!(PackedRgba::WHITE.with_opacity(2.0).a(), 255);
        assert_eq!(PackedRgba::WHITE.with_opacity(-1.0).a(), 0);
    }

    #[test]
    fn over_opaque_source_wins() {
        let red = PackedRgba::rgb(255, 0, 0);
        assert_eq!(red.over(PackedRgba::BLACK), red);
    }

    #[test]
    fn over_transparent_source_keeps_destination() {
        let blue = PackedRgba::rgb(0, 0, 255);
        assert_eq!(PackedRgba::TRANSPARENT.over(blue), blue);
    }

    #[test]
    fn over_half_alpha_on_opaque_blends() {
        let src = PackedRgba::rgba(255, 255, 255, 128);
        let out = src.over(PackedRgba::BLACK);
        assert_eq!(out.a(), 255);
        assert!((126..=130).contains(&out.r()), "r = {}", out.r());
    }

    #[test]
    fn over_onto_transparent_keeps_source_color() {
        let src = PackedRgba::rgba(10, 20, 30, 64);
        let out = src.over(PackedRgba::TRANSPARENT);
        assert_eq!((out.r(), out.g(), out.b(), out.a()), (10, 20, 30, 64));
    }

    #[test]
    fn content_empty_and_char() {
        assert!(CellContent::EMPTY.is_empty());
        assert_eq!(CellContent::EMPTY.as_char(), None);
        assert_eq!(CellContent::from_char('x').as_char(), Some('x'));
        assert_eq!(CellContent::EMPTY.width(), 1);
    }

    #[test]
    fn cell_builders() {
        let cell = Cell::from_char('A')
            .with_fg(PackedRgba::BLACK)
            .with_bg(PackedRgba::WHITE)
            .with_attrs(StyleFlags::BOLD);
        assert_eq!(cell.content.as_char(), Some('A'));
        assert_eq!(cell.fg, PackedRgba::BLACK);
        assert_eq!(cell.bg, PackedRgba::WHITE);
        assert!(cell.attrs.contains(StyleFlags::BOLD));
        assert!(!cell.is_empty());
        assert!(Cell::default().is_empty());
    }
}
