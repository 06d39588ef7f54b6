#![forbid(unsafe_code)]

//! Accent tokens and the color theme.
//!
//! Widgets never hard-code colors: a region carries an [`Accent`] token and
//! the [`Theme`] resolves it. The theme also owns the two fill opacity levels
//! the diagram switches between.

use academy_render::cell::PackedRgba;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic accent color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Accent {
    Sky,
    Emerald,
    Violet,
    Teal,
    Fuchsia,
    Amber,
    Indigo,
}

impl Accent {
    pub const ALL: [Accent; 7] = [
        Accent::Sky,
        Accent::Emerald,
        Accent::Violet,
        Accent::Teal,
        Accent::Fuchsia,
        Accent::Amber,
        Accent::Indigo,
    ];
}

/// Fill opacity of an emphasized circle.
pub const DEFAULT_EMPHASIZED_OPACITY: f32 = 0.55;
/// Fill opacity of a dim circle.
pub const DEFAULT_DIM_OPACITY: f32 = 0.18;

/// Color slots and opacity levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Diagram and panel background.
    pub background: PackedRgba,
    /// Primary text.
    pub text: PackedRgba,
    /// Secondary text (placeholder, hints, status line).
    pub muted: PackedRgba,
    /// Borders and separators.
    pub border: PackedRgba,
    pub emphasized_opacity: f32,
    pub dim_opacity: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: PackedRgba::rgb(17, 24, 39),
            text: PackedRgba::rgb(243, 244, 246),
            muted: PackedRgba::rgb(156, 163, 175),
            border: PackedRgba::rgb(75, 85, 99),
            emphasized_opacity: DEFAULT_EMPHASIZED_OPACITY,
            dim_opacity: DEFAULT_DIM_OPACITY,
        }
    }
}

impl Theme {
    /// Same palette with different opacity levels.
    #[must_use]
    pub fn with_opacities(mut self, emphasized: f32, dim: f32) -> Self {
        self.emphasized_opacity = emphasized;
        self.dim_opacity = dim;
        self
    }

    /// Opaque color for an accent token.
    pub const fn accent(&self, accent: Accent) -> PackedRgba {
        match accent {
            Accent::Sky => PackedRgba::rgb(56, 189, 248),
            Accent::Emerald => PackedRgba::rgb(52, 211, 153),
            Accent::Violet => PackedRgba::rgb(167, 139, 250),
            Accent::Teal => PackedRgba::rgb(45, 212, 191),
            Accent::Fuchsia => PackedRgba::rgb(232, 121, 249),
            Accent::Amber => PackedRgba::rgb(251, 191, 36),
            Accent::Indigo => PackedRgba::rgb(129, 140, 248),
        }
    }

    /// Fill opacity for an emphasized (`true`) or dim (`false`) shape.
    pub const fn opacity(&self, emphasized: bool) -> f32 {
        if emphasized {
            self.emphasized_opacity
        } else {
            self.dim_opacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_are_distinct_and_opaque() {
        let theme = Theme::default();
        let colors: Vec<PackedRgba> = Accent::ALL.iter().map(|a| theme.accent(*a)).collect();
        for (i, a) in colors.iter().enumerate() {
            assert_eq!(a.a(), 255);
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_opacities_are_ordered() {
        let theme = Theme::default();
        assert!(theme.opacity(false) < theme.opacity(true));
        assert_eq!(theme.opacity(true), DEFAULT_EMPHASIZED_OPACITY);
    }

    #[test]
    fn with_opacities_keeps_palette() {
        let theme = Theme::default().with_opacities(0.9, 0.1);
        assert_eq!(theme.emphasized_opacity, 0.9);
        assert_eq!(theme.dim_opacity, 0.1);
        assert_eq!(theme.background, Theme::default().background);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn accent_serializes_kebab_case() {
        let json = serde_json::to_string(&Accent::Fuchsia).expect("serialize");
        assert_eq!(json, "\"fuchsia\"");
        let back: Accent = serde_json::from_str("\"indigo\"").expect("deserialize");
        assert_eq!(back, Accent::Indigo);
    }
}
