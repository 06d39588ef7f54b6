#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, hit grids, diffs, and ANSI presentation.
//!
//! # Role in the workspace
//! `academy-render` is the deterministic rendering engine. Widgets draw into a
//! [`frame::Frame`]; its [`buffer::Buffer`] is diffed against the previous
//! frame and emitted as ANSI by the [`presenter::Presenter`].
//!
//! # Primary responsibilities
//! - **Cell/Buffer**: 2D grid of fixed-size cells with RGBA colors.
//! - **HitGrid**: maps screen cells to interactive targets for mouse input.
//! - **BufferDiff**: change detection between frames.
//! - **Presenter**: stateful ANSI emitter with cursor and style tracking.

pub mod buffer;
pub mod cell;
pub mod diff;
pub mod frame;
pub mod presenter;

/// Display width of a string in terminal columns.
#[inline]
pub fn display_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(text)
}

/// Display width of a single character in terminal columns.
#[inline]
pub fn char_width(ch: char) -> usize {
    unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0)
}
