#![forbid(unsafe_code)]

//! Widgets for the discipline-overlap explorer.
//!
//! - [`region`]: the closed set of diagram regions and their static catalog.
//! - [`selection`]: hover/pin state machine and the derived active region.
//! - [`hover`]: turns raw mouse motion into pointer enter/leave/click signals.
//! - [`venn`]: the three-circle diagram (pure layout + rasterizing widget).
//! - [`detail_panel`]: descriptor view for the active region.
//! - [`block`]: bordered container used by both panes.

pub mod block;
pub mod detail_panel;
pub mod hover;
pub mod mouse;
pub mod region;
pub mod selection;
pub mod venn;

use academy_core::geometry::Rect;
use academy_render::cell::Cell;
use academy_render::frame::Frame;
use academy_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets draw into the frame's buffer within `area` and may register hit
/// targets in its hit grid.
pub trait Widget {
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` renders based on external state.
pub trait StatefulWidget {
    type State;
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Apply the set properties of `style` to `cell`.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = attrs;
    }
}

/// Apply `style` to every cell in `area`, keeping content.
pub(crate) fn set_style_area(frame: &mut Frame, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    let Some(clipped) = area.intersection_opt(&frame.bounds()) else {
        return;
    };
    for y in clipped.y..clipped.bottom() {
        for x in clipped.x..clipped.right() {
            if let Some(cell) = frame.buffer.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw `text` starting at `(x, y)`, stopping before `max_x`.
///
/// Cell backgrounds already in the buffer are kept unless `style` sets one.
/// Returns the column after the last drawn character.
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for ch in text.chars() {
        let width = academy_render::char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > max_x {
            break;
        }
        if let Some(cell) = frame.buffer.get_mut(x, y) {
            *cell = cell.with_char(ch);
            apply_style(cell, style);
        }
        x += width;
    }
    x
}
