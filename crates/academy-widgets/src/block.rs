#![forbid(unsafe_code)]

//! Bordered container with an optional title.

use academy_core::geometry::Rect;
use academy_render::cell::Cell;
use academy_render::frame::Frame;
use academy_style::Style;
use bitflags::bitflags;

use crate::{Widget, apply_style, draw_text_span};

bitflags! {
    /// Which sides get a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// Border glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    pub const PLAIN: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    pub const ROUNDED: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Plain,
    Rounded,
}

impl BorderType {
    pub const fn border_set(self) -> BorderSet {
        match self {
            BorderType::Plain => BorderSet::PLAIN,
            BorderType::Rounded => BorderSet::ROUNDED,
        }
    }
}

/// A block with optional borders and a title in the top border.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_style: Style,
    border_type: BorderType,
    title: Option<&'a str>,
    title_style: Style,
    style: Style,
}

impl<'a> Block<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with all borders enabled.
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Style applied to the whole block area (typically a background).
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The area inside the borders.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;
        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }
        inner
    }

    fn border_cell(&self, c: char) -> Cell {
        let mut cell = Cell::from_char(c);
        apply_style(&mut cell, self.style.patch(&self.border_style));
        cell
    }

    fn render_borders(&self, area: Rect, frame: &mut Frame) {
        let set = self.border_type.border_set();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                frame.buffer.set_raw(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                frame.buffer.set_raw(right, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                frame.buffer.set_raw(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                frame.buffer.set_raw(x, bottom, self.border_cell(set.horizontal));
            }
        }

        let corners = [
            (Borders::TOP | Borders::LEFT, area.x, area.y, set.top_left),
            (Borders::TOP | Borders::RIGHT, right, area.y, set.top_right),
            (Borders::BOTTOM | Borders::LEFT, area.x, bottom, set.bottom_left),
            (Borders::BOTTOM | Borders::RIGHT, right, bottom, set.bottom_right),
        ];
        for (sides, x, y, ch) in corners {
            if self.borders.contains(sides) {
                frame.buffer.set_raw(x, y, self.border_cell(ch));
            }
        }
    }

    fn render_title(&self, area: Rect, frame: &mut Frame) {
        let Some(title) = self.title else {
            return;
        };
        let (x, y) = if self.borders.contains(Borders::TOP) {
            (area.x.saturating_add(2), area.y)
        } else {
            (area.x, area.y)
        };
        let max_x = if self.borders.contains(Borders::RIGHT) {
            area.right().saturating_sub(2)
        } else {
            area.right()
        };
        if x >= max_x {
            return;
        }
        let style = self.style.patch(&self.title_style);
        let end = draw_text_span(frame, x, y, " ", style, max_x);
        let end = draw_text_span(frame, end, y, title, style, max_x);
        draw_text_span(frame, end, y, " ", style, max_x);
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }
        let mut blank = Cell::default();
        apply_style(&mut blank, self.style);
        frame.buffer.fill(area, blank);
        self.render_borders(area, frame);
        self.render_title(area, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_render::cell::PackedRgba;

    fn row_text(frame: &Frame, y: u16) -> String {
        (0..frame.width())
            .map(|x| {
                frame
                    .buffer
                    .get(x, y)
                    .and_then(|c| c.content.as_char())
                    .unwrap_or(' ')
            })
            .collect()
    }

    #[test]
    fn inner_shrinks_by_borders() {
        let block = Block::bordered();
        assert_eq!(block.inner(Rect::new(0, 0, 10, 5)), Rect::new(1, 1, 8, 3));
        let top_only = Block::new().borders(Borders::TOP);
        assert_eq!(top_only.inner(Rect::new(0, 0, 10, 5)), Rect::new(0, 1, 10, 4));
    }

    #[test]
    fn rounded_box_with_title() {
        let mut frame = Frame::new(12, 3);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Hi")
            .render(Rect::new(0, 0, 12, 3), &mut frame);
        assert_eq!(row_text(&frame, 0), "╭─ Hi ─────╮");
        assert_eq!(row_text(&frame, 1), "│          │");
        assert_eq!(row_text(&frame, 2), "╰──────────╯");
    }

    #[test]
    fn long_title_is_truncated_inside_corners() {
        let mut frame = Frame::new(8, 3);
        Block::bordered()
            .title("A very long title")
            .render(Rect::new(0, 0, 8, 3), &mut frame);
        assert_eq!(row_text(&frame, 0), "┌─ A v─┐");
    }

    #[test]
    fn background_fills_area() {
        let mut frame = Frame::new(4, 4);
        let bg = PackedRgba::rgb(1, 1, 1);
        Block::new()
            .style(Style::new().bg(bg))
            .render(Rect::new(1, 1, 2, 2), &mut frame);
        assert_eq!(frame.buffer.get(1, 1).map(|c| c.bg), Some(bg));
        assert_eq!(frame.buffer.get(0, 0).map(|c| c.bg), Some(PackedRgba::TRANSPARENT));
    }
}
