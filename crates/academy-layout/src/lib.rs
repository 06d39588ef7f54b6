#![forbid(unsafe_code)]

//! Layout primitives and the flex solver.

pub use academy_core::geometry::{Rect, Sides};
use std::cmp::min;

/// A constraint on the size of a layout area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// An exact size in cells.
    Fixed(u16),
    /// A percentage of the available size (0.0 to 100.0).
    Percentage(f32),
    /// At least this many cells, then grow.
    Min(u16),
    /// Grow, but never beyond this many cells.
    Max(u16),
}

/// The direction to lay items out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A flexible layout container.
#[derive(Debug, Clone, Default)]
pub struct Flex {
    direction: Direction,
    constraints: Vec<Constraint>,
    margin: Sides,
    gap: u16,
}

impl Flex {
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Split `area` into one rectangle per constraint.
    ///
    /// Always returns exactly `constraints.len()` rectangles; they are empty
    /// when the area (after margin) is too small.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let inner = area.inner(self.margin);
        if inner.is_empty() {
            return self.constraints.iter().map(|_| Rect::default()).collect();
        }

        let count = self.constraints.len();
        if count == 0 {
            return Vec::new();
        }

        let total_size = match self.direction {
            Direction::Horizontal => inner.width,
            Direction::Vertical => inner.height,
        };
        let total_gap = self.gap.saturating_mul((count - 1) as u16);
        let available = total_size.saturating_sub(total_gap);

        let sizes = self.solve(available);
        self.sizes_to_rects(inner, &sizes)
    }

    fn solve(&self, available: u16) -> Vec<u16> {
        let mut sizes = vec![0u16; self.constraints.len()];
        let mut remaining = available;
        let mut grow = Vec::new();

        for (i, &constraint) in self.constraints.iter().enumerate() {
            let size = match constraint {
                Constraint::Fixed(size) => size,
                Constraint::Percentage(p) => {
                    (f32::from(available) * p.clamp(0.0, 100.0) / 100.0).round() as u16
                }
                Constraint::Min(size) => {
                    grow.push(i);
                    size
                }
                Constraint::Max(_) => {
                    grow.push(i);
                    0
                }
            };
            let size = min(size, remaining);
            sizes[i] = size;
            remaining -= size;
        }

        // Equal shares of the remainder; the last grower absorbs rounding.
        if remaining > 0 && !grow.is_empty() {
            let share = remaining / grow.len() as u16;
            let mut left = remaining;
            for (n, &i) in grow.iter().enumerate() {
                let mut add = if n + 1 == grow.len() { left } else { share };
                if let Constraint::Max(max) = self.constraints[i] {
                    add = min(add, max.saturating_sub(sizes[i]));
                }
                sizes[i] += add;
                left -= add;
            }
        }

        sizes
    }

    fn sizes_to_rects(&self, area: Rect, sizes: &[u16]) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(sizes.len());
        let mut pos = match self.direction {
            Direction::Horizontal => area.x,
            Direction::Vertical => area.y,
        };

        for &size in sizes {
            let rect = match self.direction {
                Direction::Horizontal => Rect::new(pos, area.y, size, area.height),
                Direction::Vertical => Rect::new(area.x, pos, area.width, size),
            };
            rects.push(rect);
            pos = pos.saturating_add(size).saturating_add(self.gap);
        }
        rects
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
