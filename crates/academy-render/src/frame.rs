#![forbid(unsafe_code)]

//! Frame = Buffer + hit grid for one render pass.
//!
//! `Model::view()` draws into a `Frame`. Widgets that accept pointer input
//! register what they drew in the [`HitGrid`], so the next mouse event can be
//! mapped back to the widget and sub-target under the pointer without
//! re-running any geometry.
//!
//! ```
//! use academy_render::cell::Cell;
//! use academy_render::frame::{Frame, HitId, HitRegion};
//! use academy_core::geometry::Rect;
//!
//! let mut frame = Frame::with_hit_grid(10, 4);
//! frame.buffer.set_raw(0, 0, Cell::from_char('A'));
//! frame.register_hit(Rect::new(0, 0, 3, 1), HitId::new(7), HitRegion::Button, 0);
//! assert_eq!(frame.hit_test(1, 0), Some((HitId::new(7), HitRegion::Button, 0)));
//! ```

use academy_core::geometry::Rect;

use crate::buffer::Buffer;

/// Identifier of the widget that owns a hit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Widget-defined payload stored with a hit (e.g. a region index).
pub type HitData = u64;

/// Kind of target within a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    #[default]
    None,
    /// Main content area; `HitData` says which part.
    Content,
    /// Clickable button.
    Button,
    /// Widget-specific tag.
    Custom(u8),
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    pub widget_id: Option<HitId>,
    pub region: HitRegion,
    pub data: HitData,
}

impl HitCell {
    #[inline]
    pub const fn new(widget_id: HitId, region: HitRegion, data: HitData) -> Self {
        Self {
            widget_id: Some(widget_id),
            region,
            data,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.widget_id.is_none()
    }
}

/// Screen-sized map from cell position to hit target.
///
/// Later registrations overwrite earlier ones, so widgets drawn on top win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![HitCell::default(); size],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&HitCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Map every cell of `rect` (clipped to the grid) to the given target.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let Some(clipped) = rect.intersection_opt(&Rect::from_size(self.width, self.height))
        else {
            return;
        };
        let hit_cell = HitCell::new(widget_id, region, data);
        for y in clipped.y..clipped.bottom() {
            let start = y as usize * self.width as usize + clipped.x as usize;
            let end = start + clipped.width as usize;
            self.cells[start..end].fill(hit_cell);
        }
    }

    /// Map a single cell. Out-of-bounds positions are ignored.
    pub fn register_cell(
        &mut self,
        x: u16,
        y: u16,
        widget_id: HitId,
        region: HitRegion,
        data: HitData,
    ) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = HitCell::new(widget_id, region, data);
        }
    }

    /// The target at `(x, y)`, if any widget registered one.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.get(x, y)
            .and_then(|cell| cell.widget_id.map(|id| (id, cell.region, cell.data)))
    }

    /// Number of cells that carry a target.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Render target for a single pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this pass.
    pub buffer: Buffer,

    /// When `Some`, widgets can register pointer targets.
    pub hit_grid: Option<HitGrid>,
}

impl Frame {
    /// Frame without hit testing.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
        }
    }

    /// Frame with a hit grid of the same size.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Reset the buffer and the hit grid (if present).
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(grid) = self.hit_grid.as_mut() {
            grid.clear();
        }
    }

    /// Register a rectangular target. Returns `false` if hit testing is off.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion, data: HitData) -> bool {
        match self.hit_grid.as_mut() {
            Some(grid) => {
                grid.register(rect, id, region, data);
                true
            }
            None => false,
        }
    }

    /// Register a one-cell target. Returns `false` if hit testing is off.
    pub fn register_hit_cell(
        &mut self,
        x: u16,
        y: u16,
        id: HitId,
        region: HitRegion,
        data: HitData,
    ) -> bool {
        match self.hit_grid.as_mut() {
            Some(grid) => {
                grid.register_cell(x, y, id, region, data);
                true
            }
            None => false,
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|grid| grid.hit_test(x, y))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
