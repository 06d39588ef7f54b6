#![forbid(unsafe_code)]

//! Three-circle Venn diagram.
//!
//! # Geometry
//!
//! Shapes live in a fixed 300 x 300 diagram space. The circle centers, the
//! radius and the label anchors are constants; nothing is measured at
//! runtime. [`layout`] is a pure function of the active region and only
//! decides each circle's [`Emphasis`]: a circle is emphasized when its base
//! set is part of the active region's coverage, and dim otherwise (all dim
//! when nothing is active).
//!
//! # Rasterization
//!
//! [`VennDiagram`] fits the diagram into the largest `2n x n` cell block
//! inside its area (terminal cells are roughly twice as tall as wide) and
//! samples each cell center. The set of circles containing a sample is its
//! coverage, and [`RegionId::from_coverage`] turns that into one of the seven
//! regions. Each region cell is registered in the hit grid with
//! `data = RegionId::index()`.

use academy_core::geometry::Rect;
use academy_layout::centered;
use academy_render::cell::Cell;
use academy_render::frame::{Frame, HitId, HitRegion};
use academy_style::{Accent, InteractiveStyle, Style, Theme};

#[cfg(feature = "tracing")]
use web_time::Instant;

use crate::region::{BaseSet, CoverageSet, RegionId, lookup};
use crate::selection::SelectionState;
use crate::{StatefulWidget, draw_text_span};

/// Side length of the square diagram space.
pub const DIAGRAM_SIZE: f32 = 300.0;
/// Radius shared by the three circles.
pub const CIRCLE_RADIUS: f32 = 75.0;

/// Glyph used for circle outlines.
const OUTLINE_GLYPH: char = '·';

/// Below this many rows labels would overlap; only fills and outlines render.
const MIN_LABEL_ROWS: u16 = 12;

/// A point in diagram space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

const CIRCLE_CENTERS: [(BaseSet, Point); 3] = [
    (BaseSet::Infrastructure, Point::new(150.0, 110.0)),
    (BaseSet::Software, Point::new(110.0, 180.0)),
    (BaseSet::MachineLearning, Point::new(190.0, 180.0)),
];

/// Label anchors; each lies strictly inside its own region.
const LABEL_ANCHORS: [(RegionId, Point); 7] = [
    (RegionId::Infrastructure, Point::new(150.0, 70.0)),
    (RegionId::Software, Point::new(80.0, 200.0)),
    (RegionId::MachineLearning, Point::new(220.0, 200.0)),
    (RegionId::InfrastructureSoftware, Point::new(112.0, 132.0)),
    (RegionId::SoftwareMachineLearning, Point::new(150.0, 212.0)),
    (RegionId::InfrastructureMachineLearning, Point::new(188.0, 132.0)),
    (RegionId::InfrastructureSoftwareMachineLearning, Point::new(150.0, 160.0)),
];

/// Visual weight of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Emphasized,
    Dim,
}

impl Emphasis {
    /// Fill opacity for this level under `theme`.
    pub const fn opacity(self, theme: &Theme) -> f32 {
        theme.opacity(matches!(self, Emphasis::Emphasized))
    }
}

/// One base circle with its current emphasis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub base: BaseSet,
    pub center: Point,
    pub radius: f32,
    pub accent: Accent,
    pub emphasis: Emphasis,
}

impl CircleShape {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

/// Short region label at a fixed anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionLabel {
    pub region: RegionId,
    pub anchor: Point,
    pub text: &'static str,
}

/// Everything the diagram draws, for one active region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VennLayout {
    pub active: Option<RegionId>,
    pub circles: [CircleShape; 3],
    pub labels: [RegionLabel; 7],
}

impl VennLayout {
    pub fn circle(&self, base: BaseSet) -> &CircleShape {
        // `circles` is built in `BaseSet::ALL` order
        &self.circles[base as usize]
    }

    /// Base sets whose circles are emphasized.
    pub fn emphasized(&self) -> CoverageSet {
        self.circles
            .iter()
            .filter(|c| c.emphasis == Emphasis::Emphasized)
            .fold(CoverageSet::empty(), |acc, c| acc | c.base.flag())
    }
}

/// Build the diagram for `active`. Pure; no state is read or cached.
pub fn layout(active: Option<RegionId>) -> VennLayout {
    let coverage = active.map(RegionId::coverage).unwrap_or_default();
    let circles = CIRCLE_CENTERS.map(|(base, center)| CircleShape {
        base,
        center,
        radius: CIRCLE_RADIUS,
        accent: lookup(base.region()).accent,
        emphasis: if coverage.contains(base.flag()) {
            Emphasis::Emphasized
        } else {
            Emphasis::Dim
        },
    });
    let labels = LABEL_ANCHORS.map(|(region, anchor)| RegionLabel {
        region,
        anchor,
        text: lookup(region).short_label,
    });
    VennLayout {
        active,
        circles,
        labels,
    }
}

/// Circles containing `p`.
pub fn coverage_at(p: Point) -> CoverageSet {
    CIRCLE_CENTERS
        .iter()
        .filter(|(_, center)| center.distance(p) <= CIRCLE_RADIUS)
        .fold(CoverageSet::empty(), |acc, (base, _)| acc | base.flag())
}

/// Region containing `p`, or `None` outside every circle.
pub fn region_at_point(p: Point) -> Option<RegionId> {
    RegionId::from_coverage(coverage_at(p))
}

/// Mapping between a cell block and diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Raster {
    rect: Rect,
}

impl Raster {
    fn fit(area: Rect) -> Option<Self> {
        let rows = area.height.min(area.width / 2);
        if rows == 0 {
            return None;
        }
        Some(Self {
            rect: centered(area, rows * 2, rows),
        })
    }

    /// Diagram-space height of one cell.
    fn unit(&self) -> f32 {
        DIAGRAM_SIZE / f32::from(self.rect.height)
    }

    fn to_diagram(&self, x: u16, y: u16) -> Point {
        let col = f32::from(x - self.rect.x) + 0.5;
        let row = f32::from(y - self.rect.y) + 0.5;
        Point::new(
            col * DIAGRAM_SIZE / f32::from(self.rect.width),
            row * DIAGRAM_SIZE / f32::from(self.rect.height),
        )
    }

    fn to_cell(&self, p: Point) -> (u16, u16) {
        let col = (p.x / DIAGRAM_SIZE * f32::from(self.rect.width)) as u16;
        let row = (p.y / DIAGRAM_SIZE * f32::from(self.rect.height)) as u16;
        (
            self.rect.x + col.min(self.rect.width - 1),
            self.rect.y + row.min(self.rect.height - 1),
        )
    }
}

/// The diagram widget. Reads the selection; never mutates it.
#[derive(Debug, Clone)]
pub struct VennDiagram {
    theme: Theme,
    hit_id: HitId,
    label_style: InteractiveStyle,
}

impl VennDiagram {
    pub fn new(theme: Theme, hit_id: HitId) -> Self {
        let label_style = InteractiveStyle::new(Style::new().fg(theme.text))
            .hover(Style::new().bold())
            .active(Style::new().bold().underline());
        Self {
            theme,
            hit_id,
            label_style,
        }
    }

    #[must_use]
    pub fn label_style(mut self, style: InteractiveStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn hit_id(&self) -> HitId {
        self.hit_id
    }

    /// Region drawn at screen cell `(x, y)` when the diagram occupies `area`.
    pub fn region_at(area: Rect, x: u16, y: u16) -> Option<RegionId> {
        let raster = Raster::fit(area)?;
        if !raster.rect.contains(x, y) {
            return None;
        }
        region_at_point(raster.to_diagram(x, y))
    }

    fn render_cells(&self, raster: &Raster, layout: &VennLayout, frame: &mut Frame) {
        let band = raster.unit() * 0.5;
        let rect = raster.rect;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let p = raster.to_diagram(x, y);
                let mut bg = self.theme.background;
                let mut coverage = CoverageSet::empty();
                let mut outline: Option<Accent> = None;

                for circle in &layout.circles {
                    let d = circle.center.distance(p);
                    if d <= circle.radius {
                        coverage |= circle.base.flag();
                        let tint = self
                            .theme
                            .accent(circle.accent)
                            .with_opacity(circle.emphasis.opacity(&self.theme));
                        bg = tint.over(bg);
                    }
                    if outline.is_none() && (d - circle.radius).abs() <= band {
                        outline = Some(circle.accent);
                    }
                }

                let Some(cell) = frame.buffer.get_mut(x, y) else {
                    continue;
                };
                *cell = Cell::default().with_bg(bg);
                if let Some(accent) = outline {
                    *cell = cell
                        .with_char(OUTLINE_GLYPH)
                        .with_fg(self.theme.accent(accent));
                }

                if let Some(region) = RegionId::from_coverage(coverage) {
                    frame.register_hit_cell(
                        x,
                        y,
                        self.hit_id,
                        HitRegion::Content,
                        region.index() as u64,
                    );
                }
            }
        }
    }

    fn render_labels(
        &self,
        raster: &Raster,
        layout: &VennLayout,
        frame: &mut Frame,
        state: &SelectionState,
    ) {
        let rect = raster.rect;
        for label in &layout.labels {
            let (cx, cy) = raster.to_cell(label.anchor);
            let width = academy_render::display_width(label.text) as u16;
            let start = cx.saturating_sub(width / 2).max(rect.x);
            let style = self
                .label_style
                .resolve(state.interaction_state(label.region));
            draw_text_span(frame, start, cy, label.text, style, rect.right());
        }
    }
}

impl StatefulWidget for VennDiagram {
    type State = SelectionState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();
        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "venn.render",
            active = state.active_region().map(RegionId::slug),
            pinned = state.is_pinned_active(),
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }
        frame
            .buffer
            .fill(area, Cell::default().with_bg(self.theme.background));

        let Some(raster) = Raster::fit(area) else {
            return;
        };
        let layout = layout(state.active_region());
        self.render_cells(&raster, &layout, frame);
        if raster.rect.height >= MIN_LABEL_ROWS {
            self.render_labels(&raster, &layout, frame, state);
        }

        #[cfg(feature = "tracing")]
        render_span.record(
            "render_duration_us",
            render_start.elapsed().as_micros() as u64,
        );
    }
}
