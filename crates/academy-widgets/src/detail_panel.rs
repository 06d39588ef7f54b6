#![forbid(unsafe_code)]

//! Detail panel for the active region.
//!
//! [`PanelContent::for_selection`] decides what to show; [`DetailPanel`]
//! draws it. With nothing active the panel shows a placeholder prompt.
//! Otherwise it shows the region's icon, title, description and topics, and,
//! when the region is pinned, a `[ clear selection ]` button. Pressing the
//! button clicks the pinned region again, which releases it.

use academy_core::event::{MouseButton, MouseEvent, MouseEventKind};
use academy_core::geometry::{Rect, Sides};
use academy_render::frame::{Frame, HitData, HitId, HitRegion};
use academy_style::{Style, Theme};

use crate::block::{Block, BorderType};
use crate::mouse::MouseResult;
use crate::region::{RegionDescriptor, RegionId, lookup};
use crate::selection::SelectionState;
use crate::{StatefulWidget, Widget, draw_text_span, set_style_area};

/// Prompt shown while no region is active.
pub const PLACEHOLDER_TEXT: &str =
    "Hover over or click a region of the diagram to explore how the disciplines overlap.";

/// Label of the button that releases a pinned region.
pub const CLEAR_LABEL: &str = "[ clear selection ]";

/// What the panel shows for a given selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent {
    Placeholder,
    Region {
        region: RegionId,
        descriptor: &'static RegionDescriptor,
        /// The region is pinned, so the clear button is offered.
        clearable: bool,
    },
}

impl PanelContent {
    pub fn for_selection(state: &SelectionState) -> Self {
        match state.active_region() {
            None => PanelContent::Placeholder,
            Some(region) => PanelContent::Region {
                region,
                descriptor: lookup(region),
                clearable: state.is_pinned_active(),
            },
        }
    }

    /// Title of the described region, if any.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            PanelContent::Placeholder => None,
            PanelContent::Region { descriptor, .. } => Some(descriptor.title),
        }
    }

    pub fn is_clearable(&self) -> bool {
        matches!(self, PanelContent::Region { clearable: true, .. })
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_width = academy_render::display_width(word);

        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        while word_width > width {
            let mut taken = 0;
            let split = word
                .char_indices()
                .find(|&(_, ch)| {
                    taken += academy_render::char_width(ch);
                    taken > width
                })
                .map_or(word.len(), |(i, _)| i);
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            lines.push(word[..split].to_owned());
            word = &word[split..];
            word_width = academy_render::display_width(word);
        }

        if word.is_empty() {
            continue;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// The detail panel widget.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    theme: Theme,
    hit_id: HitId,
}

impl DetailPanel {
    pub fn new(theme: Theme, hit_id: HitId) -> Self {
        Self { theme, hit_id }
    }

    pub fn hit_id(&self) -> HitId {
        self.hit_id
    }

    /// Route a mouse event to the clear button.
    ///
    /// A left press on the button registered under `expected_id` clicks the
    /// pinned region again, releasing it.
    pub fn handle_mouse(
        state: &mut SelectionState,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
    ) -> MouseResult {
        match (event.kind, hit) {
            (MouseEventKind::Down(MouseButton::Left), Some((id, HitRegion::Button, _)))
                if id == expected_id =>
            {
                match state.clear_pin() {
                    Some(region) => MouseResult::Deselected(region.index()),
                    None => MouseResult::Ignored,
                }
            }
            _ => MouseResult::Ignored,
        }
    }

    fn body_lines(&self, content: &PanelContent, width: usize) -> Vec<(String, Style)> {
        let text = Style::new().fg(self.theme.text);
        let muted = Style::new().fg(self.theme.muted);

        let PanelContent::Region {
            region,
            descriptor,
            clearable,
        } = *content
        else {
            return wrap_words(PLACEHOLDER_TEXT, width)
                .into_iter()
                .map(|l| (l, muted.italic()))
                .collect();
        };

        let accent = self.theme.accent(descriptor.accent);
        let heading = Style::new().fg(accent).bold();
        let title = format!("{} {}", descriptor.icon.glyph(), descriptor.title);
        let mut lines: Vec<(String, Style)> = wrap_words(&title, width)
            .into_iter()
            .map(|l| (l, heading))
            .collect();

        let bases: Vec<&str> = region.bases().map(|b| b.name()).collect();
        let covers = format!("covers {}", bases.join(" + "));
        lines.extend(wrap_words(&covers, width).into_iter().map(|l| (l, muted)));
        let status = if clearable { "● pinned" } else { "○ preview" };
        lines.push((status.to_owned(), muted));
        lines.push((String::new(), text));

        lines.extend(wrap_words(descriptor.description, width).into_iter().map(|l| (l, text)));
        lines.push((String::new(), text));
        lines.push(("Topics".to_owned(), text.bold()));

        for topic in descriptor.topics {
            let wrapped = wrap_words(topic, width.saturating_sub(2));
            for (i, part) in wrapped.into_iter().enumerate() {
                let bullet = if i == 0 { "• " } else { "  " };
                lines.push((format!("{bullet}{part}"), text));
            }
        }
        lines
    }
}

impl StatefulWidget for DetailPanel {
    type State = SelectionState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        let content = PanelContent::for_selection(state);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Details")
            .border_style(Style::new().fg(self.theme.border))
            .style(Style::new().bg(self.theme.background).fg(self.theme.text));
        block.render(area, frame);

        let inner = block
            .inner(area.intersection(&frame.bounds()))
            .inner(Sides::horizontal(1));
        if inner.is_empty() {
            return;
        }

        let lines = self.body_lines(&content, inner.width as usize);
        // The button keeps a row even when the body overflows.
        let button_y = match content {
            PanelContent::Region {
                clearable: true, ..
            } => {
                let after_body = inner.y.saturating_add(lines.len() as u16 + 1);
                Some(after_body.min(inner.bottom() - 1))
            }
            _ => None,
        };
        let body_bottom = button_y.unwrap_or(inner.bottom());

        for (y, (line, style)) in (inner.y..body_bottom).zip(&lines) {
            draw_text_span(frame, inner.x, y, line, *style, inner.right());
        }

        if let PanelContent::Region {
            region, descriptor, ..
        } = content
        {
            let accent = self.theme.accent(descriptor.accent);
            let header_tint = accent.with_opacity(0.2).over(self.theme.background);
            let header_rows = lines
                .iter()
                .take_while(|(_, style)| Some(style) == lines.first().map(|(_, s)| s))
                .count() as u16;
            set_style_area(
                frame,
                Rect::new(inner.x, inner.y, inner.width, header_rows.min(inner.height)),
                Style::new().bg(header_tint),
            );

            if let Some(y) = button_y {
                let end = draw_text_span(
                    frame,
                    inner.x,
                    y,
                    CLEAR_LABEL,
                    Style::new().fg(accent).bold(),
                    inner.right(),
                );
                frame.register_hit(
                    Rect::new(inner.x, y, end - inner.x, 1),
                    self.hit_id,
                    HitRegion::Button,
                    region.index() as u64,
                );
            }
        }
    }
}
