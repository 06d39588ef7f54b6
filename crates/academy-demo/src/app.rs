//! The explorer application model.
//!
//! Layout: the diagram on the left, the detail panel on the right, a status
//! line at the bottom. Mouse events resolve against the hit grid of the last
//! presented frame, so hover and click land on exactly what is on screen.

use academy::layout::{Constraint, Flex};
use academy::prelude::*;
use academy::render::frame::{HitData, HitRegion};
use academy::widgets::block::{Block, BorderType};
use academy::{
    DetailPanel, HitId, KeyEventKind, MouseResult, PointerTracker, StatefulWidget, VennDiagram,
    Widget,
};

/// Hit id registered by the diagram (data = region index).
pub const DIAGRAM_HIT: HitId = HitId(1);
/// Hit id registered by the detail panel's clear button.
pub const PANEL_HIT: HitId = HitId(2);

const STATUS_HINT: &str = "hover to preview · click to pin · 1-7 pin · esc clear · q quit";

/// Top-level application message.
#[derive(Debug)]
pub enum Msg {
    Pointer(MouseEvent, Option<(HitId, HitRegion, HitData)>),
    Key(KeyEvent),
    FocusLost,
    Ignore,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Self::Key(key),
            Event::Mouse(mouse) => Self::Pointer(mouse, None),
            Event::Focus(false) => Self::FocusLost,
            _ => Self::Ignore,
        }
    }
}

/// Top-level application state.
#[derive(Debug, Clone)]
pub struct AcademyApp {
    theme: Theme,
    selection: SelectionState,
    tracker: PointerTracker,
}

impl AcademyApp {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            selection: SelectionState::new(),
            tracker: PointerTracker::new(),
        }
    }

    /// Start from a scripted selection (snapshot mode).
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionState) -> Self {
        self.selection = selection;
        self
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    fn on_pointer(
        &mut self,
        event: MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> Cmd<Msg> {
        let diagram = self
            .selection
            .handle_mouse(&event, hit, DIAGRAM_HIT, &mut self.tracker);
        let panel = DetailPanel::handle_mouse(&mut self.selection, &event, hit, PANEL_HIT);
        let result = if panel.is_handled() { panel } else { diagram };
        self.pin_log(result)
    }

    fn on_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.kind != KeyEventKind::Press {
            return Cmd::none();
        }
        match key.code {
            KeyCode::Char('q') => Cmd::quit(),
            KeyCode::Char('c') if key.ctrl() => Cmd::quit(),
            KeyCode::Escape => match self.selection.clear_pin() {
                Some(region) => self.pin_log(MouseResult::Deselected(region.index())),
                None => Cmd::none(),
            },
            KeyCode::Char(c @ '1'..='7') => {
                let Some(region) = c
                    .to_digit(10)
                    .and_then(|d| RegionId::from_index(d as usize - 1))
                else {
                    return Cmd::none();
                };
                self.selection.on_click(region);
                let result = if self.selection.pinned == Some(region) {
                    MouseResult::Selected(region.index())
                } else {
                    MouseResult::Deselected(region.index())
                };
                self.pin_log(result)
            }
            _ => Cmd::none(),
        }
    }

    fn pin_log(&self, result: MouseResult) -> Cmd<Msg> {
        let (verb, index) = match result {
            MouseResult::Selected(index) => ("pinned", index),
            MouseResult::Deselected(index) => ("released", index),
            MouseResult::Ignored | MouseResult::HoverChanged => return Cmd::none(),
        };
        match RegionId::from_index(index) {
            Some(region) => Cmd::log(format!("{verb} {}", region.slug())),
            None => Cmd::none(),
        }
    }

    fn status_text(&self) -> String {
        match self.selection.active_region() {
            Some(region) => {
                let mode = if self.selection.is_pinned_active() {
                    "pinned"
                } else {
                    "hover"
                };
                format!(
                    " {} ({mode}) │ {STATUS_HINT}",
                    academy::lookup(region).title
                )
            }
            None => format!(" {STATUS_HINT}"),
        }
    }
}

impl Default for AcademyApp {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Model for AcademyApp {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Pointer(event, hit) => self.on_pointer(event, hit),
            Msg::Key(key) => self.on_key(key),
            Msg::FocusLost => {
                if let Some(signal) = self.tracker.reset() {
                    self.selection.apply(signal);
                }
                Cmd::none()
            }
            Msg::Ignore => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.bounds();
        let rows = Flex::vertical()
            .constraints([Constraint::Min(1), Constraint::Fixed(1)])
            .split(area);
        let columns = Flex::horizontal()
            .constraints([Constraint::Percentage(58.0), Constraint::Min(24)])
            .gap(1)
            .split(rows[0]);

        let background = Style::new().bg(self.theme.background).fg(self.theme.text);
        Block::new().style(background).render(area, frame);

        let diagram_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(self.theme.border))
            .title(" Disciplines ")
            .title_style(Style::new().fg(self.theme.text).bold());
        diagram_block.render(columns[0], frame);

        // Widgets take the state mutably; the model's copy stays untouched.
        let mut selection = self.selection;
        VennDiagram::new(self.theme, DIAGRAM_HIT).render(
            diagram_block.inner(columns[0]),
            frame,
            &mut selection,
        );
        DetailPanel::new(self.theme, PANEL_HIT).render(columns[1], frame, &mut selection);

        let status = self.status_text();
        Block::new()
            .style(Style::new().bg(self.theme.border).fg(self.theme.text))
            .title(&status)
            .render(rows[1], frame);
    }

    fn translate(&self, event: Event, last_frame: &Frame) -> Msg {
        match event {
            Event::Mouse(mouse) => Msg::Pointer(mouse, last_frame.hit_test(mouse.x, mouse.y)),
            other => Msg::from(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy::{MouseButton, MouseEventKind};

    fn key(c: char) -> Msg {
        Msg::Key(KeyEvent::new(KeyCode::Char(c)))
    }

    #[test]
    fn digits_pin_regions_in_catalog_order() {
        let mut app = AcademyApp::default();
        let cmd = app.update(key('4'));
        assert_eq!(app.selection().pinned, Some(RegionId::InfrastructureSoftware));
        assert!(matches!(cmd, Cmd::Log(ref s) if s == "pinned infrastructure-software"));

        app.update(key('4'));
        assert_eq!(app.selection().pinned, None);
    }

    #[test]
    fn escape_clears_the_pin() {
        let mut app = AcademyApp::default();
        app.update(key('7'));
        let cmd = app.update(Msg::Key(KeyEvent::new(KeyCode::Escape)));
        assert_eq!(app.selection().pinned, None);
        assert!(matches!(cmd, Cmd::Log(ref s) if s.starts_with("released")));
        assert!(app.update(Msg::Key(KeyEvent::new(KeyCode::Escape))).is_none());
    }

    #[test]
    fn quit_keys() {
        let mut app = AcademyApp::default();
        assert!(matches!(app.update(key('q')), Cmd::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert!(matches!(app.update(Msg::Key(ctrl_c)), Cmd::Quit));
        assert!(app.update(key('c')).is_none());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = AcademyApp::default();
        let release = KeyEvent::new(KeyCode::Char('1')).with_kind(KeyEventKind::Release);
        app.update(Msg::Key(release));
        assert_eq!(app.selection().pinned, None);
    }

    #[test]
    fn pointer_over_diagram_hovers() {
        let mut app = AcademyApp::default();
        let hit = Some((DIAGRAM_HIT, HitRegion::Content, RegionId::Software.index() as u64));
        app.update(Msg::Pointer(MouseEvent::new(MouseEventKind::Moved, 3, 3), hit));
        assert_eq!(app.selection().active_region(), Some(RegionId::Software));

        app.update(Msg::FocusLost);
        assert_eq!(app.selection().active_region(), None);
    }

    #[test]
    fn panel_button_releases_pin() {
        let mut app = AcademyApp::default();
        app.update(key('2'));
        let hit = Some((PANEL_HIT, HitRegion::Button, 0));
        let press = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 70, 20);
        let cmd = app.update(Msg::Pointer(press, hit));
        assert_eq!(app.selection().pinned, None);
        assert!(matches!(cmd, Cmd::Log(ref s) if s == "released software"));
    }

    #[test]
    fn status_line_names_the_active_region() {
        let mut app = AcademyApp::default();
        assert!(!app.status_text().contains("pinned"));
        app.update(key('5'));
        let status = app.status_text();
        assert!(status.contains(academy::lookup(RegionId::SoftwareMachineLearning).title));
        assert!(status.contains("(pinned)"));
    }
}
