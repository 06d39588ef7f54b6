#![no_main]

use academy_core::event::{MouseButton, MouseEvent, MouseEventKind};
use academy_render::frame::{Frame, HitId};
use academy_style::Theme;
use academy_widgets::StatefulWidget;
use academy_widgets::hover::PointerTracker;
use academy_widgets::selection::SelectionState;
use academy_widgets::venn::VennDiagram;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

const DIAGRAM: HitId = HitId(1);

#[derive(Debug, Arbitrary)]
enum Step {
    Move { x: u8, y: u8 },
    Press { x: u8, y: u8 },
    Release { x: u8, y: u8 },
    Resize { width: u8, height: u8 },
    LoseFocus,
}

#[derive(Debug, Arbitrary)]
struct Session {
    width: u8,
    height: u8,
    steps: Vec<Step>,
}

fn clamp_size(width: u8, height: u8) -> (u16, u16) {
    (u16::from(width % 120).max(1), u16::from(height % 60).max(1))
}

fn render(width: u16, height: u16, mut state: SelectionState) -> Frame {
    let mut frame = Frame::with_hit_grid(width, height);
    VennDiagram::new(Theme::default(), DIAGRAM).render(frame.bounds(), &mut frame, &mut state);
    frame
}

fuzz_target!(|session: Session| {
    let (mut width, mut height) = clamp_size(session.width, session.height);
    let mut state = SelectionState::new();
    let mut tracker = PointerTracker::new();
    let mut frame = render(width, height, state);

    for step in session.steps.into_iter().take(256) {
        let (kind, x, y) = match step {
            Step::Move { x, y } => (MouseEventKind::Moved, x, y),
            Step::Press { x, y } => (MouseEventKind::Down(MouseButton::Left), x, y),
            Step::Release { x, y } => (MouseEventKind::Up(MouseButton::Left), x, y),
            Step::Resize { width: w, height: h } => {
                (width, height) = clamp_size(w, h);
                frame = render(width, height, state);
                continue;
            }
            Step::LoseFocus => {
                if let Some(signal) = tracker.reset() {
                    state.apply(signal);
                }
                continue;
            }
        };
        let (x, y) = (u16::from(x), u16::from(y));
        let hit = frame.hit_test(x, y);
        state.handle_mouse(&MouseEvent::new(kind, x, y), hit, DIAGRAM, &mut tracker);

        // Hover follows the hit grid; a pin always outranks it.
        assert_eq!(state.hovered, PointerTracker::region_from_hit(hit, DIAGRAM));
        assert_eq!(state.hovered, tracker.current());
        assert_eq!(state.active_region(), state.pinned.or(state.hovered));

        frame = render(width, height, state);
    }
});
