#![forbid(unsafe_code)]

//! Selection state machine.
//!
//! Two independent slots: `hovered` follows the pointer, `pinned` is toggled
//! by clicks. The active region (what the diagram emphasizes and the panel
//! describes) is derived on every read: the pin wins over the hover.
//!
//! Leaving a region clears `hovered` without comparing ids ("last leave
//! wins"). With synthesized enter/leave pairs the leave always precedes the
//! next enter, so this never drops a live hover.

use academy_core::event::MouseEvent;
use academy_render::frame::{HitData, HitId, HitRegion};
use academy_style::InteractionState;

use crate::hover::{PointerSignal, PointerTracker};
use crate::mouse::MouseResult;
use crate::region::RegionId;

/// Hover and pin slots for one diagram instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub hovered: Option<RegionId>,
    pub pinned: Option<RegionId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_enter(&mut self, id: RegionId) {
        self.hovered = Some(id);
        #[cfg(feature = "tracing")]
        self.log_select("enter", id);
    }

    /// Clears the hover regardless of which region is reported as left.
    pub fn on_pointer_leave(&mut self, id: RegionId) {
        self.hovered = None;
        #[cfg(feature = "tracing")]
        self.log_select("leave", id);
        #[cfg(not(feature = "tracing"))]
        let _ = id;
    }

    /// Pin `id`, or release it if it is already pinned.
    pub fn on_click(&mut self, id: RegionId) {
        self.pinned = if self.pinned == Some(id) { None } else { Some(id) };
        #[cfg(feature = "tracing")]
        self.log_select("click", id);
    }

    /// `pinned` if set, else `hovered`.
    pub fn active_region(&self) -> Option<RegionId> {
        self.pinned.or(self.hovered)
    }

    /// True when the active region comes from a pin rather than a hover.
    pub fn is_pinned_active(&self) -> bool {
        self.pinned.is_some()
    }

    /// Release the pin, if any. Equivalent to clicking the pinned region.
    pub fn clear_pin(&mut self) -> Option<RegionId> {
        let pinned = self.pinned?;
        self.on_click(pinned);
        Some(pinned)
    }

    /// How `region` should be drawn given the current slots.
    pub fn interaction_state(&self, region: RegionId) -> InteractionState {
        if self.pinned == Some(region) {
            InteractionState::Active
        } else if self.active_region() == Some(region) {
            InteractionState::Hovered
        } else {
            InteractionState::Normal
        }
    }

    /// Apply one synthesized pointer signal.
    pub fn apply(&mut self, signal: PointerSignal) -> MouseResult {
        match signal {
            PointerSignal::Enter(id) => {
                self.on_pointer_enter(id);
                MouseResult::HoverChanged
            }
            PointerSignal::Leave(id) => {
                self.on_pointer_leave(id);
                MouseResult::HoverChanged
            }
            PointerSignal::Click(id) => {
                self.on_click(id);
                if self.pinned == Some(id) {
                    MouseResult::Selected(id.index())
                } else {
                    MouseResult::Deselected(id.index())
                }
            }
        }
    }

    /// Route a mouse event over the diagram into the state machine.
    ///
    /// Hit data convention: the diagram registers `data = RegionId::index()`
    /// under `expected_id`. The result reports the most significant
    /// transition (a click outranks hover changes).
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
        tracker: &mut PointerTracker,
    ) -> MouseResult {
        tracker
            .track(event, hit, expected_id)
            .into_iter()
            .fold(MouseResult::Ignored, |acc, signal| {
                match (acc, self.apply(signal)) {
                    (MouseResult::Selected(_) | MouseResult::Deselected(_), _) => acc,
                    (_, next) => next,
                }
            })
    }

    #[cfg(feature = "tracing")]
    fn log_select(&self, op: &str, region: RegionId) {
        tracing::debug!(
            message = "venn.select",
            op,
            region = region.slug(),
            hovered = self.hovered.map(RegionId::slug),
            pinned = self.pinned.map(RegionId::slug),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::event::{MouseButton, MouseEventKind};

    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing::Subscriber;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::Layer;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    const DIAGRAM: HitId = HitId(3);

    #[test]
    fn fresh_state_is_idle() {
        let s = SelectionState::new();
        assert_eq!(s.active_region(), None);
        assert!(!s.is_pinned_active());
    }

    #[test]
    fn hover_sets_active() {
        let mut s = SelectionState::new();
        s.on_pointer_enter(RegionId::Software);
        assert_eq!(s.active_region(), Some(RegionId::Software));
        assert!(!s.is_pinned_active());
    }

    #[test]
    fn pin_outranks_hover() {
        let mut s = SelectionState::new();
        s.on_click(RegionId::Software);
        s.on_pointer_enter(RegionId::MachineLearning);
        assert_eq!(s.active_region(), Some(RegionId::Software));
    }

    #[test]
    fn click_on_other_region_switches_pin() {
        let mut s = SelectionState::new();
        s.on_click(RegionId::Software);
        s.on_click(RegionId::InfrastructureSoftware);
        assert_eq!(s.pinned, Some(RegionId::InfrastructureSoftware));
    }

    #[test]
    fn leave_ignores_the_reported_id() {
        let mut s = SelectionState::new();
        s.on_pointer_enter(RegionId::Software);
        s.on_pointer_leave(RegionId::MachineLearning);
        assert_eq!(s.hovered, None);
    }

    #[test]
    fn clear_pin_toggles_off() {
        let mut s = SelectionState::new();
        assert_eq!(s.clear_pin(), None);
        s.on_click(RegionId::MachineLearning);
        assert_eq!(s.clear_pin(), Some(RegionId::MachineLearning));
        assert_eq!(s.pinned, None);
    }

    #[test]
    fn interaction_states() {
        let mut s = SelectionState::new();
        s.on_pointer_enter(RegionId::Software);
        assert_eq!(s.interaction_state(RegionId::Software), InteractionState::Hovered);
        s.on_click(RegionId::Infrastructure);
        assert_eq!(s.interaction_state(RegionId::Infrastructure), InteractionState::Active);
        // hover is shadowed by the pin
        assert_eq!(s.interaction_state(RegionId::Software), InteractionState::Normal);
    }

    #[test]
    fn mouse_press_on_region_pins_it() {
        let mut s = SelectionState::new();
        let mut tracker = PointerTracker::new();
        let ev = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 4, 4);
        let hit = Some((DIAGRAM, HitRegion::Content, RegionId::Software.index() as u64));
        let result = s.handle_mouse(&ev, hit, DIAGRAM, &mut tracker);
        assert_eq!(result, MouseResult::Selected(RegionId::Software.index()));
        assert_eq!(s.pinned, Some(RegionId::Software));
        assert_eq!(s.hovered, Some(RegionId::Software));

        let again = s.handle_mouse(&ev, hit, DIAGRAM, &mut tracker);
        assert_eq!(again, MouseResult::Deselected(RegionId::Software.index()));
        assert_eq!(s.pinned, None);
    }

    #[test]
    fn mouse_motion_reports_hover_changes() {
        let mut s = SelectionState::new();
        let mut tracker = PointerTracker::new();
        let ev = MouseEvent::new(MouseEventKind::Moved, 1, 1);
        let hit = Some((DIAGRAM, HitRegion::Content, RegionId::MachineLearning.index() as u64));
        assert_eq!(
            s.handle_mouse(&ev, hit, DIAGRAM, &mut tracker),
            MouseResult::HoverChanged
        );
        assert_eq!(s.handle_mouse(&ev, hit, DIAGRAM, &mut tracker), MouseResult::Ignored);
        assert_eq!(
            s.handle_mouse(&ev, None, DIAGRAM, &mut tracker),
            MouseResult::HoverChanged
        );
        assert_eq!(s.active_region(), None);
    }

    #[cfg(feature = "tracing")]
    #[derive(Default)]
    struct SelectTrace {
        ops: Vec<String>,
    }

    #[cfg(feature = "tracing")]
    struct SelectCapture {
        state: Arc<Mutex<SelectTrace>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> Layer<S> for SelectCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            #[derive(Default)]
            struct Fields {
                message: Option<String>,
                op: Option<String>,
            }
            impl tracing::field::Visit for Fields {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    match field.name() {
                        "message" => self.message = Some(value.to_string()),
                        "op" => self.op = Some(value.to_string()),
                        _ => {}
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                    }
                }
            }
            let mut fields = Fields::default();
            event.record(&mut fields);
            if fields.message.as_deref() == Some("venn.select")
                && let Some(op) = fields.op
            {
                self.state.lock().expect("select trace lock").ops.push(op);
            }
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn transitions_emit_select_events() {
        let state = Arc::new(Mutex::new(SelectTrace::default()));
        let subscriber = tracing_subscriber::registry().with(SelectCapture {
            state: Arc::clone(&state),
        });
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut s = SelectionState::new();
        s.on_pointer_enter(RegionId::Software);
        s.on_click(RegionId::Software);
        s.on_pointer_leave(RegionId::Software);

        let snapshot = state.lock().expect("select trace lock");
        assert_eq!(snapshot.ops, vec!["enter", "click", "leave"]);
    }
}
