#![forbid(unsafe_code)]

//! Pointer enter/leave synthesis.
//!
//! Terminals report mouse motion and button presses, not enter/leave. The
//! [`PointerTracker`] remembers which region the pointer was last over and
//! turns each mouse event into the signals a pointer-driven UI expects:
//!
//! - moving from region `a` to region `b` yields `Leave(a)`, `Enter(b)`;
//! - moving off every region yields `Leave(a)`;
//! - a left-button press on a region yields `Click(r)` after any
//!   enter/leave caused by the same event.

use academy_core::event::{MouseButton, MouseEvent, MouseEventKind};
use academy_render::frame::{HitData, HitId, HitRegion};

use crate::region::RegionId;

/// A pointer transition on one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSignal {
    Enter(RegionId),
    Leave(RegionId),
    Click(RegionId),
}

/// Tracks the region currently under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    current: Option<RegionId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The region the pointer was last seen over.
    pub fn current(&self) -> Option<RegionId> {
        self.current
    }

    /// Region targeted by a hit, if it belongs to the diagram `expected_id`.
    ///
    /// Hit data convention: `data = RegionId::index()`.
    pub fn region_from_hit(
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
    ) -> Option<RegionId> {
        match hit {
            Some((id, HitRegion::Content, data)) if id == expected_id => {
                usize::try_from(data).ok().and_then(RegionId::from_index)
            }
            _ => None,
        }
    }

    /// Feed one mouse event and the hit under it.
    pub fn track(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
    ) -> Vec<PointerSignal> {
        let target = Self::region_from_hit(hit, expected_id);
        let mut signals = self.move_to(target);
        if let (MouseEventKind::Down(MouseButton::Left), Some(region)) = (event.kind, target) {
            signals.push(PointerSignal::Click(region));
        }
        signals
    }

    /// The pointer left the diagram without a motion event (focus lost,
    /// resize). Yields `Leave` for the tracked region, if any.
    pub fn reset(&mut self) -> Option<PointerSignal> {
        self.current.take().map(PointerSignal::Leave)
    }

    fn move_to(&mut self, target: Option<RegionId>) -> Vec<PointerSignal> {
        if target == self.current {
            return Vec::new();
        }
        let mut signals = Vec::with_capacity(3);
        if let Some(old) = self.current {
            signals.push(PointerSignal::Leave(old));
        }
        if let Some(new) = target {
            signals.push(PointerSignal::Enter(new));
        }
        self.current = target;
        signals
    }
}
