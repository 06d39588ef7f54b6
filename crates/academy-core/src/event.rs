#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the event types the runtime hands to application
//! models. All events derive `Clone`, `PartialEq`, and `Eq` for use in tests
//! and pattern matching.
//!
//! # Design Notes
//!
//! - Mouse coordinates are 0-indexed (terminal is 1-indexed internally)
//! - `KeyEventKind` defaults to `Press` when not available from the terminal
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A mouse event.
    Mouse(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Keys the explorer reacts to. Other keys never reach the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character (`q`, digits).
    Char(char),
    Escape,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key or mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of mouse event.
    pub kind: MouseEventKind,

    /// X coordinate (0-indexed, leftmost column is 0).
    pub x: u16,

    /// Y coordinate (0-indexed, topmost row is 0).
    pub y: u16,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a mouse event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether this event reports pointer motion (with or without a button held).
    #[must_use]
    pub const fn is_motion(&self) -> bool {
        matches!(self.kind, MouseEventKind::Moved | MouseEventKind::Drag(_))
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),
    /// Mouse button released.
    Up(MouseButton),
    /// Mouse dragged while button held.
    Drag(MouseButton),
    /// Mouse moved (no button pressed).
    Moved,
    /// Mouse wheel scrolled up.
    ScrollUp,
    /// Mouse wheel scrolled down.
    ScrollDown,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

// ---------------------------------------------------------------------------
// Crossterm conversion
// ---------------------------------------------------------------------------

#[cfg(feature = "crossterm")]
impl Event {
    /// Convert a Crossterm event into a canonical event.
    ///
    /// Returns `None` for events the UI does not consume (paste, key codes
    /// without a canonical mapping, horizontal scroll).
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event as ct;

        match event {
            ct::Event::Key(key) => {
                let code = match key.code {
                    ct::KeyCode::Char(c) => KeyCode::Char(c),
                    ct::KeyCode::Esc => KeyCode::Escape,
                    _ => return None,
                };
                let kind = match key.kind {
                    ct::KeyEventKind::Press => KeyEventKind::Press,
                    ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
                    ct::KeyEventKind::Release => KeyEventKind::Release,
                };
                Some(Self::Key(KeyEvent {
                    code,
                    modifiers: modifiers_from_crossterm(key.modifiers),
                    kind,
                }))
            }
            ct::Event::Mouse(mouse) => {
                let kind = match mouse.kind {
                    ct::MouseEventKind::Down(b) => MouseEventKind::Down(button_from_crossterm(b)),
                    ct::MouseEventKind::Up(b) => MouseEventKind::Up(button_from_crossterm(b)),
                    ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(button_from_crossterm(b)),
                    ct::MouseEventKind::Moved => MouseEventKind::Moved,
                    ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
                    ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
                    _ => return None,
                };
                Some(Self::Mouse(
                    MouseEvent::new(kind, mouse.column, mouse.row)
                        .with_modifiers(modifiers_from_crossterm(mouse.modifiers)),
                ))
            }
            ct::Event::Resize(width, height) => Some(Self::Resize { width, height }),
            ct::Event::FocusGained => Some(Self::Focus(true)),
            ct::Event::FocusLost => Some(Self::Focus(false)),
            _ => None,
        }
    }
}

#[cfg(feature = "crossterm")]
fn modifiers_from_crossterm(mods: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;

    let mut out = Modifiers::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if mods.contains(KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if mods.contains(KeyModifiers::SUPER) {
        out |= Modifiers::SUPER;
    }
    out
}

#[cfg(feature = "crossterm")]
fn button_from_crossterm(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_is_char() {
        let event = KeyEvent::new(KeyCode::Char('q'));
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn key_event_modifiers() {
        let event = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert!(event.ctrl());
        assert!(!KeyEvent::new(KeyCode::Char('c')).ctrl());
    }

    #[test]
    fn key_event_kind() {
        let press = KeyEvent::new(KeyCode::Escape);
        assert_eq!(press.kind, KeyEventKind::Press);

        let release = press.with_kind(KeyEventKind::Release);
        assert_eq!(release.kind, KeyEventKind::Release);
    }

    #[test]
    fn mouse_event_coordinates() {
        let event = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 10, 20);
        assert_eq!((event.x, event.y), (10, 20));
        assert!(!event.is_motion());
    }

    #[test]
    fn mouse_motion_kinds() {
        assert!(MouseEvent::new(MouseEventKind::Moved, 0, 0).is_motion());
        assert!(MouseEvent::new(MouseEventKind::Drag(MouseButton::Left), 0, 0).is_motion());
        assert!(!MouseEvent::new(MouseEventKind::ScrollUp, 0, 0).is_motion());
    }

    #[test]
    fn modifiers_default() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[cfg(feature = "crossterm")]
    #[test]
    fn crossterm_mouse_maps_to_canonical() {
        use crossterm::event as ct;
        let raw = ct::Event::Mouse(ct::MouseEvent {
            kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: ct::KeyModifiers::CONTROL,
        });
        let event = Event::from_crossterm(raw).expect("mouse maps");
        assert_eq!(
            event,
            Event::Mouse(
                MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 7, 3)
                    .with_modifiers(Modifiers::CTRL)
            )
        );
    }

    #[cfg(feature = "crossterm")]
    #[test]
    fn crossterm_keys_outside_the_explorer_are_dropped() {
        use crossterm::event as ct;
        let key = |code| ct::Event::Key(ct::KeyEvent::new(code, ct::KeyModifiers::NONE));
        assert_eq!(Event::from_crossterm(key(ct::KeyCode::Enter)), None);
        assert_eq!(Event::from_crossterm(key(ct::KeyCode::Up)), None);
        assert_eq!(
            Event::from_crossterm(key(ct::KeyCode::Esc)),
            Some(Event::Key(KeyEvent::new(KeyCode::Escape)))
        );
    }

    #[cfg(feature = "crossterm")]
    #[test]
    fn crossterm_resize_and_focus_map() {
        use crossterm::event as ct;
        assert_eq!(
            Event::from_crossterm(ct::Event::Resize(100, 40)),
            Some(Event::Resize {
                width: 100,
                height: 40
            })
        );
        assert_eq!(
            Event::from_crossterm(ct::Event::FocusLost),
            Some(Event::Focus(false))
        );
    }
}
