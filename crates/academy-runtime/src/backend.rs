#![forbid(unsafe_code)]

//! Backend boundary: terminal size, input events and frame presentation.
//!
//! The [`Program`](crate::Program) is generic over [`Backend`] so the same
//! update/view loop drives a real terminal ([`TerminalBackend`], behind the
//! `crossterm` feature) and the headless backend used by snapshot mode and
//! tests.

use std::io;
use std::time::Duration;

use academy_core::event::Event;
use academy_render::buffer::Buffer;
use academy_render::diff::BufferDiff;

/// Event source and presenter for a running program.
pub trait Backend {
    /// Current surface dimensions (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Wait up to `timeout` for the next event.
    ///
    /// Returns `Ok(None)` when the timeout elapses without input.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;

    /// Present a rendered frame.
    ///
    /// `diff` lists the cells that changed since the previous present. It is
    /// a full diff for the first frame and after a resize.
    fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()>;
}

#[cfg(feature = "crossterm")]
pub use terminal::TerminalBackend;

#[cfg(feature = "crossterm")]
mod terminal {
    use std::io::{self, Stdout};
    use std::time::Duration;

    use academy_core::event::Event;
    use academy_core::terminal_session::{SessionOptions, TerminalSession};
    use academy_render::buffer::Buffer;
    use academy_render::diff::BufferDiff;
    use academy_render::presenter::Presenter;

    use super::Backend;
    use crate::program::ProgramConfig;

    /// Crossterm-backed terminal: raw mode, optional alternate screen and
    /// mouse capture, ANSI output through a [`Presenter`].
    ///
    /// Field order matters: the presenter is dropped (and flushed) before
    /// the session restores the terminal.
    pub struct TerminalBackend {
        presenter: Presenter<Stdout>,
        session: TerminalSession,
    }

    impl TerminalBackend {
        /// Enter raw mode with the modes requested by `config`.
        ///
        /// # Errors
        ///
        /// Returns an error if the terminal cannot be configured.
        pub fn new(config: &ProgramConfig) -> io::Result<Self> {
            let session = TerminalSession::new(SessionOptions {
                alternate_screen: config.alternate_screen,
                mouse_capture: config.mouse,
                focus_events: true,
            })?;
            let mut presenter = Presenter::new(io::stdout());
            presenter.hide_cursor()?;
            presenter.clear_screen()?;
            tracing::info!(
                alternate_screen = config.alternate_screen,
                mouse = session.mouse_capture_enabled(),
                "terminal backend ready"
            );
            Ok(Self { presenter, session })
        }
    }

    impl Backend for TerminalBackend {
        fn size(&self) -> io::Result<(u16, u16)> {
            self.session.size()
        }

        fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
            if self.session.poll_event(timeout)? {
                self.session.read_event()
            } else {
                Ok(None)
            }
        }

        fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
            self.presenter.present(buffer, diff)
        }
    }

    impl Drop for TerminalBackend {
        fn drop(&mut self) {
            let _ = self.presenter.show_cursor();
        }
    }
}
