#![forbid(unsafe_code)]

//! Academy diagram UI public facade.
//!
//! Re-exports the common types from the internal crates, defines the
//! top-level [`Error`], and offers [`App`] to run a model on the terminal
//! (with the `crossterm` feature).

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use academy_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use academy_core::geometry::{Rect, Sides};

// --- Render re-exports -----------------------------------------------------

pub use academy_render::buffer::Buffer;
pub use academy_render::cell::{Cell, PackedRgba, StyleFlags};
pub use academy_render::diff::BufferDiff;
pub use academy_render::frame::{Frame, HitId, HitRegion};

// --- Style re-exports ------------------------------------------------------

pub use academy_style::{Accent, InteractionState, InteractiveStyle, Style, Theme};

// --- Runtime re-exports ----------------------------------------------------

pub use academy_runtime::{AcademyConfig, Backend, Cmd, ConfigError, Model, Program, ProgramConfig};

// --- Widget re-exports -----------------------------------------------------

pub use academy_widgets::detail_panel::{DetailPanel, PanelContent};
pub use academy_widgets::hover::PointerTracker;
pub use academy_widgets::mouse::MouseResult;
pub use academy_widgets::region::{BaseSet, CoverageSet, RegionDescriptor, RegionId, lookup};
pub use academy_widgets::selection::SelectionState;
pub use academy_widgets::venn::{Emphasis, VennDiagram, VennLayout, layout};
pub use academy_widgets::{StatefulWidget, Widget};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Academy apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// Terminal or runtime error with message.
    Terminal(String),
    /// Configuration could not be loaded or failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Terminal(msg) => write!(f, "{msg}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Terminal(_) => None,
            Self::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for Academy APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- App facade -----------------------------------------------------------

/// Builder for running a model on the terminal.
pub struct App<M> {
    model: M,
    config: ProgramConfig,
}

impl<M: Model> App<M> {
    /// Create a new application with the default program configuration.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            config: ProgramConfig::default(),
        }
    }

    /// Replace the program configuration.
    #[must_use]
    pub fn config(mut self, config: ProgramConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the model on any backend until it quits, returning the model.
    pub fn run_with<B: Backend>(self, backend: B) -> Result<M> {
        let mut program = Program::new(self.model, backend, self.config)?;
        program.run()?;
        Ok(program.into_parts().0)
    }

    /// Run on the real terminal until the model quits, returning the model.
    #[cfg(feature = "crossterm")]
    pub fn run(self) -> Result<M> {
        let backend = academy_runtime::TerminalBackend::new(&self.config)
            .map_err(|err| Error::Terminal(format!("terminal setup failed: {err}")))?;
        self.run_with(backend)
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        App, Buffer, Cmd, Error, Event, Frame, KeyCode, KeyEvent, Model, Modifiers, MouseEvent,
        ProgramConfig, Rect, RegionId, Result, SelectionState, Style, Theme,
    };

    pub use crate::{core, layout, render, runtime, style, widgets};
}

pub use academy_core as core;
pub use academy_layout as layout;
pub use academy_render as render;
pub use academy_runtime as runtime;
pub use academy_style as style;
pub use academy_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::error::Error as _;
    use std::time::Duration;

    struct Script(VecDeque<Event>);

    impl Backend for Script {
        fn size(&self) -> std::io::Result<(u16, u16)> {
            Ok((4, 2))
        }

        fn poll_event(&mut self, _timeout: Duration) -> std::io::Result<Option<Event>> {
            Ok(self.0.pop_front())
        }

        fn present(&mut self, _buffer: &Buffer, _diff: &BufferDiff) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct Clicks {
        state: SelectionState,
    }

    enum Msg {
        Click(RegionId),
        Quit,
        Ignore,
    }

    impl From<Event> for Msg {
        fn from(event: Event) -> Self {
            match event {
                Event::Key(k) if k.is_char('q') => Msg::Quit,
                Event::Key(KeyEvent {
                    code: KeyCode::Char(c),
                    ..
                }) => c
                    .to_digit(10)
                    .and_then(|d| RegionId::from_index((d as usize).wrapping_sub(1)))
                    .map_or(Msg::Ignore, Msg::Click),
                _ => Msg::Ignore,
            }
        }
    }

    impl Model for Clicks {
        type Message = Msg;

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Click(r) => {
                    self.state.on_click(r);
                    Cmd::none()
                }
                Msg::Quit => Cmd::quit(),
                Msg::Ignore => Cmd::none(),
            }
        }

        fn view(&self, _frame: &mut Frame) {}
    }

    #[test]
    fn app_runs_on_a_scripted_backend() {
        let keys = ['2', '4', '4', '3', 'q']
            .into_iter()
            .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c))))
            .collect();
        let model = App::new(Clicks {
            state: SelectionState::new(),
        })
        .config(ProgramConfig::default().with_poll_timeout(Duration::ZERO))
        .run_with(Script(keys))
        .unwrap();
        assert_eq!(model.state.pinned, Some(RegionId::MachineLearning));
    }

    #[test]
    fn errors_convert_and_display() {
        let io: Error = std::io::Error::other("tty gone").into();
        assert_eq!(io.to_string(), "tty gone");
        assert!(io.source().is_some());

        let config: Error = ConfigError::Validation(vec!["a".into(), "b".into()]).into();
        assert_eq!(config.to_string(), "invalid config: a; b");
        assert!(matches!(config, Error::Config(_)));

        assert!(Error::Terminal("x".into()).source().is_none());
    }
}
