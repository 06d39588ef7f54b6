#![forbid(unsafe_code)]

//! Elm-style runtime for terminal applications.
//!
//! The program runtime manages the update/view loop, handling events and
//! rendering frames. It separates state (Model) from rendering (View) and
//! provides a command pattern for side effects.
//!
//! # Example
//!
//! ```ignore
//! use academy_core::event::Event;
//! use academy_render::frame::Frame;
//! use academy_runtime::program::{Cmd, Model};
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//!     Ignore,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             Event::Key(k) if k.is_char('+') => Msg::Increment,
//!             _ => Msg::Ignore,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
//!         match msg {
//!             Msg::Increment => { self.count += 1; Cmd::none() }
//!             Msg::Quit => Cmd::quit(),
//!             Msg::Ignore => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         // Render counter value to frame
//!     }
//! }
//! ```

use std::io;
use std::time::Duration;

use academy_core::event::Event;
use academy_render::diff::BufferDiff;
use academy_render::frame::Frame;
use web_time::Instant;

use crate::backend::Backend;

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Must be convertible from terminal events.
    type Message: From<Event>;

    /// Initialize the model with startup commands.
    ///
    /// Called once before the first frame.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    ///
    /// The frame always carries a hit grid; widgets register their targets
    /// there.
    fn view(&self, frame: &mut Frame);

    /// Translate an event into a message.
    ///
    /// `last_frame` is the most recently presented frame. Mouse coordinates
    /// resolve against its hit grid, which matches what is on screen.
    fn translate(&self, event: Event, last_frame: &Frame) -> Self::Message {
        let _ = last_frame;
        Self::Message::from(event)
    }
}

/// Commands represent side effects to be executed by the runtime.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Write a line to the application log.
    ///
    /// The terminal belongs to the UI, so log lines go through `tracing`
    /// and end up wherever the subscriber writes them.
    Log(String),
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch of commands, collapsing trivial batches.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Self::None))
            .collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    /// True for [`Cmd::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// Configuration for the program runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    /// Run on the alternate screen.
    pub alternate_screen: bool,
    /// Enable mouse capture (buttons and motion).
    pub mouse: bool,
    /// Input poll timeout.
    pub poll_timeout: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse: true,
            poll_timeout: Duration::from_millis(100),
        }
    }
}

impl ProgramConfig {
    /// Set mouse support.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    /// Set the alternate screen mode.
    pub fn with_alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    /// Set the input poll timeout.
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }
}

/// The program runtime that manages the update/view loop.
pub struct Program<M: Model, B: Backend> {
    /// The application model.
    model: M,
    /// Event source and presenter.
    backend: B,
    config: ProgramConfig,
    /// Whether the program is running.
    running: bool,
    /// Whether the UI needs to be redrawn.
    dirty: bool,
    /// Next present repaints every cell (first frame, after resize).
    full_repaint: bool,
    /// Last presented frame, kept for diffing and hit testing.
    prev_frame: Frame,
    frames_presented: u64,
}

impl<M: Model, B: Backend> Program<M, B> {
    /// Create a program sized to the backend's current surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot report its size.
    pub fn new(model: M, backend: B, config: ProgramConfig) -> io::Result<Self> {
        let (width, height) = backend.size()?;
        Ok(Self {
            model,
            backend,
            config,
            running: true,
            dirty: true,
            full_repaint: true,
            prev_frame: Frame::with_hit_grid(width, height),
            frames_presented: 0,
        })
    }

    /// Run the main event loop until the model quits.
    ///
    /// 1. Initialization and first frame
    /// 2. Event polling and message dispatch
    /// 3. Frame rendering when something changed
    pub fn run(&mut self) -> io::Result<()> {
        self.start()?;
        while self.running {
            self.step()?;
        }
        tracing::info!(frames = self.frames_presented, "program quit");
        Ok(())
    }

    /// Initialize the model and present the first frame.
    pub fn start(&mut self) -> io::Result<()> {
        tracing::info!(
            width = self.prev_frame.width(),
            height = self.prev_frame.height(),
            mouse = self.config.mouse,
            "program start"
        );
        let cmd = self.model.init();
        self.execute_cmd(cmd);
        self.render_frame()
    }

    /// Wait for one event (up to the poll timeout), dispatch it and redraw
    /// if needed.
    pub fn step(&mut self) -> io::Result<()> {
        if let Some(event) = self.backend.poll_event(self.config.poll_timeout)? {
            self.dispatch(event);
        }
        if self.running && self.dirty {
            self.render_frame()?;
        }
        Ok(())
    }

    /// Feed one event to the model without rendering.
    pub fn dispatch(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            self.resize(width, height);
        }
        let msg = self.model.translate(event, &self.prev_frame);
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "program resize");
        self.prev_frame = Frame::with_hit_grid(width, height);
        self.full_repaint = true;
    }

    /// Execute a command.
    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.dirty = true;
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Log(text) => {
                tracing::info!(target: "academy::app", "{text}");
            }
        }
    }

    /// Render the model into a fresh frame and present the difference.
    pub fn render_frame(&mut self) -> io::Result<()> {
        let start = Instant::now();
        let mut frame = Frame::with_hit_grid(self.prev_frame.width(), self.prev_frame.height());
        self.model.view(&mut frame);

        let diff = if self.full_repaint {
            BufferDiff::full(&frame.buffer)
        } else {
            BufferDiff::compute(&self.prev_frame.buffer, &frame.buffer)
        };
        if self.full_repaint || !diff.is_empty() {
            self.backend.present(&frame.buffer, &diff)?;
            self.frames_presented += 1;
        }
        tracing::debug!(
            message = "program.render",
            changed = diff.len(),
            full = self.full_repaint,
            render_duration_us = start.elapsed().as_micros() as u64,
        );

        self.prev_frame = frame;
        self.full_repaint = false;
        self.dirty = false;
        Ok(())
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Get a reference to the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The last presented frame.
    pub fn last_frame(&self) -> &Frame {
        &self.prev_frame
    }

    /// Number of frames handed to the backend.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Check if the program is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request a quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Mark the UI as needing redraw.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Consume the program, returning the model and the backend.
    pub fn into_parts(self) -> (M, B) {
        (self.model, self.backend)
    }
}
