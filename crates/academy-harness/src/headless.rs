#![forbid(unsafe_code)]

//! Headless backend: scripted input, emulated screen.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use academy_core::event::Event;
use academy_render::buffer::Buffer;
use academy_render::diff::BufferDiff;
use academy_runtime::{Backend, Model, Program, ProgramConfig};

/// A backend with no terminal behind it.
///
/// Events are served from a queue. Presented diffs are applied to an
/// emulated screen the way a terminal would apply them, and every presented
/// screen state is recorded.
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    width: u16,
    height: u16,
    events: VecDeque<Event>,
    screen: Buffer,
    frames: Vec<Buffer>,
}

impl HeadlessBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            events: VecDeque::new(),
            screen: Buffer::new(width, height),
            frames: Vec::new(),
        }
    }

    /// Queue events to be returned by `poll_event`, in order.
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Events not yet consumed.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// What the emulated terminal currently shows.
    pub fn screen(&self) -> &Buffer {
        &self.screen
    }

    /// Screen state after each present, oldest first.
    pub fn frames(&self) -> &[Buffer] {
        &self.frames
    }
}

impl Backend for HeadlessBackend {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn poll_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        let event = self.events.pop_front();
        if let Some(Event::Resize { width, height }) = event {
            self.width = width;
            self.height = height;
        }
        Ok(event)
    }

    fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
        if self.screen.width() != buffer.width() || self.screen.height() != buffer.height() {
            self.screen = Buffer::new(buffer.width(), buffer.height());
        }
        for (x, y) in diff.iter() {
            if let Some(cell) = buffer.get(x, y) {
                self.screen.set_raw(x, y, *cell);
            }
        }
        self.frames.push(self.screen.clone());
        tracing::trace!(frame = self.frames.len(), changed = diff.len(), "headless present");
        Ok(())
    }
}

/// Run `model` headlessly until the script is exhausted or it quits.
///
/// Returns the model and the backend so callers can inspect both.
pub fn run_script<M: Model>(
    model: M,
    width: u16,
    height: u16,
    events: impl IntoIterator<Item = Event>,
) -> io::Result<(M, HeadlessBackend)> {
    let backend = HeadlessBackend::new(width, height).with_events(events);
    let config = ProgramConfig::default().with_poll_timeout(Duration::ZERO);
    let mut program = Program::new(model, backend, config)?;
    program.start()?;
    while program.is_running() && program.backend().pending() > 0 {
        program.step()?;
    }
    Ok(program.into_parts())
}
