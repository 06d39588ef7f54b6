#![forbid(unsafe_code)]

//! Academy runtime
//!
//! Ties the core, render and style crates into a running terminal program.
//!
//! # Key Components
//!
//! - [`Program`] - Elm-style update/view loop
//! - [`Model`] - Trait for application state and behavior
//! - [`Cmd`] - Commands for side effects
//! - [`Backend`] - Where events come from and frames go to
//! - [`AcademyConfig`] - TOML configuration for the program, theme and logging
//!
//! # How it fits in the system
//! The runtime reads events from a [`Backend`], feeds them to the model's
//! `update`, calls `view` to draw a fresh [`Frame`](academy_render::frame::Frame)
//! with a hit grid, diffs it against the previous frame and presents the
//! changes. The hit grid of the last presented frame is handed back to the
//! model when mouse events are translated, so widgets can resolve pointer
//! positions to the targets they registered.

pub mod backend;
pub mod config;
pub mod program;

pub use backend::Backend;
#[cfg(feature = "crossterm")]
pub use backend::TerminalBackend;
pub use config::{AcademyConfig, ConfigError, LoggingConfig, ProgramSection, ThemeSection};
pub use program::{Cmd, Model, Program, ProgramConfig};
