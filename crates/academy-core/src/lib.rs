#![forbid(unsafe_code)]

//! Core: events, geometry, and terminal lifecycle.
//!
//! # Role in the workspace
//! `academy-core` is the input layer. It owns the normalized event types that
//! the runtime consumes, the rectangle primitives every other crate lays out
//! with, and (behind the `crossterm` feature) the terminal session that puts
//! the terminal into raw mode with mouse capture.
//!
//! # How it fits in the system
//! The runtime (`academy-runtime`) reads [`event::Event`] values and hands them
//! to the application model. The render kernel (`academy-render`) only needs
//! [`geometry::Rect`], so input and output stay decoupled.

pub mod event;
pub mod geometry;

#[cfg(feature = "crossterm")]
pub mod terminal_session;
