#![forbid(unsafe_code)]

//! Test harness for the Academy diagram UI.
//!
//! - [`headless::HeadlessBackend`] runs a [`Program`](academy_runtime::Program)
//!   against scripted events and keeps what a terminal would show.
//! - [`golden`] turns buffers into plain text and BLAKE3 checksums, and
//!   compares checksum lists against golden files.

pub mod golden;
pub mod headless;

pub use golden::{buffer_to_text, compute_buffer_checksum};
pub use headless::{HeadlessBackend, run_script};
