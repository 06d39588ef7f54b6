#![forbid(unsafe_code)]

//! `academy-venn`: explore how Infrastructure, Software and Machine Learning
//! engineering overlap.
//!
//! # Running
//!
//! ```sh
//! cargo run -p academy-demo
//! cargo run -p academy-demo -- --snapshot --pin infrastructure-software
//! ```
//!
//! # Controls
//!
//! - Mouse: hover a region to preview it, click to pin, click again to release
//! - 1-7: pin a region by catalog position
//! - Esc: release the pin
//! - q / Ctrl+C: quit

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod snapshot;

pub use cli::{Cli, run, run_from_env};
pub use error::{CliError, Result};
