use std::path::PathBuf;

use academy::AcademyConfig;
use clap::Parser;

use crate::app::AcademyApp;
use crate::error::{CliError, Result};
use crate::logging::{LogSink, init_logging};
use crate::snapshot::{render_snapshot, selection_from_args};

#[derive(Debug, Parser)]
#[command(
    name = "academy-venn",
    about = "Explore how Infrastructure, Software and Machine Learning engineering overlap",
    version
)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file. Interactive mode logs nothing without it.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Render one frame as plain text to stdout and exit.
    #[arg(long)]
    pub snapshot: bool,

    /// Region slug under the pointer (snapshot mode).
    #[arg(long, value_name = "SLUG")]
    pub hover: Option<String>,

    /// Region slug to pin (snapshot mode).
    #[arg(long, value_name = "SLUG")]
    pub pin: Option<String>,

    /// Snapshot width in columns.
    #[arg(long, default_value_t = 100)]
    pub width: u16,

    /// Snapshot height in rows.
    #[arg(long, default_value_t = 32)]
    pub height: u16,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AcademyConfig::from_toml_file(path)?,
        None => AcademyConfig::default(),
    };

    if cli.snapshot {
        if cli.width == 0 || cli.height == 0 {
            return Err(CliError::invalid("--width and --height must be at least 1"));
        }
        let sink = cli.log_file.as_deref().map_or(LogSink::Stderr, LogSink::File);
        init_logging(&config.logging, sink)?;
        let selection = selection_from_args(cli.hover.as_deref(), cli.pin.as_deref())?;
        let text = render_snapshot(config.to_theme(), selection, cli.width, cli.height)?;
        println!("{text}");
        return Ok(());
    }

    if cli.hover.is_some() || cli.pin.is_some() {
        return Err(CliError::invalid("--hover and --pin require --snapshot"));
    }
    let sink = cli.log_file.as_deref().map_or(LogSink::Disabled, LogSink::File);
    init_logging(&config.logging, sink)?;

    let app = AcademyApp::new(config.to_theme());
    let app = academy::App::new(app)
        .config(config.to_program_config())
        .run()?;
    tracing::info!(pinned = ?app.selection().pinned, "explorer closed");
    Ok(())
}
