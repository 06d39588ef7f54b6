//! Headless snapshot mode: one frame as plain text.

use academy::{RegionId, SelectionState, Theme};
use academy_harness::{buffer_to_text, compute_buffer_checksum, run_script};

use crate::app::AcademyApp;
use crate::error::{CliError, Result};

/// Resolve a region slug, listing the valid ones on failure.
pub fn parse_region(slug: &str) -> Result<RegionId> {
    slug.parse().map_err(|_| CliError::UnknownRegion {
        slug: slug.to_owned(),
        expected: RegionId::ALL.map(RegionId::slug).join(", "),
    })
}

/// Build the selection described by `--hover` / `--pin`.
pub fn selection_from_args(hover: Option<&str>, pin: Option<&str>) -> Result<SelectionState> {
    let mut selection = SelectionState::new();
    if let Some(slug) = hover {
        selection.on_pointer_enter(parse_region(slug)?);
    }
    if let Some(slug) = pin {
        selection.on_click(parse_region(slug)?);
    }
    Ok(selection)
}

/// Render the explorer once at `width` x `height` and dump it as text.
pub fn render_snapshot(
    theme: Theme,
    selection: SelectionState,
    width: u16,
    height: u16,
) -> Result<String> {
    let app = AcademyApp::new(theme).with_selection(selection);
    let (_, backend) = run_script(app, width, height, [])?;
    let screen = backend.screen();
    tracing::info!(
        width,
        height,
        active = selection.active_region().map(RegionId::slug),
        checksum = %compute_buffer_checksum(screen),
        "snapshot rendered"
    );
    Ok(buffer_to_text(screen))
}
