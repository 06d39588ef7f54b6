#![forbid(unsafe_code)]

//! Golden output helpers: text dumps, BLAKE3 checksums and golden files.
//!
//! A golden file lists one checksum per presented frame:
//!
//! ```text
//! # Golden checksums - do not edit manually
//! blake3:4f1c...
//! blake3:9a07...
//! ```
//!
//! Set `BLESS=1` to rewrite golden files from the current output.

use std::fs;
use std::path::{Path, PathBuf};

use academy_render::buffer::Buffer;

/// Checksum prefix for clarity in logs.
const CHECKSUM_PREFIX: &str = "blake3:";

/// Render a buffer as plain text, one line per row.
///
/// Empty cells become spaces and trailing spaces are trimmed.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let mut out = String::with_capacity((usize::from(buf.width()) + 1) * usize::from(buf.height()));
    for y in 0..buf.height() {
        let line: String = (0..buf.width())
            .map(|x| {
                buf.get(x, y)
                    .and_then(|cell| cell.content.as_char())
                    .unwrap_or(' ')
            })
            .collect();
        out.push_str(line.trim_end());
        if y + 1 < buf.height() {
            out.push('\n');
        }
    }
    out
}

/// BLAKE3 checksum of a buffer: dimensions, glyphs, colors and attributes.
///
/// Returns a hex string prefixed with `blake3:`.
pub fn compute_buffer_checksum(buf: &Buffer) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&buf.width().to_le_bytes());
    hasher.update(&buf.height().to_le_bytes());
    for cell in buf.cells() {
        let glyph = cell.content.as_char().map_or(0, u32::from);
        hasher.update(&glyph.to_le_bytes());
        hasher.update(&cell.fg.0.to_le_bytes());
        hasher.update(&cell.bg.0.to_le_bytes());
        hasher.update(&[cell.attrs.bits()]);
    }
    format!("{CHECKSUM_PREFIX}{}", hasher.finalize().to_hex())
}

/// BLAKE3 checksum of a text dump.
pub fn compute_text_checksum(text: &str) -> String {
    format!("{CHECKSUM_PREFIX}{}", blake3::hash(text.as_bytes()).to_hex())
}

/// Path to the golden checksum file for a scenario.
pub fn golden_checksum_path(base_dir: &Path, scenario_name: &str) -> PathBuf {
    base_dir
        .join("tests")
        .join("golden")
        .join(format!("{scenario_name}.checksums"))
}

/// Load expected checksums. A missing file yields an empty list.
pub fn load_golden_checksums(path: &Path) -> std::io::Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Save checksums to a golden file.
pub fn save_golden_checksums(path: &Path, checksums: &[String]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = format!(
        "# Golden checksums - do not edit manually\n{}\n",
        checksums.join("\n")
    );
    fs::write(path, content)
}

/// Check if we should update golden files (BLESS mode).
pub fn is_bless_mode() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Outcome of comparing checksums against a golden list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenOutcome {
    Pass,
    /// No golden list recorded yet.
    Missing,
    /// Frame counts differ.
    CountMismatch,
    /// First differing frame.
    Mismatch(usize),
}

/// Compare actual checksums with expected ones.
pub fn verify_checksums(actual: &[String], expected: &[String]) -> GoldenOutcome {
    if expected.is_empty() {
        return GoldenOutcome::Missing;
    }
    if actual.len() != expected.len() {
        return GoldenOutcome::CountMismatch;
    }
    actual
        .iter()
        .zip(expected)
        .position(|(a, e)| a != e)
        .map_or(GoldenOutcome::Pass, GoldenOutcome::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_render::cell::{Cell, PackedRgba};

    #[test]
    fn text_dump_trims_and_joins_rows() {
        let mut buf = Buffer::new(4, 2);
        buf.set_raw(0, 0, Cell::from_char('a'));
        buf.set_raw(2, 0, Cell::from_char('b'));
        buf.set_raw(3, 1, Cell::from_char('c'));
        assert_eq!(buffer_to_text(&buf), "a b\n   c");
    }

    #[test]
    fn checksum_sees_colors() {
        let plain = Buffer::new(2, 1);
        let mut tinted = Buffer::new(2, 1);
        tinted.set_raw(0, 0, Cell::default().with_bg(PackedRgba::rgb(1, 2, 3)));
        assert_ne!(compute_buffer_checksum(&plain), compute_buffer_checksum(&tinted));
        assert_eq!(compute_buffer_checksum(&plain), compute_buffer_checksum(&Buffer::new(2, 1)));
        assert!(compute_buffer_checksum(&plain).starts_with(CHECKSUM_PREFIX));
    }

    #[test]
    fn checksum_sees_dimensions() {
        assert_ne!(
            compute_buffer_checksum(&Buffer::new(2, 3)),
            compute_buffer_checksum(&Buffer::new(3, 2))
        );
    }

    #[test]
    fn text_checksum_is_stable() {
        assert_eq!(compute_text_checksum("venn"), compute_text_checksum("venn"));
        assert_ne!(compute_text_checksum("venn"), compute_text_checksum("Venn"));
    }

    #[test]
    fn verify_outcomes() {
        let a = vec!["x".to_string(), "y".to_string()];
        assert_eq!(verify_checksums(&a, &[]), GoldenOutcome::Missing);
        assert_eq!(verify_checksums(&a, &a[..1]), GoldenOutcome::CountMismatch);
        assert_eq!(verify_checksums(&a, &a), GoldenOutcome::Pass);
        let b = vec!["x".to_string(), "z".to_string()];
        assert_eq!(verify_checksums(&a, &b), GoldenOutcome::Mismatch(1));
    }

    #[test]
    fn golden_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = golden_checksum_path(dir.path(), "scenario");
        assert!(load_golden_checksums(&path).unwrap().is_empty());
        let sums = vec![compute_text_checksum("a"), compute_text_checksum("b")];
        save_golden_checksums(&path, &sums).unwrap();
        assert_eq!(load_golden_checksums(&path).unwrap(), sums);
    }
}
