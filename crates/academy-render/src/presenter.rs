#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! Turns a [`BufferDiff`] into terminal output. The presenter remembers the
//! last emitted style and cursor position and skips SGR/CUP sequences that
//! would not change anything. Output is buffered and flushed once per frame.
//!
//! ```
//! use academy_render::buffer::Buffer;
//! use academy_render::cell::Cell;
//! use academy_render::diff::BufferDiff;
//! use academy_render::presenter::Presenter;
//!
//! let prev = Buffer::new(4, 1);
//! let mut next = Buffer::new(4, 1);
//! next.set_raw(0, 0, Cell::from_char('A'));
//!
//! let mut presenter = Presenter::new(Vec::new());
//! presenter.present(&next, &BufferDiff::compute(&prev, &next)).unwrap();
//! let bytes = presenter.into_inner().unwrap();
//! assert!(String::from_utf8_lossy(&bytes).contains('A'));
//! ```

use std::io::{self, BufWriter, Write};

use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};
use crate::diff::BufferDiff;

const BUFFER_CAPACITY: usize = 16 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

/// State-tracked ANSI presenter over any writer.
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    /// `None` means unknown (after a reset or at the end of a frame).
    current_style: Option<CellStyle>,
    cursor: Option<(u16, u16)>,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_style: None,
            cursor: None,
        }
    }

    /// Emit every changed cell of `buffer`, then reset style and flush.
    pub fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "present",
            width = buffer.width(),
            height = buffer.height(),
            changes = diff.len()
        )
        .entered();

        for run in diff.runs() {
            self.move_cursor_to(run.x0, run.y)?;
            for x in run.x0..=run.x1 {
                let Some(cell) = buffer.get(x, run.y) else {
                    continue;
                };
                self.emit_cell(cell)?;
            }
        }

        self.writer.write_all(b"\x1b[0m")?;
        self.current_style = None;
        self.writer.flush()
    }

    fn emit_cell(&mut self, cell: &Cell) -> io::Result<()> {
        self.emit_style_changes(cell)?;
        match cell.content.as_char() {
            Some(ch) => {
                let mut buf = [0u8; 4];
                self.writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            }
            None => self.writer.write_all(b" ")?,
        }
        if let Some((x, y)) = self.cursor {
            let width = cell.content.width() as u16;
            self.cursor = Some((x.saturating_add(width), y));
        }
        Ok(())
    }

    /// Reset-then-apply: simpler than incremental SGR and never leaks attributes.
    fn emit_style_changes(&mut self, cell: &Cell) -> io::Result<()> {
        let style = CellStyle::from_cell(cell);
        if self.current_style == Some(style) {
            return Ok(());
        }

        self.writer.write_all(b"\x1b[0m")?;
        if style.fg.a() > 0 {
            write!(
                self.writer,
                "\x1b[38;2;{};{};{}m",
                style.fg.r(),
                style.fg.g(),
                style.fg.b()
            )?;
        }
        if style.bg.a() > 0 {
            write!(
                self.writer,
                "\x1b[48;2;{};{};{}m",
                style.bg.r(),
                style.bg.g(),
                style.bg.b()
            )?;
        }
        for (flag, code) in [
            (StyleFlags::BOLD, 1),
            (StyleFlags::DIM, 2),
            (StyleFlags::ITALIC, 3),
            (StyleFlags::UNDERLINE, 4),
            (StyleFlags::REVERSE, 7),
        ] {
            if style.attrs.contains(flag) {
                write!(self.writer, "\x1b[{code}m")?;
            }
        }

        self.current_style = Some(style);
        Ok(())
    }

    fn move_cursor_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor == Some((x, y)) {
            return Ok(());
        }
        // CUP is 1-indexed
        write!(self.writer, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1)?;
        self.cursor = Some((x, y));
        Ok(())
    }

    /// Erase the display and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\x1b[2J\x1b[1;1H")?;
        self.cursor = Some((0, 0));
        self.writer.flush()
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\x1b[?25l")?;
        self.writer.flush()
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\x1b[?25h")?;
        self.writer.flush()
    }

    /// Forget tracked style and cursor, e.g. after a resize.
    pub fn reset(&mut self) {
        self.current_style = None;
        self.cursor = None;
    }

    /// Flush and return the inner writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(buffer: &Buffer, prev: &Buffer) -> String {
        let mut presenter = Presenter::new(Vec::new());
        presenter
            .present(buffer, &BufferDiff::compute(prev, buffer))
            .expect("present");
        String::from_utf8(presenter.into_inner().expect("into_inner")).expect("utf8")
    }

    #[test]
    fn empty_diff_only_resets() {
        let buf = Buffer::new(3, 3);
        assert_eq!(output_of(&buf, &buf), "\x1b[0m");
    }

    #[test]
    fn cursor_is_positioned_one_indexed() {
        let prev = Buffer::new(10, 10);
        let mut next = prev.clone();
        next.set_raw(4, 2, Cell::from_char('X'));
        let out = output_of(&next, &prev);
        assert!(out.contains("\x1b[3;5H"), "{out:?}");
        assert!(out.contains('X'));
    }

    #[test]
    fn shared_style_emitted_once() {
        let prev = Buffer::new(5, 1);
        let mut next = prev.clone();
        let fg = PackedRgba::rgb(255, 0, 0);
        for (x, ch) in [(0, 'A'), (1, 'B'), (2, 'C')] {
            next.set_raw(x, 0, Cell::from_char(ch).with_fg(fg));
        }
        let out = output_of(&next, &prev);
        assert_eq!(out.matches("\x1b[38;2;255;0;0m").count(), 1);
        assert!(out.contains("ABC"));
    }

    #[test]
    fn adjacent_run_needs_single_cursor_move() {
        let prev = Buffer::new(8, 1);
        let mut next = prev.clone();
        for x in 2..6 {
            next.set_raw(x, 0, Cell::from_char('-'));
        }
        let out = output_of(&next, &prev);
        assert_eq!(out.matches('H').count(), 1, "{out:?}");
    }

    #[test]
    fn transparent_background_is_not_emitted() {
        let prev = Buffer::new(1, 1);
        let mut next = prev.clone();
        next.set_raw(0, 0, Cell::from_char('a'));
        let out = output_of(&next, &prev);
        assert!(!out.contains("\x1b[48;2"));
    }

    #[test]
    fn attributes_map_to_sgr_codes() {
        let prev = Buffer::new(1, 1);
        let mut next = prev.clone();
        next.set_raw(
            0,
            0,
            Cell::from_char('b').with_attrs(StyleFlags::BOLD | StyleFlags::UNDERLINE),
        );
        let out = output_of(&next, &prev);
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("\x1b[4m"));
    }

    #[test]
    fn clear_screen_homes_cursor() {
        let mut presenter = Presenter::new(Vec::new());
        presenter.clear_screen().expect("clear");
        let bytes = presenter.into_inner().expect("into_inner");
        assert_eq!(bytes, b"\x1b[2J\x1b[1;1H");
    }
}
