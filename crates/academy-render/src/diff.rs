#![forbid(unsafe_code)]

//! Cell-level change detection between two buffers.
//!
//! The presenter only rewrites cells listed in a [`BufferDiff`]; consecutive
//! changes on one row are grouped into [`ChangeRun`]s so each run costs a
//! single cursor move.

use crate::buffer::Buffer;

/// A horizontal span of changed cells on one row (`x0..=x1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    pub y: u16,
    pub x0: u16,
    pub x1: u16,
}

/// Positions that differ between two buffers, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferDiff {
    changes: Vec<(u16, u16)>,
}

impl BufferDiff {
    /// Compare `old` and `new` cell by cell.
    ///
    /// When the dimensions differ every cell of `new` counts as changed.
    pub fn compute(old: &Buffer, new: &Buffer) -> Self {
        if old.width() != new.width() || old.height() != new.height() {
            return Self::full(new);
        }
        let width = new.width() as usize;
        let changes = old
            .cells()
            .iter()
            .zip(new.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| ((i % width) as u16, (i / width) as u16))
            .collect();
        Self { changes }
    }

    /// Every cell of `buffer`, for the first frame or after a resize.
    pub fn full(buffer: &Buffer) -> Self {
        let mut changes = Vec::with_capacity(buffer.cells().len());
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                changes.push((x, y));
            }
        }
        Self { changes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Changed `(x, y)` positions.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.changes.iter().copied()
    }

    /// Group changes into same-row runs of adjacent cells.
    pub fn runs(&self) -> Vec<ChangeRun> {
        let mut runs: Vec<ChangeRun> = Vec::new();
        for &(x, y) in &self.changes {
            match runs.last_mut() {
                Some(run) if run.y == y && run.x1.checked_add(1) == Some(x) => run.x1 = x,
                _ => runs.push(ChangeRun { y, x0: x, x1: x }),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn identical_buffers_have_no_changes() {
        let a = Buffer::new(5, 3);
        let b = Buffer::new(5, 3);
        assert!(BufferDiff::compute(&a, &b).is_empty());
    }

    #[test]
    fn changes_are_row_major() {
        let a = Buffer::new(4, 2);
        let mut b = a.clone();
        b.set_raw(3, 1, Cell::from_char('z'));
        b.set_raw(1, 0, Cell::from_char('y'));
        let diff = BufferDiff::compute(&a, &b);
        assert_eq!(diff.iter().collect::<Vec<_>>(), vec![(1, 0), (3, 1)]);
    }

    #[test]
    fn size_change_is_full_redraw() {
        let a = Buffer::new(2, 2);
        let b = Buffer::new(3, 2);
        assert_eq!(BufferDiff::compute(&a, &b).len(), 6);
    }

    #[test]
    fn runs_group_adjacent_cells() {
        let a = Buffer::new(6, 2);
        let mut b = a.clone();
        for x in [0, 1, 2, 4] {
            b.set_raw(x, 0, Cell::from_char('x'));
        }
        b.set_raw(0, 1, Cell::from_char('x'));
        let runs = BufferDiff::compute(&a, &b).runs();
        assert_eq!(
            runs,
            vec![
                ChangeRun { y: 0, x0: 0, x1: 2 },
                ChangeRun { y: 0, x0: 4, x1: 4 },
                ChangeRun { y: 1, x0: 0, x1: 0 },
            ]
        );
    }
}
