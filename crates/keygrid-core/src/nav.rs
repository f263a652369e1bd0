#![forbid(unsafe_code)]

//! Arrow-key traversal math.
//!
//! [`next_coord`] is the single source of truth for where focus lands after
//! an arrow key. It is pure: callers pass the live shape and the current
//! selection-mode flag, and apply the returned coordinate themselves.
//!
//! Movement rules:
//!
//! - `Down` stops at the last row, `Up` stops at the header row.
//! - While a selection gesture is open, `Up` additionally refuses to leave
//!   the first body row (row `1`), so the header never takes focus
//!   mid-gesture.
//! - `Right`/`Left` wrap across row boundaries: past the last column focus
//!   continues at the start of the next row, before the first column it
//!   continues at the end of the previous row. Both are disabled entirely
//!   while a selection gesture is open, keeping focus inside the locked
//!   column's neighborhood.
//! - Every non-arrow key leaves the coordinate untouched.

use crate::coord::{CellCoord, GridShape};
use crate::event::KeyCode;

/// Where focus lands after `key`, starting from `current` in a grid of
/// `shape`.
///
/// `in_selection` is whether a selection gesture is currently open (the
/// session reports modal).
#[must_use]
pub fn next_coord(
    key: KeyCode,
    current: CellCoord,
    shape: GridShape,
    in_selection: bool,
) -> CellCoord {
    let CellCoord { mut row, mut col } = current;

    match key {
        KeyCode::Down => {
            if row + 1 < shape.row_count {
                row += 1;
            }
        }
        KeyCode::Up => {
            // Row 1 is pinned while a selection is open: the header row
            // must not take focus mid-gesture.
            if row > 0 && (!in_selection || row != 1) {
                row -= 1;
            }
        }
        KeyCode::Right => {
            if !in_selection {
                if col + 1 < shape.column_count {
                    col += 1;
                } else if row + 1 < shape.row_count {
                    row += 1;
                    col = 0;
                }
            }
        }
        KeyCode::Left => {
            if !in_selection {
                if col > 0 {
                    col -= 1;
                } else if row > 0 {
                    row -= 1;
                    col = shape.last_col();
                }
            }
        }
        _ => {}
    }

    CellCoord::new(row, col)
}
