#![forbid(unsafe_code)]

//! The cell-toggle gesture.
//!
//! Space on a dimension cell (or a click, on hosts that wire pointer
//! input through here) toggles that cell in or out of the pending
//! selection. The protocol in full:
//!
//! 1. No column lock yet: open a session against [`DATA_CUBE_PATH`] and
//!    start from an empty working set.
//! 2. Locked to this cell's column: continue from a copy of the pending
//!    rows.
//! 3. Locked to a *different* column: do nothing, silently.
//! 4. With the primary modifier held the working set becomes exactly the
//!    toggled cell; otherwise membership flips, keyed on element id.
//! 5. Non-empty result: optimistic local `Select`, then the backend call.
//!    Empty result: `cancel()` the session explicitly; the local rows are
//!    only reconciled when the canceled event comes back.
//!
//! Every completed toggle announces what changed and how many values are
//! now pending.

use std::rc::Rc;

use keygrid_a11y::strings;
use keygrid_a11y::{AnnounceKey, Announcement, Announcer};
use keygrid_core::cell::GridCell;
use keygrid_core::event::Modifiers;
use keygrid_i18n::Arg;
use tracing::{debug, trace};

use crate::session::{DATA_CUBE_PATH, SELECT_CELLS_METHOD, SelectRequest};
use crate::state::{SelectedRow, SelectionAction};
use crate::store::SelectionStore;

/// Apply one toggle to a working copy of the pending rows.
///
/// With `multi` the result is exactly the toggled cell, regardless of
/// what was pending. Otherwise the cell's element id is removed if
/// present, appended if not.
#[must_use]
pub fn working_rows(base: Vec<SelectedRow>, cell: &GridCell, multi: bool) -> Vec<SelectedRow> {
    if multi {
        return vec![SelectedRow::new(cell.elem, cell.row)];
    }

    let mut rows = base;
    match rows.iter().position(|r| r.elem == cell.elem) {
        Some(idx) => {
            rows.remove(idx);
        }
        None => rows.push(SelectedRow::new(cell.elem, cell.row)),
    }
    rows
}

/// Announce the outcome of a toggle.
///
/// Non-empty selections get a two-part message (what changed, how many
/// are pending); an emptied selection announces leaving selection mode.
pub fn announce_selection_status(announcer: &mut Announcer, rows_len: usize, is_addition: bool) {
    if rows_len > 0 {
        let change = if is_addition {
            strings::SELECTED_VALUE
        } else {
            strings::DESELECTED_VALUE
        };
        let amount = if rows_len == 1 {
            AnnounceKey::plain(strings::ONE_SELECTED)
        } else {
            AnnounceKey::with_args(strings::MANY_SELECTED, [Arg::Count(rows_len)])
        };
        announcer.announce(Announcement::keys([AnnounceKey::plain(change), amount]));
    } else {
        announcer.announce(Announcement::key(strings::EXITED_SELECTION));
    }
}

/// Toggle `cell` in or out of the pending selection.
///
/// The primary modifier (Ctrl, or Cmd) switches the gesture into
/// override mode: the working set becomes exactly this cell.
///
/// Returns whether the gesture ran the protocol. `false` means it was
/// refused up front: selections disabled, no session handle, or the cell
/// sits outside the locked column.
pub fn toggle_cell(
    store: &mut SelectionStore,
    cell: &GridCell,
    modifiers: Modifiers,
    announcer: &mut Announcer,
) -> bool {
    let multi = modifiers.primary();
    let state = store.state();
    if !state.enabled() {
        return false;
    }
    let Some(session) = state.session().map(Rc::clone) else {
        return false;
    };

    let prev_len = state.rows().len();
    let base = match state.active_col() {
        None => {
            debug!(path = DATA_CUBE_PATH, col = cell.col, "begin selection session");
            session.begin(DATA_CUBE_PATH);
            Vec::new()
        }
        Some(col) if col == cell.col => state.rows().to_vec(),
        Some(col) => {
            trace!(locked = col, attempted = cell.col, "toggle outside locked column ignored");
            return false;
        }
    };

    let rows = working_rows(base, cell, multi);
    announce_selection_status(announcer, rows.len(), rows.len() > prev_len);

    if rows.is_empty() {
        debug!("pending selection emptied, canceling session");
        session.cancel();
    } else {
        let request = SelectRequest {
            method: SELECT_CELLS_METHOD,
            path: DATA_CUBE_PATH,
            rows: rows.iter().map(|r| r.row).collect(),
            cols: vec![cell.col],
        };
        store.apply_now(SelectionAction::Select {
            rows,
            col: cell.col,
        });
        session.select(request);
    }
    true
}
