#![forbid(unsafe_code)]

//! Renderer boundary.
//!
//! The engine never owns cell widgets. It addresses them by coordinate
//! through [`GridSurface`] and writes focus markers back through
//! [`GridSurface::apply_focus`]; creating and destroying the actual handles
//! is the renderer's job. Counts are queried live on every use because a
//! virtualized grid can change size between any two events.

use crate::coord::{CellCoord, GridShape};

/// What to do to a cell's focus state.
///
/// The grid keeps one roving tab stop: exactly one cell participates in the
/// host's tab order at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusKind {
    /// Give the cell input focus and make it the tab stop.
    Focus,

    /// Remove input focus and the tab stop from the cell.
    Blur,

    /// Make the cell the tab stop without moving input focus.
    AddTabStop,

    /// Drop the cell from the tab order.
    RemoveTabStop,
}

/// The rendered grid as the engine sees it.
pub trait GridSurface {
    /// Live row and column counts, header row included.
    fn shape(&self) -> GridShape;

    /// Write a focus marker onto the cell at `coord`.
    ///
    /// Out-of-range coordinates may be ignored; the engine clamps before
    /// calling wherever a stale coordinate could still be in flight.
    fn apply_focus(&mut self, coord: CellCoord, kind: FocusKind);

    /// Whether the cell at `coord` is currently styled as selected.
    fn cell_selected(&self, coord: CellCoord) -> bool;

    /// Whether input focus currently sits anywhere inside the grid.
    fn has_focus_within(&self) -> bool;

    /// Move input focus to the selection toolbar.
    ///
    /// `last` focuses the trailing control (used when tabbing backwards
    /// into the toolbar) instead of the leading one.
    fn focus_selection_toolbar(&mut self, last: bool);
}

/// Interaction constraints imposed by the embedding host.
///
/// A grid shown in an edit sheet or a read-only snapshot gets `active`
/// and/or `select` constraints and must not open selection sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    /// All interactivity is suppressed.
    pub active: bool,

    /// Selections specifically are suppressed.
    pub select: bool,
}

/// Whether selections are available under `constraints`.
///
/// Mirrors how hosts derive the reducer's enabled flag: a session handle
/// must exist and neither constraint may be set.
#[must_use]
pub const fn selections_enabled(has_session: bool, constraints: Constraints) -> bool {
    has_session && !constraints.active && !constraints.select
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_gate_selections() {
        let free = Constraints::default();
        assert!(selections_enabled(true, free));
        assert!(!selections_enabled(false, free));
        assert!(!selections_enabled(
            true,
            Constraints {
                active: true,
                select: false
            }
        ));
        assert!(!selections_enabled(
            true,
            Constraints {
                active: false,
                select: true
            }
        ));
    }
}
