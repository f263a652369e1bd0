#![forbid(unsafe_code)]

//! Body-cell payload: element identity plus grid position.

use crate::coord::CellCoord;

/// Stable identity of a data value.
///
/// Assigned by the data backend and stable across paging, sorting, and
/// re-render, unlike row positions. Selection membership is always compared
/// by element id, never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);

/// Everything the engine needs to know about one body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Data-row position on the current page (zero-based).
    pub row: usize,

    /// Column index.
    pub col: usize,

    /// Stable identity of the value in this cell.
    pub elem: ElementId,

    /// True when the cell belongs to a dimension column. Only dimension
    /// values are selectable.
    pub dimension: bool,
}

impl GridCell {
    /// Create a cell payload.
    #[must_use]
    pub const fn new(row: usize, col: usize, elem: ElementId, dimension: bool) -> Self {
        Self {
            row,
            col,
            elem,
            dimension,
        }
    }

    /// Coordinate of this cell in the focus grid (body rows sit below the
    /// header row).
    #[must_use]
    pub const fn focus_coord(&self) -> CellCoord {
        CellCoord::new(self.row + 1, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_coord_offsets_past_header() {
        let cell = GridCell::new(0, 2, ElementId(7), true);
        assert_eq!(cell.focus_coord(), CellCoord::new(1, 2));
    }
}
