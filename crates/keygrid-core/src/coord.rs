#![forbid(unsafe_code)]

//! Cell coordinates, grid shapes, and paging arithmetic.
//!
//! Coordinates live in the focus grid: row `0` is the header row, body rows
//! start at `1`. All arithmetic is saturating so degenerate shapes (zero
//! rows, zero columns) never underflow.

/// Zero-based coordinate of a focusable cell.
///
/// # Examples
///
/// ```
/// use keygrid_core::coord::{CellCoord, GridShape};
///
/// let shape = GridShape::new(4, 3);
/// let coord = CellCoord::new(9, 9).clamped(shape);
/// assert_eq!(coord, CellCoord::new(3, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// Row in the focus grid (`0` = header row).
    pub row: usize,

    /// Column index.
    pub col: usize,
}

impl CellCoord {
    /// The top-left cell: first header cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Clamp into `shape`, saturating to the origin when the shape is empty.
    #[must_use]
    pub const fn clamped(self, shape: GridShape) -> Self {
        let max_row = shape.row_count.saturating_sub(1);
        let max_col = shape.column_count.saturating_sub(1);
        Self {
            row: if self.row > max_row { max_row } else { self.row },
            col: if self.col > max_col { max_col } else { self.col },
        }
    }

    /// Data-row position addressed by this coordinate, `None` for the
    /// header row.
    #[must_use]
    pub const fn body_row(self) -> Option<usize> {
        self.row.checked_sub(1)
    }
}

/// Row and column counts of the focus grid.
///
/// `row_count` includes the header row. The renderer reports this live on
/// every query; nothing in the engine caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    /// Total rows, header included.
    pub row_count: usize,

    /// Total columns.
    pub column_count: usize,
}

impl GridShape {
    /// Create a shape.
    #[must_use]
    pub const fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
        }
    }

    /// True when the shape has no addressable cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.row_count == 0 || self.column_count == 0
    }

    /// True when `coord` addresses a cell inside this shape.
    #[must_use]
    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.row_count && coord.col < self.column_count
    }

    /// Index of the last column, `0` for empty shapes.
    #[must_use]
    pub const fn last_col(&self) -> usize {
        self.column_count.saturating_sub(1)
    }

    /// Index of the last row, `0` for empty shapes.
    #[must_use]
    pub const fn last_row(&self) -> usize {
        self.row_count.saturating_sub(1)
    }
}

/// Current page position of a paged grid.
///
/// The engine only does the arithmetic; fetching rows for a page is the
/// host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageInfo {
    /// Zero-based page index.
    pub page: usize,

    /// Rows shown per page.
    pub rows_per_page: usize,
}

impl PageInfo {
    /// Create a page position.
    #[must_use]
    pub const fn new(page: usize, rows_per_page: usize) -> Self {
        Self {
            page,
            rows_per_page,
        }
    }

    /// Number of pages needed for `total_rows` data rows.
    ///
    /// Zero when there are no rows or `rows_per_page` is zero.
    #[must_use]
    pub const fn total_pages(&self, total_rows: usize) -> usize {
        if self.rows_per_page == 0 {
            return 0;
        }
        total_rows.div_ceil(self.rows_per_page)
    }

    /// Index of the last page, `0` when there are no pages at all.
    #[must_use]
    pub const fn last_page_index(&self, total_rows: usize) -> usize {
        self.total_pages(total_rows).saturating_sub(1)
    }
}
