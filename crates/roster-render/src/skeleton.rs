//! Placeholder cells shown while data is loading.
//!
//! A skeleton has the same shape as the table it stands in for, so the
//! layout does not jump when real rows arrive.

/// Glyph used to draw skeleton bars.
pub const SKELETON_GLYPH: char = '░';

/// Widths a skeleton bar cycles through, for a less uniform look.
const BAR_WIDTHS: [usize; 4] = [8, 6, 10, 5];

/// A skeleton bar of `width` columns.
pub fn skeleton_cell(width: usize) -> String {
    std::iter::repeat_n(SKELETON_GLYPH, width).collect()
}

/// A grid of skeleton bars.
///
/// # Example
///
/// ```
/// use roster_render::Skeleton;
///
/// let grid = Skeleton::new(2, 3).cells();
/// assert_eq!(grid.len(), 2);
/// assert!(grid.iter().all(|row| row.len() == 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skeleton {
    rows: usize,
    columns: usize,
}

impl Skeleton {
    /// Create a skeleton of `rows` by `columns` bars.
    pub fn new(rows: usize, columns: usize) -> Self {
        Skeleton { rows, columns }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Width of the bar at (`row`, `column`).
    pub fn bar_width(row: usize, column: usize) -> usize {
        BAR_WIDTHS[(row + column * 3) % BAR_WIDTHS.len()]
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> Vec<Vec<String>> {
        (0..self.rows)
            .map(|row| {
                (0..self.columns)
                    .map(|column| skeleton_cell(Self::bar_width(row, column)))
                    .collect()
            })
            .collect()
    }

    /// A header row of bars, for skeletonized labels.
    pub fn header(&self) -> Vec<String> {
        (0..self.columns)
            .map(|column| skeleton_cell(Self::bar_width(0, column).min(6)))
            .collect()
    }
}
