//! Column width resolution.
//!
//! This module calculates the display width of each column from the
//! column specifications, the cell contents and the available space.

use super::types::{TableSpec, Width};
use super::util::display_width;

/// Final display width of every column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// One width per column, in column order.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Width of column `index`.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Sum of the column widths, separators and borders excluded.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns `true` for a table without columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl TableSpec {
    /// Widths from the spec alone; bounded columns get their minimum.
    ///
    /// Bounded columns take their minimum; flexible columns share the rest.
    pub fn resolve_widths(&self, total_width: usize) -> ResolvedWidths {
        self.resolve_widths_impl(total_width, None)
    }

    /// Resolve column widths from the cells that will be displayed.
    ///
    /// Bounded columns take the widest cell, clamped to their bounds. Empty
    /// cells are measured as the column's `null_repr`. When the result is
    /// wider than `total_width`, the widest bounded columns give up space
    /// first, never below their minimum (or 1).
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster_render::tabular::{Col, TableSpec};
    ///
    /// let spec = TableSpec::builder()
    ///     .column(Col::auto())
    ///     .column(Col::auto())
    ///     .separator("  ")
    ///     .build();
    ///
    /// let rows = vec![vec!["Name", "Role"], vec!["Alice", "ADMIN"]];
    /// let widths = spec.resolve_widths_from_data(80, &rows);
    /// assert_eq!(widths.widths, vec![5, 5]);
    /// ```
    pub fn resolve_widths_from_data<S: AsRef<str>>(
        &self,
        total_width: usize,
        data: &[Vec<S>],
    ) -> ResolvedWidths {
        let mut max_data_widths: Vec<usize> = vec![0; self.columns.len()];

        for row in data {
            for (i, cell) in row.iter().enumerate() {
                if let Some(col) = self.columns.get(i) {
                    let cell = cell.as_ref();
                    let shown = if cell.is_empty() { &col.null_repr } else { cell };
                    max_data_widths[i] = max_data_widths[i].max(display_width(shown));
                }
            }
        }

        self.resolve_widths_impl(total_width, Some(&max_data_widths))
    }

    fn resolve_widths_impl(
        &self,
        total_width: usize,
        data_widths: Option<&[usize]>,
    ) -> ResolvedWidths {
        if self.columns.is_empty() {
            return ResolvedWidths::default();
        }

        let overhead = self.decorations.overhead(self.columns.len());
        let available = total_width.saturating_sub(overhead);

        let mut widths: Vec<usize> = Vec::with_capacity(self.columns.len());
        let mut flex_indices: Vec<(usize, usize)> = Vec::new(); // (index, weight)
        let mut used_width: usize = 0;

        // First pass: fixed and bounded columns
        for (i, col) in self.columns.iter().enumerate() {
            match &col.width {
                Width::Fixed(w) => {
                    widths.push(*w);
                    used_width += w;
                }
                Width::Bounded { min, max } => {
                    let min_w = min.unwrap_or(0);
                    let max_w = max.unwrap_or(usize::MAX);
                    let data_w = data_widths.and_then(|dw| dw.get(i).copied()).unwrap_or(0);
                    let width = data_w.max(min_w).min(max_w);
                    widths.push(width);
                    used_width += width;
                }
                Width::Fill => {
                    widths.push(0);
                    flex_indices.push((i, 1));
                }
                Width::Fraction(n) => {
                    widths.push(0);
                    flex_indices.push((i, *n));
                }
            }
        }

        if used_width > available {
            self.shrink_to_fit(&mut widths, used_width - available);
            used_width = widths.iter().sum();
        }

        // Second pass: flexible columns share what is left
        let remaining = available.saturating_sub(used_width);
        let total_weight: usize = flex_indices.iter().map(|(_, w)| w).sum();
        if total_weight > 0 {
            let mut remaining_space = remaining;
            for (i, (idx, weight)) in flex_indices.iter().enumerate() {
                // Last flex column absorbs rounding
                let width = if i == flex_indices.len() - 1 {
                    remaining_space
                } else {
                    let share = (remaining * weight) / total_weight;
                    remaining_space = remaining_space.saturating_sub(share);
                    share
                };
                widths[*idx] = width;
            }
        }

        ResolvedWidths { widths }
    }

    /// Takes `excess` columns away from the widest bounded columns.
    fn shrink_to_fit(&self, widths: &mut [usize], mut excess: usize) {
        while excess > 0 {
            let candidate = self
                .columns
                .iter()
                .enumerate()
                .filter(|(i, col)| {
                    matches!(col.width, Width::Bounded { .. }) && widths[*i] > col.width.floor()
                })
                .max_by_key(|(i, _)| widths[*i])
                .map(|(i, _)| i);

            match candidate {
                Some(i) => {
                    widths[i] -= 1;
                    excess -= 1;
                }
                None => {
                    log::debug!("table overflows available width by {} columns", excess);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::{Col, Column, TableSpec, Width};

    #[test]
    fn resolve_empty_spec() {
        let spec = TableSpec::builder().build();
        assert!(spec.resolve_widths(80).is_empty());
    }

    #[test]
    fn resolve_fixed_columns() {
        let spec = TableSpec::builder()
            .column(Col::fixed(10))
            .column(Col::fixed(20))
            .separator("")
            .build();
        let resolved = spec.resolve_widths(100);
        assert_eq!(resolved.widths, vec![10, 20]);
        assert_eq!(resolved.total(), 30);
    }

    #[test]
    fn resolve_fill_column() {
        let spec = TableSpec::builder()
            .column(Col::fixed(10))
            .column(Col::fill())
            .column(Col::fixed(10))
            .separator("  ")
            .build();

        // 80 - 4 overhead - 20 fixed
        assert_eq!(spec.resolve_widths(80).widths, vec![10, 56, 10]);
    }

    #[test]
    fn resolve_fill_columns_uneven_split() {
        let spec = TableSpec::builder()
            .columns([Col::fill(), Col::fill(), Col::fill()])
            .separator("")
            .build();
        assert_eq!(spec.resolve_widths(10).widths, vec![3, 3, 4]);
    }

    #[test]
    fn resolve_fraction_weights() {
        let spec = TableSpec::builder()
            .column(Column::new(Width::Fraction(2)))
            .column(Col::fill())
            .separator("")
            .build();
        assert_eq!(spec.resolve_widths(30).widths, vec![20, 10]);
    }

    #[test]
    fn bounded_columns_fit_content() {
        let spec = TableSpec::new(vec![Col::auto(), Col::bounded(6, 8)]);
        let data = vec![vec!["Alice", "ADMIN"], vec!["Bob", "SUPERVISOR"]];
        assert_eq!(spec.resolve_widths_from_data(80, &data).widths, vec![5, 8]);
    }

    #[test]
    fn bounded_columns_are_not_stretched() {
        let spec = TableSpec::new(vec![Col::auto(), Col::auto()]);
        let data = vec![vec!["a", "b"]];
        assert_eq!(spec.resolve_widths_from_data(80, &data).widths, vec![1, 1]);
    }

    #[test]
    fn empty_cells_measured_as_null_repr() {
        let spec = TableSpec::new(vec![Col::auto().null_repr("n/a")]);
        let data = vec![vec![""]];
        assert_eq!(spec.resolve_widths_from_data(80, &data).widths, vec![3]);
    }

    #[test]
    fn overflow_shrinks_widest_bounded_first() {
        let spec = TableSpec::new(vec![Col::auto(), Col::auto(), Col::fixed(4)]);
        let data = vec![vec!["aaaaaaaaaa", "bbbb", "cccc"]];
        // 20 - 4 overhead = 16 available; 10 + 4 + 4 = 18 wanted
        let widths = spec.resolve_widths_from_data(20, &data);
        assert_eq!(widths.widths, vec![8, 4, 4]);
    }

    #[test]
    fn overflow_never_goes_below_floor() {
        let spec = TableSpec::new(vec![Col::bounded(3, 10), Col::fixed(10)]);
        let data = vec![vec!["aaaaaaaaaa", "b"]];
        let widths = spec.resolve_widths_from_data(5, &data);
        assert_eq!(widths.widths, vec![3, 10]);
    }
}
