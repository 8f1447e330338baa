//! Pagination over filtered sequences.
//!
//! [`paginate`] slices a filtered sequence into fixed-size pages. Without a
//! page size the whole sequence is one page, which is the "show more" display
//! mode: callers link to a fuller listing instead of drawing page controls.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};

/// Number of records per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Creates a page size, rejecting zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(PageSize)
            .ok_or(SeekerError::InvalidPageSize(size))
    }

    /// Returns the size as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        PageSize(size)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = SeekerError;

    fn try_from(size: usize) -> Result<Self> {
        PageSize::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of pages needed for `len` items.
///
/// Never less than 1, so an empty result still reads "page 1 of 1".
///
/// ```
/// use roster_seeker::{total_pages, PageSize};
///
/// let two = Some(PageSize::new(2).unwrap());
/// assert_eq!(total_pages(5, two), 3);
/// assert_eq!(total_pages(0, two), 1);
/// assert_eq!(total_pages(40, None), 1);
/// ```
pub fn total_pages(len: usize, page_size: Option<PageSize>) -> usize {
    match page_size {
        Some(size) => len.div_ceil(size.get()).max(1),
        None => 1,
    }
}

/// One page of a filtered sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based page number as requested.
    pub number: usize,
    /// The records on this page, in original order.
    pub items: &'a [T],
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Total number of records across all pages.
    pub total_items: usize,
    /// Page size, or `None` in show-more mode.
    pub page_size: Option<PageSize>,
}

// Manual impls avoid requiring `T: Clone`/`T: Copy`.
impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<'a, T> Page<'a, T> {
    /// Returns `true` if no records fall on this page.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when a previous page exists.
    ///
    /// A "Previous" control is disabled when this is false.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Returns `true` when a next page exists.
    ///
    /// A "Next" control is disabled when this is false.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Returns `true` when the page is outside `1..=total_pages`.
    pub fn is_out_of_range(&self) -> bool {
        self.number == 0 || self.number > self.total_pages
    }

    /// Returns `true` in show-more mode (no page size).
    pub fn is_unpaginated(&self) -> bool {
        self.page_size.is_none()
    }

    /// Offset of the first record of this page within the filtered sequence.
    pub fn offset(&self) -> usize {
        match self.page_size {
            Some(size) => self.number.saturating_sub(1).saturating_mul(size.get()),
            None => 0,
        }
    }

    /// 1-based positions of the first and last record shown, if any.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            let first = self.offset() + 1;
            Some((first, first + self.items.len() - 1))
        }
    }
}

/// Slices `filtered` into page `page` of `page_size` records.
///
/// The page is not clamped: a page past the end yields no items, and page 0
/// is treated as page 1. Callers keep the page valid by resetting it whenever
/// the filter state changes. Without a page size there is only page 1, so
/// the requested number is ignored.
///
/// ```
/// use roster_seeker::{paginate, PageSize};
///
/// let items = [1, 2, 3, 4, 5];
/// let size = Some(PageSize::new(2).unwrap());
///
/// let page = paginate(&items, 3, size);
/// assert_eq!(page.items, &[5]);
/// assert_eq!(page.total_pages, 3);
/// assert!(page.has_previous());
/// assert!(!page.has_next());
///
/// let all = paginate(&items, 1, None);
/// assert_eq!(all.items.len(), 5);
/// assert_eq!(all.total_pages, 1);
/// ```
pub fn paginate<T>(filtered: &[T], page: usize, page_size: Option<PageSize>) -> Page<'_, T> {
    let number = if page_size.is_some() { page.max(1) } else { 1 };
    let total_pages = total_pages(filtered.len(), page_size);
    let items = match page_size {
        Some(size) => {
            let start = (number - 1).saturating_mul(size.get());
            if start >= filtered.len() {
                log::trace!(
                    "page {} is past the end ({} pages of {})",
                    number,
                    total_pages,
                    size
                );
                &filtered[filtered.len()..]
            } else {
                let end = start.saturating_add(size.get()).min(filtered.len());
                &filtered[start..end]
            }
        }
        None => filtered,
    };

    Page {
        number,
        items,
        total_pages,
        total_items: filtered.len(),
        page_size,
    }
}

/// Iterates over every page of `filtered`, in order.
///
/// Always yields at least one (possibly empty) page.
pub fn pages<T>(filtered: &[T], page_size: Option<PageSize>) -> impl Iterator<Item = Page<'_, T>> {
    let total = total_pages(filtered.len(), page_size);
    (1..=total).map(move |n| paginate(filtered, n, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> Option<PageSize> {
        Some(PageSize::new(n).unwrap())
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageSize::new(0), Err(SeekerError::InvalidPageSize(0)));
        assert_eq!(PageSize::new(10).unwrap().get(), 10);
    }

    #[test]
    fn five_records_two_per_page() {
        let items = ["a", "b", "c", "d", "e"];
        let all: Vec<_> = pages(&items, size(2)).collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].items, &["a", "b"]);
        assert_eq!(all[1].items, &["c", "d"]);
        assert_eq!(all[2].items, &["e"]);
    }

    #[test]
    fn empty_input_is_page_one_of_one() {
        let items: [u8; 0] = [];
        let page = paginate(&items, 1, size(10));
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert_eq!(page.range(), None);
    }

    #[test]
    fn unpaginated_is_single_page() {
        let items = [1, 2, 3];
        let page = paginate(&items, 1, None);
        assert!(page.is_unpaginated());
        assert_eq!(page.items, &items);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn unpaginated_ignores_page_number() {
        let items = [1, 2, 3];
        let page = paginate(&items, 4, None);
        assert_eq!(page.items, &items);
        assert_eq!(page.number, 1);
        assert!(!page.is_out_of_range());
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn page_past_end_is_empty_not_clamped() {
        let items = [1, 2, 3];
        let page = paginate(&items, 5, size(2));
        assert_eq!(page.number, 5);
        assert!(page.is_empty());
        assert!(page.is_out_of_range());
        assert!(!page.has_next());
    }

    #[test]
    fn page_zero_reads_as_first() {
        let items = [1, 2, 3];
        let page = paginate(&items, 0, size(2));
        assert_eq!(page.number, 1);
        assert_eq!(page.items, &[1, 2]);
    }

    #[test]
    fn controls_disable_at_edges() {
        let items = [1, 2, 3, 4, 5];
        let first = paginate(&items, 1, size(2));
        assert!(!first.has_previous());
        assert!(first.has_next());

        let middle = paginate(&items, 2, size(2));
        assert!(middle.has_previous());
        assert!(middle.has_next());

        let last = paginate(&items, 3, size(2));
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn range_is_one_based() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&items, 2, size(2)).range(), Some((3, 4)));
        assert_eq!(paginate(&items, 3, size(2)).range(), Some((5, 5)));
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let items = [1, 2, 3];
        let page = paginate(&items, usize::MAX, size(2));
        assert!(page.is_empty());
    }

    #[test]
    fn page_size_serde() {
        let size: PageSize = serde_json::from_str("25").unwrap();
        assert_eq!(size.get(), 25);
        assert!(serde_json::from_str::<PageSize>("0").is_err());
        assert_eq!(serde_json::to_string(&size).unwrap(), "25");
    }
}
