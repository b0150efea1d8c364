//! Fixed-size pagination.

/// Number of pages needed for `total` items, at least one.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Split `items` into pages of `per_page`.
///
/// Always yields at least one page (empty when `items` is empty); the
/// concatenation of the pages equals `items`.
pub fn paginate<T>(items: &[T], per_page: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return vec![items];
    }
    items.chunks(per_page.max(1)).collect()
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based page index
    pub index: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
}

impl PageWindow {
    /// Window for the zero-based `index`, clamped to the last page.
    pub fn new(total_items: usize, per_page: usize, index: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = page_count(total_items, per_page);
        Self {
            index: index.min(total_pages - 1),
            total_pages,
            total_items,
            per_page,
        }
    }

    /// Window for a 1-based page number as found in URLs; `0` means the
    /// first page.
    pub fn from_number(total_items: usize, per_page: usize, number: usize) -> Self {
        Self::new(total_items, per_page, number.saturating_sub(1))
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// 1-based position of the first item on this page, `0` when empty.
    pub fn start(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            self.index * self.per_page + 1
        }
    }

    /// 1-based position of the last item on this page.
    pub fn end(&self) -> usize {
        ((self.index + 1) * self.per_page).min(self.total_items)
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages
    }

    /// The items of `all` that fall on this page.
    pub fn slice<'a, T>(&self, all: &'a [T]) -> &'a [T] {
        let from = (self.index * self.per_page).min(all.len());
        let to = (from + self.per_page).min(all.len());
        &all[from..to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 9), 1);
        assert_eq!(page_count(9, 9), 1);
        assert_eq!(page_count(10, 9), 2);
        assert_eq!(page_count(27, 9), 3);
    }

    #[test]
    fn test_paginate_concatenation_matches_input() {
        for n in 0..30usize {
            for per_page in 1..6usize {
                let items: Vec<usize> = (0..n).collect();
                let pages = paginate(&items, per_page);
                assert_eq!(pages.len(), page_count(n, per_page));
                let flat: Vec<usize> = pages.concat();
                assert_eq!(flat, items);
            }
        }
    }

    #[test]
    fn test_window_bounds() {
        let w = PageWindow::new(20, 9, 1);
        assert_eq!((w.start(), w.end()), (10, 18));
        assert!(w.has_prev());
        assert!(w.has_next());

        let last = PageWindow::new(20, 9, 2);
        assert_eq!((last.start(), last.end()), (19, 20));
        assert!(!last.has_next());
    }

    #[test]
    fn test_window_clamps_out_of_range() {
        let w = PageWindow::from_number(10, 3, 99);
        assert_eq!(w.index, 3);
        assert_eq!(w.number(), 4);

        let empty = PageWindow::new(0, 9, 5);
        assert_eq!(empty.index, 0);
        assert_eq!((empty.start(), empty.end()), (0, 0));
        assert!(!empty.has_prev() && !empty.has_next());
    }

    #[test]
    fn test_window_slice() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(PageWindow::new(7, 3, 2).slice(&items), &[7]);
        assert_eq!(PageWindow::new(7, 3, 0).slice(&items), &[1, 2, 3]);
    }
}
