/// Recipes shown per page; the listing always pages in steps of this size.
pub const ITEMS_PER_PAGE: usize = 10;

/// One page window over a filtered sequence. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    pub clamped_page: usize,
}

pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    let items_per_page = items_per_page.max(1);
    total_items.div_ceil(items_per_page).max(1)
}

/// Clamp a requested page (possibly zero or negative) into `[1, total_pages]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let total_pages = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        usize::try_from(requested).map_or(total_pages, |page| page.min(total_pages))
    }
}

fn page_range(page: usize, total_items: usize, items_per_page: usize) -> (usize, usize) {
    let items_per_page = items_per_page.max(1);
    let start = ((page - 1) * items_per_page).min(total_items);
    let end = (start + items_per_page).min(total_items);
    (start, end)
}

pub fn paginate<T>(items: &[T], items_per_page: usize, current_page: i64) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), items_per_page);
    let clamped_page = clamp_page(current_page, total_pages);
    let (start, end) = page_range(clamped_page, items.len(), items_per_page);

    Page {
        items: &items[start..end],
        total_pages,
        clamped_page,
    }
}

/// Page position over a sequence of known length. Moves never leave
/// `[1, total_pages]`; each move reports whether the page changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl PageCursor {
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_items,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Point the cursor at a freshly computed sequence, back on page 1.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn prev_page(&mut self) -> bool {
        if self.can_go_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.can_go_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn go_to_page(&mut self, page: i64) -> bool {
        let target = clamp_page(page, self.total_pages());
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_items_make_three_pages() {
        let items: Vec<usize> = (0..25).collect();

        let first = paginate(&items, ITEMS_PER_PAGE, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.clamped_page, 1);
        assert_eq!(first.items, &items[0..10]);

        let last = paginate(&items, ITEMS_PER_PAGE, 3);
        assert_eq!(last.clamped_page, 3);
        assert_eq!(last.items, &items[20..25]);
        assert_eq!(last.items.len(), 5);
    }

    #[test]
    fn test_empty_sequence_has_one_empty_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, ITEMS_PER_PAGE, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.clamped_page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let items: Vec<usize> = (0..25).collect();
        for requested in [i64::MIN, -3, 0, 1, 2, 3, 4, 99, i64::MAX] {
            let page = paginate(&items, ITEMS_PER_PAGE, requested);
            assert!(
                (1..=page.total_pages).contains(&page.clamped_page),
                "page {} clamped to {}",
                requested,
                page.clamped_page
            );
        }
        assert_eq!(paginate(&items, ITEMS_PER_PAGE, 0).clamped_page, 1);
        assert_eq!(paginate(&items, ITEMS_PER_PAGE, -7).clamped_page, 1);
        assert_eq!(paginate(&items, ITEMS_PER_PAGE, 42).clamped_page, 3);
    }

    #[test]
    fn test_pages_reconstruct_sequence_exactly_once() {
        for len in [0usize, 1, 9, 10, 11, 20, 25, 31] {
            for per_page in [1usize, 3, 10] {
                let items: Vec<usize> = (0..len).collect();
                let total = total_pages(len, per_page);
                let rebuilt: Vec<usize> = (1..=total as i64)
                    .flat_map(|p| paginate(&items, per_page, p).items.to_vec())
                    .collect();
                assert_eq!(rebuilt, items, "len={} per_page={}", len, per_page);
            }
        }
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let items = vec!['a', 'b'];
        let page = paginate(&items, 0, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items, &['b']);
    }

    #[test]
    fn test_cursor_prev_and_next_stay_in_bounds() {
        let mut cursor = PageCursor::new(25, ITEMS_PER_PAGE);
        assert!(!cursor.prev_page());
        assert_eq!(cursor.current_page, 1);

        assert!(cursor.next_page());
        assert!(cursor.next_page());
        assert_eq!(cursor.current_page, 3);
        assert!(!cursor.next_page());
        assert_eq!(cursor.current_page, 3);

        assert!(cursor.prev_page());
        assert_eq!(cursor.current_page, 2);
    }

    #[test]
    fn test_cursor_go_to_page_clamps() {
        let mut cursor = PageCursor::new(25, ITEMS_PER_PAGE);
        assert!(cursor.go_to_page(9));
        assert_eq!(cursor.current_page, 3);
        assert!(!cursor.go_to_page(3));
        assert!(cursor.go_to_page(-1));
        assert_eq!(cursor.current_page, 1);
    }

    #[test]
    fn test_cursor_reset_returns_to_first_page() {
        let mut cursor = PageCursor::new(25, ITEMS_PER_PAGE);
        cursor.go_to_page(3);
        cursor.reset(4);
        assert_eq!(cursor.current_page, 1);
        assert_eq!(cursor.total_pages(), 1);
        assert!(!cursor.can_go_next());
    }
}
