//! Fixed-size pagination by slicing

use serde::Serialize;

/// One page of a larger result set plus its paging metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice out page `page` (1-based) of `items`.
///
/// An out-of-range page yields an empty slice, never an error. `per_page`
/// of zero is treated as one to keep the arithmetic defined.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let selected = if start >= total {
        Vec::new()
    } else {
        items[start..(start + per_page).min(total)].to_vec()
    };

    Page {
        items: selected,
        page,
        per_page,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 1, 10);

        assert_eq!(page.items, (1..=10).collect::<Vec<u32>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);

        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 4, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate::<u32>(&[], 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 0, 2);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.page, 1);
    }
}
