use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One page of results plus the counts a pager needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, already clamped.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamps a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(requested: usize, count: usize, page_size: usize) -> usize {
    requested.clamp(1, total_pages(count, page_size).max(1))
}

pub fn paginate<T: Clone>(items: &[T], requested_page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = clamp_page(requested_page, items.len(), page_size);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        page_size,
        total_pages: total_pages(items.len(), page_size),
        total_count: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(13, 6), 3);
        assert_eq!(total_pages(12, 6), 2);
        assert_eq!(total_pages(0, 6), 0);
    }

    #[test]
    fn test_clamp_past_last_page() {
        assert_eq!(clamp_page(10, 13, 6), 3);
    }

    #[test]
    fn test_clamp_zero_and_empty() {
        assert_eq!(clamp_page(0, 13, 6), 1);
        assert_eq!(clamp_page(4, 0, 6), 1);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<u32> = (1..=13).collect();
        let page = paginate(&items, 10, DEFAULT_PAGE_SIZE);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![13]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 13);
    }

    #[test]
    fn test_middle_page() {
        let items: Vec<u32> = (1..=13).collect();
        let page = paginate(&items, 2, DEFAULT_PAGE_SIZE);
        assert_eq!(page.items, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate::<u32>(&[], 1, DEFAULT_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
    }
}
