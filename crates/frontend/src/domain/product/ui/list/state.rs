use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
        }
    }
}

/// Pages the strip can show for a server-reported total.
pub fn total_pages(total: u64, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        ((total as usize) + page_size - 1) / page_size
    }
}

/// Clamp a 0-based page into the available range, e.g. after deletions
/// shrank the result set.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn page_is_clamped_into_range() {
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 2), 1);
        assert_eq!(clamp_page(0, 0), 0);
    }
}
