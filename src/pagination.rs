//! Page slicing and pagination controls
//!
//! The control strip always shows the first and last page plus a window of two
//! pages either side of the current one. An ellipsis appears only at exactly
//! `current - 3` and `current + 3`.

use crate::asset::AssetRecord;

/// One control in the pagination strip.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageControl {
    Prev { disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

impl PageControl {
    /// Text shown on the control.
    pub fn label(&self) -> String {
        match self {
            PageControl::Prev { .. } => "Prev".to_string(),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "...".to_string(),
            PageControl::Next { .. } => "Next".to_string(),
        }
    }

    /// Whether activating the control does anything.
    pub fn is_clickable(&self) -> bool {
        match self {
            PageControl::Prev { disabled } | PageControl::Next { disabled } => !disabled,
            PageControl::Page { .. } => true,
            PageControl::Ellipsis => false,
        }
    }
}

/// The full control strip for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub controls: Vec<PageControl>,
}

/// Number of pages needed for `total_items`.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Returns page `page_num` (1-indexed) of `items`, clipped to bounds.
pub fn page(items: &[AssetRecord], page_num: usize, page_size: usize) -> &[AssetRecord] {
    if page_num == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_num - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Builds the control strip, or `None` when everything fits on one page.
pub fn pagination_view(
    total_items: usize,
    current_page: usize,
    page_size: usize,
) -> Option<PaginationView> {
    let total = total_pages(total_items, page_size);
    if total <= 1 {
        return None;
    }

    let mut controls = Vec::with_capacity(total.min(9) + 2);
    controls.push(PageControl::Prev {
        disabled: current_page == 1,
    });

    // Signed arithmetic so the window can reach below page 1.
    let current = current_page as i64;
    for i in 1..=total {
        let n = i as i64;
        if i == 1 || i == total || (n >= current - 2 && n <= current + 2) {
            controls.push(PageControl::Page {
                number: i,
                active: i == current_page,
            });
        } else if n == current - 3 || n == current + 3 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.push(PageControl::Next {
        disabled: current_page == total,
    });

    Some(PaginationView {
        current_page,
        total_pages: total,
        controls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<AssetRecord> {
        (0..n)
            .map(|i| AssetRecord::new(format!("coin-{}", i), format!("Coin {}", i), "c"))
            .collect()
    }

    fn labels(view: &PaginationView) -> Vec<String> {
        view.controls.iter().map(PageControl::label).collect()
    }

    #[test]
    fn test_page_slices_and_clips() {
        let list = items(23);
        assert_eq!(page(&list, 1, 10).len(), 10);
        assert_eq!(page(&list, 3, 10).len(), 3);
        assert_eq!(page(&list, 3, 10)[0].id, "coin-20");
        assert!(page(&list, 4, 10).is_empty());
        assert!(page(&list, 0, 10).is_empty());
        assert!(page(&[], 1, 10).is_empty());
    }

    #[test]
    // Concatenating every page reproduces the input exactly.
    fn test_pages_concatenate_to_input() {
        for len in [0, 1, 9, 10, 11, 23, 100] {
            let list = items(len);
            let mut joined = Vec::new();
            for p in 1..=total_pages(len, 10) {
                let slice = page(&list, p, 10);
                assert!(slice.len() <= 10);
                joined.extend_from_slice(slice);
            }
            assert_eq!(joined, list);
        }
    }

    #[test]
    // A single page has no controls at all.
    fn test_no_controls_for_single_page() {
        assert_eq!(pagination_view(0, 1, 10), None);
        assert_eq!(pagination_view(10, 1, 10), None);
        assert!(pagination_view(11, 1, 10).is_some());
    }

    #[test]
    fn test_first_page_of_three() {
        let view = pagination_view(23, 1, 10).unwrap();
        assert_eq!(
            view.controls,
            vec![
                PageControl::Prev { disabled: true },
                PageControl::Page { number: 1, active: true },
                PageControl::Page { number: 2, active: false },
                PageControl::Page { number: 3, active: false },
                PageControl::Next { disabled: false },
            ]
        );
    }

    #[test]
    // Ellipses sit exactly at current-3 and current+3.
    fn test_window_in_the_middle() {
        let view = pagination_view(200, 10, 10).unwrap();
        assert_eq!(
            labels(&view),
            vec!["Prev", "1", "...", "8", "9", "10", "11", "12", "...", "20", "Next"]
        );
    }

    #[test]
    // Near the start the window runs into page 1 and only the far side gets an ellipsis.
    fn test_window_near_start() {
        let view = pagination_view(100, 2, 10).unwrap();
        assert_eq!(
            labels(&view),
            vec!["Prev", "1", "2", "3", "4", "...", "10", "Next"]
        );
    }

    #[test]
    // The ellipsis may stand in for a single skipped page next to the last one.
    fn test_ellipsis_adjacent_to_last_page() {
        let view = pagination_view(80, 4, 10).unwrap();
        assert_eq!(
            labels(&view),
            vec!["Prev", "1", "2", "3", "4", "5", "6", "...", "8", "Next"]
        );
    }

    #[test]
    // Prev is disabled only on page 1, Next only on the last page; both ends always show.
    fn test_boundary_invariants() {
        for total_items in [11, 23, 57, 100, 250] {
            let total = total_pages(total_items, 10);
            for current in 1..=total {
                let view = pagination_view(total_items, current, 10).unwrap();
                let first = view.controls.first().unwrap();
                let last = view.controls.last().unwrap();
                assert_eq!(*first, PageControl::Prev { disabled: current == 1 });
                assert_eq!(*last, PageControl::Next { disabled: current == total });
                assert!(view.controls.contains(&PageControl::Page {
                    number: 1,
                    active: current == 1
                }));
                assert!(view.controls.contains(&PageControl::Page {
                    number: total,
                    active: current == total
                }));
            }
        }
    }
}
