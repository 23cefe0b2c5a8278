//! FILENAME: core/grid-engine/src/paginate.rs
//! PURPOSE: Deterministic fixed-size pagination with page clamping.
//! CONTEXT: The requested page index may be stale (filters shrank the row
//! count since the caller last rendered); the returned slice is always
//! valid for the current count.

use serde::{Deserialize, Serialize};

/// The clamped window of one page over an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSlice {
    /// Start offset into the sequence (inclusive).
    pub start: usize,
    /// End offset (exclusive), saturated at the sequence length.
    pub end: usize,
    pub effective_page: usize,
    pub total_pages: usize,
}

/// Computes the page window. `total_pages` is at least 1 even for an empty
/// sequence; `effective_page` is the requested page clamped into range.
pub fn paginate(count: usize, page_size: usize, requested_page: usize) -> PageSlice {
    let page_size = page_size.max(1);
    let total_pages = count.div_ceil(page_size).max(1);
    let effective_page = requested_page.min(total_pages - 1);
    let start = (effective_page * page_size).min(count);
    let end = (start + page_size).min(count);
    PageSlice {
        start,
        end,
        effective_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_division() {
        let slice = paginate(20, 10, 1);
        assert_eq!(slice.total_pages, 2);
        assert_eq!(slice.effective_page, 1);
        assert_eq!((slice.start, slice.end), (10, 20));
    }

    #[test]
    fn test_partial_last_page() {
        let slice = paginate(23, 10, 2);
        assert_eq!(slice.total_pages, 3);
        assert_eq!((slice.start, slice.end), (20, 23));
    }

    #[test]
    fn test_stale_page_is_clamped() {
        let slice = paginate(3, 10, 5);
        assert_eq!(slice.effective_page, 0);
        assert_eq!(slice.total_pages, 1);
        assert_eq!((slice.start, slice.end), (0, 3));
    }

    #[test]
    fn test_empty_sequence_has_one_page() {
        let slice = paginate(0, 10, 0);
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.effective_page, 0);
        assert_eq!((slice.start, slice.end), (0, 0));
    }

    #[test]
    fn test_zero_page_size_is_floored() {
        let slice = paginate(5, 0, 0);
        assert_eq!(slice.total_pages, 5);
        assert_eq!((slice.start, slice.end), (0, 1));
    }

    #[test]
    fn test_pages_cover_the_sequence_exactly() {
        for count in [0usize, 1, 9, 10, 11, 25] {
            for page_size in [1usize, 3, 10] {
                let total_pages = paginate(count, page_size, 0).total_pages;
                let mut covered = Vec::new();
                for page in 0..total_pages {
                    let slice = paginate(count, page_size, page);
                    covered.extend(slice.start..slice.end);
                }
                let expected: Vec<usize> = (0..count).collect();
                assert_eq!(covered, expected, "count={count} page_size={page_size}");
            }
        }
    }
}
