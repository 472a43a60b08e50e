//! Page window arithmetic and pagination link markup.
//!
//! Pure functions over `(total_count, page_number, page_size)`: no filesystem
//! access, so the listing stage can be tested by feeding it counts alone.
//!
//! ## Window Rules
//!
//! ```text
//! start = page_size * (page_number - 1)     clamped to 0 for page_number 0
//! end   = min(start + page_size, total)
//! pages = ceil(total / page_size)
//! ```
//!
//! A page whose `start` is at or past `total` does not exist. With zero
//! entries every page is out of range, page 1 included.
//!
//! ## Markup
//!
//! Links are emitted only when the entries do not fit on one page:
//!
//! ```html
//! <ul class="pagination"><li class="active"><a href="/news">1</a></li><li><a href="/news/2">2</a></li></ul>
//! ```
//!
//! Page 1 links to the bare section URL. The current page stays a link and is
//! marked with `class="active"`.

use crate::types::PageWindow;
use maud::{Markup, html};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("No such page: page {page} starts past the {total} available entries")]
    PageOutOfRange { page: usize, total: usize },
}

/// Compute the window of entries shown on `page_number`.
///
/// `page_size` must be positive; config validation guarantees this for the
/// configured value. A zero size is treated as one entry per page.
pub fn page_window(
    total_count: usize,
    page_number: usize,
    page_size: usize,
) -> Result<PageWindow, PaginationError> {
    let page_size = page_size.max(1);
    let start = page_size.saturating_mul(page_number.saturating_sub(1));
    if start >= total_count {
        return Err(PaginationError::PageOutOfRange {
            page: page_number,
            total: total_count,
        });
    }
    let end = start.saturating_add(page_size).min(total_count);

    Ok(PageWindow {
        start,
        end,
        page_count: page_count(total_count, page_size),
        has_multiple_pages: total_count > page_size,
    })
}

/// Number of pages needed for `total_count` entries; the last page may be partial.
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// URL of page `page` within `section`.
pub fn page_link(section: &str, page: usize) -> String {
    if page <= 1 {
        format!("/{section}")
    } else {
        format!("/{section}/{page}")
    }
}

/// Render the pagination list, or `None` when everything fits on one page.
pub fn pagination_markup(
    section: &str,
    current_page: usize,
    total_count: usize,
    page_size: usize,
) -> Option<Markup> {
    if total_count <= page_size {
        return None;
    }
    let pages = page_count(total_count, page_size);
    Some(html! {
        ul.pagination {
            @for page in 1..=pages {
                li class=[(page == current_page).then_some("active")] {
                    a href=(page_link(section, page)) { (page) }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_page_of_many() {
        let w = page_window(25, 1, 10).unwrap();
        assert_eq!((w.start, w.end), (0, 10));
        assert_eq!(w.page_count, 3);
        assert!(w.has_multiple_pages);
    }

    #[test]
    fn partial_last_page() {
        let w = page_window(25, 3, 10).unwrap();
        assert_eq!((w.start, w.end), (20, 25));
        assert_eq!(w.len(), 5);
    }

    #[test]
    fn everything_fits_on_one_page() {
        let w = page_window(5, 1, 10).unwrap();
        assert_eq!((w.start, w.end), (0, 5));
        assert_eq!(w.page_count, 1);
        assert!(!w.has_multiple_pages);
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        assert_eq!(
            page_window(10, 2, 10),
            Err(PaginationError::PageOutOfRange { page: 2, total: 10 })
        );
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn page_zero_is_clamped_to_start() {
        let w = page_window(25, 0, 10).unwrap();
        assert_eq!((w.start, w.end), (0, 10));
    }

    #[test]
    fn empty_section_has_no_pages() {
        assert!(page_window(0, 1, 10).is_err());
        assert!(page_window(0, 0, 10).is_err());
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        assert!(page_window(25, usize::MAX, 10).is_err());
    }

    #[test]
    fn page_links() {
        assert_eq!(page_link("news", 1), "/news");
        assert_eq!(page_link("news", 0), "/news");
        assert_eq!(page_link("news", 3), "/news/3");
    }

    #[test]
    fn no_markup_when_single_page() {
        assert!(pagination_markup("news", 1, 10, 10).is_none());
        assert!(pagination_markup("news", 1, 3, 10).is_none());
    }

    #[test]
    fn markup_marks_active_page_and_keeps_link() {
        let html = pagination_markup("news", 2, 25, 10).unwrap().into_string();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="pagination">"#,
                r#"<li><a href="/news">1</a></li>"#,
                r#"<li class="active"><a href="/news/2">2</a></li>"#,
                r#"<li><a href="/news/3">3</a></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn markup_has_no_active_item_for_page_zero() {
        let html = pagination_markup("news", 0, 25, 10).unwrap().into_string();
        assert!(!html.contains("active"));
        assert_eq!(html.matches("<li>").count(), 3);
    }
}
