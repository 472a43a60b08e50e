//! Shared types passed between the menu, listing and rendering stages.
//!
//! `MenuItem` is serialized straight into the page template context, so its
//! field names are part of the template contract.

use serde::Serialize;
use std::time::SystemTime;

/// One navigable section: a top-level directory of the content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display label, derived from the directory name (prefix stripped, title-cased).
    pub title: String,
    /// URL path: `/` for the first (home) section, `/<section>` otherwise.
    pub link: String,
    /// Raw directory name. Stable identifier and sort key.
    pub section: String,
}

/// A markdown file inside a section directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Owning section (directory name).
    pub section: String,
    /// Filename without the `.md` extension.
    pub slug: String,
    /// Filesystem modification time; the only ordering key within a section.
    pub modified_at: SystemTime,
    /// Raw markdown. Read on demand, never cached.
    pub body: String,
}

/// The slice of a section shown for one page number.
///
/// Derived per request by [`crate::pagination::page_window`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First entry index on this page (inclusive).
    pub start: usize,
    /// One past the last entry index on this page.
    pub end: usize,
    /// Total number of pages for the section.
    pub page_count: usize,
    /// True when the section does not fit on a single page.
    pub has_multiple_pages: bool,
}

impl PageWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
