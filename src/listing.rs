//! Section listings and single-document lookup.
//!
//! A section is a directory of markdown files. Its listing shows the newest
//! files first, `articles_per_page` directory entries at a time:
//!
//! ```text
//! content/1-blog/
//! ├── post-five.md    (newest)  ┐ page 1
//! ├── post-four.md              ┘
//! ├── post-three.md             ┐ page 2
//! ├── post-two.md               ┘
//! └── post-one.md     (oldest)  ] page 3
//! ```
//!
//! ## Counting
//!
//! Every regular file in the section counts toward the page math, `.md` or
//! not. A page window that lands only on non-markdown files renders empty
//! rather than failing.
//!
//! ## Excerpts
//!
//! When the section holds more than one file, each document is cut down to
//! its first three lines and followed by a "read more" link to the full
//! document. A section with exactly one file shows that document whole.
//! "Lines" are raw `\n`-separated segments, not markdown paragraphs.
//!
//! The document route only accepts slugs that start with a letter and contain
//! letters, digits and dashes. Files named otherwise (`2024-recap.md`,
//! `my_post.md`) are still excerpted, but get no "read more" link since it
//! could not be followed.

use crate::config::SiteConfig;
use crate::naming::is_document_slug;
use crate::pagination::{PaginationError, page_window, pagination_markup};
use crate::types::{Document, PageWindow};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Extension a section file needs to be treated as a document.
pub const DOCUMENT_EXTENSION: &str = "md";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document not found: {section}/{slug}")]
    NotFound { section: String, slug: String },
    #[error("Cannot read document {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Cannot read section {path}: {source}")]
    SectionUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// One regular file in a section directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub name: String,
    pub modified_at: SystemTime,
}

impl SectionEntry {
    /// Document slug if this entry is a markdown document.
    pub fn document_slug(&self) -> Option<&str> {
        self.name
            .strip_suffix(DOCUMENT_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|slug| !slug.is_empty() && !slug.starts_with('.'))
    }
}

/// One rendered page of a section listing.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Markdown for the page: bodies or excerpts, read-more links, pagination.
    pub markdown: String,
    /// Slugs of the documents shown, in display order.
    pub slugs: Vec<String>,
    /// Number of files in the section, documents or not.
    pub total_count: usize,
    pub window: PageWindow,
}

/// List the regular files of a section directory, newest first.
///
/// Files whose names are not valid UTF-8 are skipped and do not count.
/// Ties on modification time are broken by name so repeated listings of an
/// unchanged directory come back in the same order.
pub fn section_entries(dir: &Path) -> io::Result<Vec<SectionEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!(path = %path.display(), "Skipping non UTF-8 file name");
            continue;
        };
        let name = name.to_string();
        let modified_at = fs::metadata(&path)?.modified()?;
        entries.push(SectionEntry { name, modified_at });
    }
    entries.sort_by(newest_first);
    Ok(entries)
}

fn newest_first(a: &SectionEntry, b: &SectionEntry) -> Ordering {
    b.modified_at
        .cmp(&a.modified_at)
        .then_with(|| a.name.cmp(&b.name))
}

/// Build page `page_number` of `section`'s listing.
pub fn list_section(
    config: &SiteConfig,
    section: &str,
    page_number: usize,
) -> Result<Listing, ListingError> {
    let dir = config.content_folder.join(section);
    let entries = section_entries(&dir).map_err(|source| ListingError::SectionUnreadable {
        path: dir.clone(),
        source,
    })?;

    let total_count = entries.len();
    let window = page_window(total_count, page_number, config.articles_per_page)?;
    let summarize = total_count > 1;

    let mut fragments = Vec::new();
    let mut slugs = Vec::new();
    for entry in &entries[window.start..window.end] {
        let Some(slug) = entry.document_slug() else {
            continue;
        };
        let document = load_document(&config.content_folder, section, slug)?;
        if summarize {
            fragments.push(excerpt(&document.body));
            if is_document_slug(slug) {
                fragments.push(read_more_link(&config.read_more_text, section, slug));
            }
        } else {
            fragments.push(document.body);
        }
        slugs.push(document.slug);
    }

    if let Some(markup) =
        pagination_markup(section, page_number, total_count, config.articles_per_page)
    {
        fragments.push(markup.into_string());
    }

    tracing::debug!(
        section,
        page = page_number,
        total = total_count,
        shown = slugs.len(),
        "Built section listing"
    );

    Ok(Listing {
        markdown: fragments.join("\n\n"),
        slugs,
        total_count,
        window,
    })
}

/// Read `<content_root>/<section>/<slug>.md`.
pub fn load_document(
    content_root: &Path,
    section: &str,
    slug: &str,
) -> Result<Document, DocumentError> {
    let not_found = || DocumentError::NotFound {
        section: section.to_string(),
        slug: slug.to_string(),
    };
    if !is_plain_segment(section) || !is_plain_segment(slug) {
        return Err(not_found());
    }

    let path = content_root
        .join(section)
        .join(format!("{slug}.{DOCUMENT_EXTENSION}"));
    if !path.is_file() {
        return Err(not_found());
    }
    let unreadable = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            not_found()
        } else {
            DocumentError::Unreadable {
                path: path.clone(),
                source,
            }
        }
    };

    let body = fs::read_to_string(&path).map_err(unreadable)?;
    let modified_at = fs::metadata(&path)
        .and_then(|m| m.modified())
        .map_err(unreadable)?;

    Ok(Document {
        section: section.to_string(),
        slug: slug.to_string(),
        modified_at,
        body,
    })
}

/// A single path component that cannot climb out of the content root.
fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.contains(['/', '\\'])
}

/// First three `\n`-separated segments of `body`.
pub fn excerpt(body: &str) -> String {
    body.splitn(4, '\n').take(3).collect::<Vec<_>>().join("\n")
}

/// Markdown link to the full document.
pub fn read_more_link(text: &str, section: &str, slug: &str) -> String {
    format!("[{text}](/{section}/{slug})")
}
