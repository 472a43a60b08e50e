//! CLI output formatting for the `check` command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each section is shown
//! by its menu position and title, with the directory and URL as indented
//! context lines. Documents are listed in the order a listing shows them
//! (newest first). Files that are not documents are named separately because
//! they still take up slots in the page math.
//!
//! ```text
//! Sections
//! 001 Blog (5 documents, 3 pages)
//!     Source: 1-blog/
//!     Link: /
//!     001 post-five
//!     002 post-four
//!     Other: cover.jpg
//! 002 About (1 document, 1 page)
//!     Source: 2-about/
//!     Link: /2-about
//!     001 me
//! 003 Photo Gallery (empty)
//!     Source: 3-photo-gallery/
//!     Link: /3-photo-gallery
//!
//! Config
//!     Articles per page: 2
//!     Template: templates/template.html
//!
//! Checked 3 sections, 6 documents
//! ```
//!
//! `format_*` returns lines for testability; `print_*` writes them to stdout.

use crate::config::SiteConfig;
use crate::pagination::page_count;
use crate::site::SectionInventory;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Section header: menu position, title, and what a listing of it holds.
///
/// ```text
/// 001 Blog (5 documents, 3 pages)
/// 003 Photo Gallery (empty)
/// ```
fn section_header(index: usize, section: &SectionInventory, page_size: usize) -> String {
    let files = section.entries.len();
    if files == 0 {
        return format!("{} {} (empty)", format_index(index), section.item.title);
    }
    format!(
        "{} {} ({}, {})",
        format_index(index),
        section.item.title,
        plural(section.document_count(), "document"),
        plural(page_count(files, page_size), "page"),
    )
}

// ============================================================================
// Check output
// ============================================================================

/// Format the site inventory printed by `check`.
pub fn format_check_output(sections: &[SectionInventory], config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];

    for (i, section) in sections.iter().enumerate() {
        lines.push(section_header(i + 1, section, config.articles_per_page));
        lines.push(format!("{}Source: {}/", indent(1), section.item.section));
        lines.push(format!("{}Link: {}", indent(1), section.item.link));

        let mut others = Vec::new();
        let mut doc_index = 0;
        for entry in &section.entries {
            match entry.document_slug() {
                Some(slug) => {
                    doc_index += 1;
                    lines.push(format!("{}{} {}", indent(1), format_index(doc_index), slug));
                }
                None => others.push(entry.name.as_str()),
            }
        }
        if !others.is_empty() {
            lines.push(format!("{}Other: {}", indent(1), others.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!(
        "{}Articles per page: {}",
        indent(1),
        config.articles_per_page
    ));
    lines.push(format!(
        "{}Template: {}",
        indent(1),
        config.template_path().display()
    ));

    let documents: usize = sections.iter().map(SectionInventory::document_count).sum();
    lines.push(String::new());
    lines.push(format!(
        "Checked {}, {}",
        plural(sections.len(), "section"),
        plural(documents, "document")
    ));
    lines
}

pub fn print_check_output(sections: &[SectionInventory], config: &SiteConfig) {
    for line in format_check_output(sections, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
