//! Navigation menu derivation.
//!
//! Every visible top-level directory of the content root is a section, and
//! every section is one menu entry:
//!
//! ```text
//! content/
//! ├── 1-blog/          → "Blog"          link "/"   (first in order: home)
//! ├── 2-about/         → "About"         link "/2-about"
//! ├── 3-photo-gallery/ → "Photo Gallery" link "/3-photo-gallery"
//! ├── .git/            (hidden, skipped)
//! └── notes.txt        (not a directory, skipped)
//! ```
//!
//! Entries are ordered by their full directory name, byte-wise. Numeric
//! prefixes therefore compare as text: `10-x` sorts before `2-x`. Use
//! zero-padded prefixes (`01-`, `02-`, ..., `10-`) when more than nine sections
//! need a fixed order.
//!
//! The menu is rebuilt from the filesystem on every call; nothing is cached.

use crate::naming::parse_entry_name;
use crate::types::MenuItem;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Cannot read content root {path}: {source}")]
    ContentRootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No sections configured: content root has no visible directories")]
    NoSectionsConfigured,
}

/// Derive the ordered navigation menu from the directories under `root`.
pub fn derive_menu(root: &Path) -> Result<Vec<MenuItem>, MenuError> {
    let unreadable = |source| MenuError::ContentRootUnreadable {
        path: root.to_path_buf(),
        source,
    };

    let mut sections = Vec::new();
    for entry in fs::read_dir(root).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if !path.is_dir() {
            continue;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if !name.starts_with('.') => sections.push(name.to_string()),
            Some(_) => {}
            None => tracing::debug!(path = %path.display(), "Skipping non UTF-8 section name"),
        }
    }

    let menu = menu_from_sections(sections);
    tracing::debug!(root = %root.display(), sections = menu.len(), "Derived menu");
    Ok(menu)
}

/// Build menu items from section directory names: title, link, sort, home link.
pub fn menu_from_sections<I>(sections: I) -> Vec<MenuItem>
where
    I: IntoIterator<Item = String>,
{
    let mut menu: Vec<MenuItem> = sections
        .into_iter()
        .map(|section| MenuItem {
            title: parse_entry_name(&section).display_title,
            link: format!("/{section}"),
            section,
        })
        .collect();

    menu.sort_by(|a, b| a.section.cmp(&b.section));
    if let Some(first) = menu.first_mut() {
        first.link = "/".to_string();
    }
    menu
}

/// The home section: first entry of the sorted menu.
pub fn home_section(menu: &[MenuItem]) -> Result<&MenuItem, MenuError> {
    menu.first().ok_or(MenuError::NoSectionsConfigured)
}

/// The menu entry for `section`, if the section is in the menu.
pub fn current_item<'a>(menu: &'a [MenuItem], section: &str) -> Option<&'a MenuItem> {
    menu.iter().find(|item| item.section == section)
}
