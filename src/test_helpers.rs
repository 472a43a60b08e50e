//! Shared test utilities for the simple-pages test suite.
//!
//! Listing order depends on file modification times, so fixtures are built in
//! code with explicit mtimes rather than copied from disk (a copy would stamp
//! every file with the copy time).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = fixture_site();
//! let menu = derive_menu(&site.content()).unwrap();
//! assert_eq!(menu_titles(&menu), vec!["Blog", "About", "Photo Gallery"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::types::MenuItem;

/// Stock template used by fixture sites.
pub const TEST_TEMPLATE: &str = include_str!("../templates/template.html");

// =========================================================================
// Fixture setup
// =========================================================================

/// A throwaway site: `content/` and `templates/` under a temp directory.
pub struct FixtureSite {
    tmp: TempDir,
}

impl FixtureSite {
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn content(&self) -> PathBuf {
        self.root().join("content")
    }

    pub fn templates(&self) -> PathBuf {
        self.root().join("templates")
    }

    pub fn section(&self, name: &str) -> PathBuf {
        let dir = self.content().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Config pointing at this site, two articles per page.
    pub fn config(&self) -> SiteConfig {
        SiteConfig {
            content_folder: self.content(),
            template_folder: self.templates(),
            read_more_text: "Read more".to_string(),
            articles_per_page: 2,
            ..SiteConfig::default()
        }
    }
}

/// An empty site with the stock template in place.
pub fn empty_site() -> FixtureSite {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("content")).unwrap();
    fs::create_dir_all(tmp.path().join("templates")).unwrap();
    fs::write(tmp.path().join("templates/template.html"), TEST_TEMPLATE).unwrap();
    FixtureSite { tmp }
}

/// The standard fixture site:
///
/// ```text
/// content/
/// ├── 1-blog/              five posts, post-five newest
/// ├── 2-about/me.md        single document
/// ├── 3-photo-gallery/     empty
/// ├── .drafts/             hidden
/// └── stray.md             plain file at the root
/// ```
pub fn fixture_site() -> FixtureSite {
    let site = empty_site();

    let blog = site.section("1-blog");
    for (i, name) in ["one", "two", "three", "four", "five"].iter().enumerate() {
        let age = 50 - 10 * i as u64;
        write_doc(&blog, &format!("post-{name}.md"), &post_body(name), age);
    }

    let about = site.section("2-about");
    write_doc(
        &about,
        "me.md",
        "# About\nThis is me.\nI write things.\nSometimes long things.\nThe end.",
        5,
    );

    site.section("3-photo-gallery");
    site.section(".drafts");
    fs::write(site.content().join("stray.md"), "not a section").unwrap();
    site
}

/// Five-line markdown body used for fixture posts.
pub fn post_body(name: &str) -> String {
    format!("# Post {name}\nLine two of {name}\nLine three of {name}\nLine four of {name}\nLine five of {name}")
}

/// Write a file and set its mtime to `age_secs` seconds before a fixed epoch.
///
/// A fixed reference keeps ordering deterministic regardless of how fast the
/// fixture is written.
pub fn write_doc(dir: &Path, name: &str, body: &str, age_secs: u64) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    set_age(&path, age_secs);
    path
}

/// Set a file's mtime to `age_secs` seconds before the fixture epoch.
pub fn set_age(path: &Path, age_secs: u64) {
    let epoch = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(epoch - Duration::from_secs(age_secs))
        .unwrap();
}

// =========================================================================
// Menu extractors
// =========================================================================

pub fn menu_sections(menu: &[MenuItem]) -> Vec<&str> {
    menu.iter().map(|m| m.section.as_str()).collect()
}

pub fn menu_titles(menu: &[MenuItem]) -> Vec<&str> {
    menu.iter().map(|m| m.title.as_str()).collect()
}

pub fn menu_links(menu: &[MenuItem]) -> Vec<&str> {
    menu.iter().map(|m| m.link.as_str()).collect()
}
