//! Page assembly: listing or document, then menu, then template.
//!
//! Each request is answered from scratch. The filesystem is read for the
//! content, the menu is derived, the template is loaded, and the result is
//! rendered. Nothing survives between calls, so concurrent requests share
//! only the read-only [`SiteConfig`].
//!
//! ```text
//! GET /                 → render_home        (page 1 of the first section)
//! GET /<section>        → render_section(…, 1)
//! GET /<section>/<n>    → render_section(…, n)
//! GET /<section>/<slug> → render_document
//! ```

use crate::config::SiteConfig;
use crate::listing::{
    DocumentError, ListingError, SectionEntry, list_section, load_document, section_entries,
};
use crate::menu::{MenuError, current_item, derive_menu, home_section};
use crate::render::{PageTemplate, RenderError, markdown_to_html};
use crate::types::MenuItem;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Page 1 of the home section.
pub fn render_home(config: &SiteConfig) -> Result<String, SiteError> {
    let menu = derive_menu(&config.content_folder)?;
    let home = home_section(&menu)?.section.clone();
    let listing = list_section(config, &home, 1)?;
    compose(config, &listing.markdown, &menu, &home)
}

/// Page `page` of `section`'s listing.
pub fn render_section(
    config: &SiteConfig,
    section: &str,
    page: usize,
) -> Result<String, SiteError> {
    let listing = list_section(config, section, page)?;
    let menu = derive_menu(&config.content_folder)?;
    compose(config, &listing.markdown, &menu, section)
}

/// A single document, shown whole.
pub fn render_document(
    config: &SiteConfig,
    section: &str,
    slug: &str,
) -> Result<String, SiteError> {
    let document = load_document(&config.content_folder, section, slug)?;
    let menu = derive_menu(&config.content_folder)?;
    compose(config, &document.body, &menu, section)
}

fn compose(
    config: &SiteConfig,
    markdown: &str,
    menu: &[MenuItem],
    section: &str,
) -> Result<String, SiteError> {
    let template = PageTemplate::load(&config.template_path())?;
    let html = markdown_to_html(markdown);
    Ok(template.render(&html, menu, current_item(menu, section))?)
}

/// One section as seen by `check`: its menu entry and its files.
#[derive(Debug, Clone)]
pub struct SectionInventory {
    pub item: MenuItem,
    pub entries: Vec<SectionEntry>,
}

impl SectionInventory {
    pub fn document_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.document_slug().is_some())
            .count()
    }
}

/// Menu plus every section's files, in menu order.
pub fn inventory(config: &SiteConfig) -> Result<Vec<SectionInventory>, SiteError> {
    let menu = derive_menu(&config.content_folder)?;
    home_section(&menu)?;
    menu.into_iter()
        .map(|item| -> Result<SectionInventory, SiteError> {
            let dir = config.content_folder.join(&item.section);
            let entries = section_entries(&dir)
                .map_err(|source| ListingError::SectionUnreadable { path: dir, source })?;
            Ok(SectionInventory { item, entries })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PaginationError;
    use crate::test_helpers::*;
    use std::fs;

    #[test]
    fn home_is_first_section_page_one() {
        let site = fixture_site();
        let config = site.config();
        let home = render_home(&config).unwrap();
        assert_eq!(home, render_section(&config, "1-blog", 1).unwrap());
        assert!(home.contains("<h1>Post five</h1>"));
        assert!(home.contains("<title>Blog</title>"));
    }

    #[test]
    fn section_page_renders_listing_into_template() {
        let site = fixture_site();
        let html = render_section(&site.config(), "1-blog", 2).unwrap();
        assert!(html.contains("<h1>Post three</h1>"));
        assert!(html.contains("<h1>Post two</h1>"));
        assert!(!html.contains("Post four"));
        assert!(html.contains(r#"<ul class="pagination">"#));
        assert!(html.contains(r#"<li class="active"><a href="/1-blog/2">2</a></li>"#));
    }

    #[test]
    fn document_page_shows_full_body() {
        let site = fixture_site();
        let html = render_document(&site.config(), "1-blog", "post-two").unwrap();
        assert!(html.contains("Line five of two"));
        assert!(!html.contains("Read more"));
        assert!(html.contains("<title>Blog</title>"));
    }

    #[test]
    fn document_page_marks_its_section_current() {
        let site = fixture_site();
        fs::write(
            site.templates().join("template.html"),
            "{% if currentMenu %}{{ currentMenu.section }}{% else %}unset{% endif %}",
        )
        .unwrap();
        let html = render_document(&site.config(), "2-about", "me").unwrap();
        assert_eq!(html, "2-about");
    }

    #[test]
    fn out_of_range_page_is_listing_error() {
        let site = fixture_site();
        let result = render_section(&site.config(), "1-blog", 9);
        assert!(matches!(
            result,
            Err(SiteError::Listing(ListingError::Pagination(
                PaginationError::PageOutOfRange { .. }
            )))
        ));
    }

    #[test]
    fn missing_document_is_document_error() {
        let site = fixture_site();
        let result = render_document(&site.config(), "2-about", "you");
        assert!(matches!(
            result,
            Err(SiteError::Document(DocumentError::NotFound { .. }))
        ));
    }

    #[test]
    fn empty_content_root_has_no_home() {
        let site = empty_site();
        let result = render_home(&site.config());
        assert!(matches!(
            result,
            Err(SiteError::Menu(MenuError::NoSectionsConfigured))
        ));
    }

    #[test]
    fn missing_template_is_render_error() {
        let site = fixture_site();
        fs::remove_file(site.templates().join("template.html")).unwrap();
        let result = render_section(&site.config(), "2-about", 1);
        assert!(matches!(
            result,
            Err(SiteError::Render(RenderError::TemplateUnreadable { .. }))
        ));
    }

    #[test]
    fn content_errors_win_over_template_errors() {
        let site = fixture_site();
        fs::remove_file(site.templates().join("template.html")).unwrap();
        let result = render_document(&site.config(), "2-about", "nobody");
        assert!(matches!(result, Err(SiteError::Document(_))));
    }

    #[test]
    fn rendering_is_idempotent() {
        let site = fixture_site();
        let config = site.config();
        assert_eq!(
            render_section(&config, "1-blog", 1).unwrap(),
            render_section(&config, "1-blog", 1).unwrap()
        );
    }

    #[test]
    fn inventory_lists_sections_in_menu_order() {
        let site = fixture_site();
        fs::write(site.content().join("1-blog/cover.jpg"), "jpg").unwrap();
        let sections = inventory(&site.config()).unwrap();

        let names: Vec<&str> = sections.iter().map(|s| s.item.section.as_str()).collect();
        assert_eq!(names, vec!["1-blog", "2-about", "3-photo-gallery"]);
        assert_eq!(sections[0].entries.len(), 6);
        assert_eq!(sections[0].document_count(), 5);
        assert_eq!(sections[2].document_count(), 0);
    }

    #[test]
    fn inventory_of_empty_root_is_error() {
        let site = empty_site();
        assert!(matches!(
            inventory(&site.config()),
            Err(SiteError::Menu(MenuError::NoSectionsConfigured))
        ));
    }
}
