//! HTML rendering: markdown conversion, the page template, error pages.
//!
//! ## Page Template
//!
//! Pages are rendered through `<template_folder>/template.html`, a
//! [MiniJinja](https://docs.rs/minijinja) template read from disk on every
//! request, so template edits show up without a restart. The context holds:
//!
//! | Variable | Value |
//! |----------|-------|
//! | `content` | Page body as HTML (already converted from markdown, not escaped) |
//! | `menu` | All sections in menu order, each with `title`, `link`, `section` |
//! | `currentMenu` | The menu entry of the requested section, `none` if no entry matches |
//!
//! `simple-pages gen-template` prints the stock template as a starting point.
//!
//! ## Error Pages
//!
//! Error responses do not go through the user template (it may be the thing
//! that is broken). They are built with [Maud](https://maud.lambda.xyz/).

use crate::types::MenuItem;
use maud::{DOCTYPE, Markup, html};
use minijinja::{Environment, Value, context};
use pulldown_cmark::{Options, Parser, html as md_html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The stock page template, printed by `gen-template`.
pub const STOCK_TEMPLATE: &str = include_str!("../templates/template.html");

/// Name the template is registered under. The `.html` suffix turns on
/// MiniJinja's HTML auto-escaping for everything except `content`.
const TEMPLATE_NAME: &str = "template.html";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot read template {path}: {source}")]
    TemplateUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Convert markdown to HTML.
///
/// Raw HTML blocks (such as the pagination list) pass through unchanged.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_DEFINITION_LIST;
    let parser = Parser::new_ext(markdown, options);
    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    md_html::push_html(&mut html, parser);
    html
}

/// A page template loaded from disk.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    /// Read the template at `path`.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let source = fs::read_to_string(path).map_err(|source| RenderError::TemplateUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { source })
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Render a page around `content_html`.
    pub fn render(
        &self,
        content_html: &str,
        menu: &[MenuItem],
        current: Option<&MenuItem>,
    ) -> Result<String, RenderError> {
        let env = Environment::new();
        let template = env.template_from_named_str(TEMPLATE_NAME, &self.source)?;
        let output = template.render(context! {
            content => Value::from_safe_string(content_html.to_string()),
            menu => menu,
            currentMenu => current,
        })?;
        Ok(output)
    }
}

/// Standalone error page.
pub fn error_page(status: u16, message: &str, detail: Option<&str>) -> Markup {
    let title = format!("{status} {message}");
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body.error-page {
                main {
                    h1 { (status) }
                    p { (message) }
                    @if let Some(detail) = detail {
                        pre.error-detail { (detail) }
                    }
                    p { a href="/" { "Home" } }
                }
            }
        }
    }
}
