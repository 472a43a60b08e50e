//! # Simple Pages
//!
//! A minimal content server. Your filesystem is the data source: top-level
//! directories become menu sections, markdown files inside them become
//! documents, and sections with several documents are listed newest first,
//! a page at a time.
//!
//! # Request Flow
//!
//! Nothing is cached between requests. Every page is recomputed from disk:
//!
//! ```text
//! request ─► listing (section page)  ┐
//!        └─► document (single page)  ┴─► menu ─► template ─► HTML
//! ```
//!
//! The only long-lived value is the [`config::SiteConfig`] snapshot, loaded at
//! startup and replaced on SIGHUP.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`menu`] | Derives the ordered navigation menu from the content root |
//! | [`listing`] | Lists a section newest first, builds excerpts; loads single documents |
//! | [`pagination`] | Page window arithmetic and pagination link markup |
//! | [`render`] | Markdown to HTML, the MiniJinja page template, error pages |
//! | [`site`] | Assembles listing or document, menu and template into a page |
//! | [`server`] | axum routes, status mapping, graceful shutdown and config reload |
//! | [`config`] | `config.toml` loading, merging over defaults, validation |
//! | [`naming`] | `NNN-name` directory name parsing and URL segment rules |
//! | [`types`] | Shared types (`MenuItem`, `Document`, `PageWindow`) |
//! | [`output`] | CLI output formatting for `check` |
//!
//! # Design Decisions
//!
//! ## Ordering by Name and Time
//!
//! Sections are ordered by their full directory name, so a numeric prefix
//! (`1-blog`, `2-about`) forces menu order without showing up in the title.
//! The comparison is plain byte order: `10-x` sorts before `2-x`. Documents
//! inside a section are ordered by modification time, newest first.
//!
//! ## Runtime Template, Compile-Time Fragments
//!
//! The page template is a user file, so it is read and rendered with
//! MiniJinja on each request. Markup the server owns (pagination links,
//! error pages) is built with [Maud](https://maud.lambda.xyz/).

pub mod config;
pub mod listing;
pub mod menu;
pub mod naming;
pub mod output;
pub mod pagination;
pub mod render;
pub mod server;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
