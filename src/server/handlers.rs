//! HTTP request handlers.
//!
//! Handlers validate URL segments, then hand off to [`crate::site`]. A second
//! segment of digits is a page number; one starting with a letter is a
//! document slug; anything else is rejected before touching the filesystem.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;

use super::error::ServerError;
use super::state::AppState;
use crate::naming::{is_document_slug, is_page_number, is_section_slug};
use crate::site;

/// Handle GET /.
pub(crate) async fn get_home(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let config = state.config().await;
    Ok(Html(site::render_home(&config)?))
}

/// Handle GET /{section}.
pub(crate) async fn get_section(
    Path(section): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    if !is_section_slug(&section) {
        return Err(ServerError::InvalidPath(format!("/{section}")));
    }
    let config = state.config().await;
    Ok(Html(site::render_section(&config, &section, 1)?))
}

/// Handle GET /{section}/{item}: a page number or a document slug.
pub(crate) async fn get_section_item(
    Path((section, item)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let path = format!("/{section}/{item}");
    if !is_section_slug(&section) {
        return Err(ServerError::InvalidPath(path));
    }

    let config = state.config().await;
    let html = if is_page_number(&item) {
        // Digits too large for usize cannot name an existing page.
        let page: usize = item.parse().map_err(|_| ServerError::InvalidPath(path))?;
        site::render_section(&config, &section, page)?
    } else if is_document_slug(&item) {
        site::render_document(&config, &section, &item)?
    } else {
        return Err(ServerError::InvalidPath(path));
    };
    Ok(Html(html))
}

/// Fallback for paths no route matches.
pub(crate) async fn not_found(uri: Uri) -> ServerError {
    ServerError::InvalidPath(uri.path().to_string())
}
