//! Server errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::config::ConfigError;
use crate::listing::{DocumentError, ListingError};
use crate::render::{RenderError, error_page};
use crate::site::SiteError;

/// Failure while answering a request.
#[derive(Error, Debug)]
pub(crate) enum ServerError {
    #[error("No route for {0}")]
    InvalidPath(String),
    #[error(transparent)]
    Site(#[from] SiteError),
}

impl ServerError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) => StatusCode::NOT_FOUND,
            Self::Site(SiteError::Menu(_)) => StatusCode::NOT_IMPLEMENTED,
            Self::Site(SiteError::Listing(e)) => match e {
                ListingError::SectionUnreadable { .. } | ListingError::Pagination(_) => {
                    StatusCode::NOT_FOUND
                }
                ListingError::Document(e) => document_status(e),
            },
            Self::Site(SiteError::Document(e)) => document_status(e),
            Self::Site(SiteError::Render(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "Page not found.",
            StatusCode::NOT_IMPLEMENTED => "No content sections are available.",
            _ => "The page could not be rendered.",
        }
    }

    /// Underlying error text shown on the error page. Only template failures
    /// are surfaced; they are the ones a site author can act on.
    fn detail(&self) -> Option<String> {
        match self {
            Self::Site(SiteError::Render(e @ RenderError::Template(_))) => Some(e.to_string()),
            _ => None,
        }
    }
}

fn document_status(error: &DocumentError) -> StatusCode {
    match error {
        DocumentError::NotFound { .. } => StatusCode::NOT_FOUND,
        DocumentError::Unreadable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let detail = self.detail();
        let page = error_page(status.as_u16(), self.message(), detail.as_deref());
        (status, Html(page.into_string())).into_response()
    }
}

/// Failure starting or running the server.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}
