//! Route handlers.

pub mod customers;
pub mod forms;
pub mod health;
pub mod search;

use askama::Template;
use axum::{http::StatusCode, response::Html};
use custgraph_core::CustError;

/// Error half of every fallible handler.
pub type HandlerError = (StatusCode, String);

/// Map a store failure onto a response, logging it on the way out.
pub(crate) fn store_error(err: CustError) -> HandlerError {
    match err {
        CustError::Validation(msg) => {
            tracing::debug!(%msg, "Rejected request");
            (StatusCode::BAD_REQUEST, msg)
        }
        other => {
            tracing::error!(error = %other, "Customer store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

/// Render an askama template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, HandlerError> {
    template.render().map(Html).map_err(|e| {
        let err = CustError::Template(e.to_string());
        tracing::error!(error = %err, "Template rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })
}
