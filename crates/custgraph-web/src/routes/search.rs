//! Customer search handlers.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use super::customers::CustomersTemplate;
use super::forms::SearchTemplate;
use super::{render, store_error, HandlerError};
use crate::state::AppState;

/// A missing `search_input` is treated as an empty term.
#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_input: String,
}

/// GET /search - The search form.
pub async fn search_form() -> Result<Html<String>, HandlerError> {
    render(&SearchTemplate)
}

/// POST /search - Customers whose company, contact name or address contains the term.
pub async fn search_customers(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, HandlerError> {
    let customers = state
        .store
        .search_customers(&form.search_input)
        .await
        .map_err(store_error)?;
    render(&CustomersTemplate::from_customers(&customers))
}
