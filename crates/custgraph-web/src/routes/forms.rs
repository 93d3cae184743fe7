//! Static form pages.

use askama::Template;
use axum::{extract::Path, response::Html};

use super::{render, HandlerError};

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate;

#[derive(Template)]
#[template(path = "add.html")]
struct AddTemplate;

#[derive(Template)]
#[template(path = "delete.html")]
struct DeleteTemplate;

#[derive(Template)]
#[template(path = "edit.html")]
struct EditTemplate {
    contact_name: String,
}

/// GET /add
pub async fn add_form() -> Result<Html<String>, HandlerError> {
    render(&AddTemplate)
}

/// GET /delete
pub async fn delete_form() -> Result<Html<String>, HandlerError> {
    render(&DeleteTemplate)
}

/// GET /update/{contact_name} - Edit form keyed on the current contact name.
pub async fn edit_form(Path(contact_name): Path<String>) -> Result<Html<String>, HandlerError> {
    render(&EditTemplate { contact_name })
}
