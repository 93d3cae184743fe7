//! Customer listing and mutation handlers.

use askama::Template;
use axum::{extract::State, response::Html, Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use custgraph_core::{Customer, CustomerUpdate, NewCustomer};

use super::{render, store_error, HandlerError};
use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "customers.html")]
pub struct CustomersTemplate {
    pub customers: Vec<CustomerView>,
}

impl CustomersTemplate {
    pub fn from_customers(customers: &[Customer]) -> Self {
        Self {
            customers: customers.iter().map(CustomerView::from_customer).collect(),
        }
    }
}

/// View model for a customer; absent properties render as empty text.
pub struct CustomerView {
    pub contact_name: String,
    pub company_name: String,
    pub address: String,
    pub phone: String,
}

impl CustomerView {
    fn from_customer(customer: &Customer) -> Self {
        Self {
            contact_name: customer.contact_name.clone().unwrap_or_default(),
            company_name: customer.company_name.clone().unwrap_or_default(),
            address: customer.address.clone().unwrap_or_default(),
            phone: customer.phone.clone().unwrap_or_default(),
        }
    }
}

// ============================================================
// REQUEST / RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct DeleteForm {
    pub name: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET /customers - Every customer as an HTML list.
pub async fn list_customers(State(state): State<AppState>) -> Result<Html<String>, HandlerError> {
    let customers = state.store.list_customers().await.map_err(store_error)?;
    render(&CustomersTemplate::from_customers(&customers))
}

/// GET /test - The contact name of every customer as a JSON array.
pub async fn contact_names(State(state): State<AppState>) -> Result<Json<Vec<String>>, HandlerError> {
    let names = state.store.contact_names().await.map_err(store_error)?;
    Ok(Json(names))
}

/// POST /addCustomer - Create a customer unless its contact name is taken.
///
/// An existing customer is listed as-is; its properties are not overwritten.
pub async fn add_customer(
    State(state): State<AppState>,
    Form(form): Form<NewCustomer>,
) -> Result<Html<String>, HandlerError> {
    let customers = state.store.add_customer(&form).await.map_err(store_error)?;
    render(&CustomersTemplate::from_customers(&customers))
}

/// POST /updateCustomer - Rewrite the customer named `oldName`.
///
/// Lists nothing when no customer had that name.
pub async fn update_customer(
    State(state): State<AppState>,
    Form(form): Form<CustomerUpdate>,
) -> Result<Html<String>, HandlerError> {
    let customers = state.store.update_customer(&form).await.map_err(store_error)?;
    render(&CustomersTemplate::from_customers(&customers))
}

/// POST /deleteCustomer - Delete a customer and its relationships.
///
/// Reports success whether or not the name existed.
pub async fn delete_customer(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Json<MessageResponse>, HandlerError> {
    state.store.delete_customer(&form.name).await.map_err(store_error)?;
    info!(contact_name = %form.name, "Handled delete request");
    Ok(Json(MessageResponse {
        message: format!("Customer {} has been deleted.", form.name),
    }))
}
