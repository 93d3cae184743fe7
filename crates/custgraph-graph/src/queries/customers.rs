//! Customer queries.
//!
//! Every externally supplied value is bound as a query parameter; nothing
//! is spliced into the Cypher text.

use neo4rs::{query, Query, Row};
use tracing::{debug, error, info, warn};

use custgraph_core::{Customer, CustomerUpdate, NewCustomer};

use crate::client::{GraphClient, GraphError};

/// Node property names of a Customer.
pub const CONTACT_NAME: &str = "contactName";
pub const COMPANY_NAME: &str = "companyName";
pub const ADDRESS: &str = "address";
pub const PHONE: &str = "phone";

pub const LIST_CUSTOMERS: &str = "MATCH (c:Customer) RETURN c";

pub const SEARCH_CUSTOMERS: &str = "MATCH (c:Customer)
     WHERE c.companyName CONTAINS $term
        OR c.contactName CONTAINS $term
        OR c.address CONTAINS $term
     RETURN c";

/// Create-only-on-absent: an existing node keeps its properties.
/// `existed` reports whether the MERGE matched instead of creating.
pub const ADD_CUSTOMER: &str = "OPTIONAL MATCH (prior:Customer {contactName: $contactName})
     WITH count(prior) > 0 AS existed
     MERGE (c:Customer {contactName: $contactName})
     ON CREATE SET c.address = $address,
                   c.phone = $phone,
                   c.companyName = $companyName
     RETURN c, existed";

/// Match-only: nothing is created when `$oldName` is unknown.
pub const UPDATE_CUSTOMER: &str = "MATCH (c:Customer {contactName: $oldName})
     SET c.contactName = $contactName,
         c.address = $address,
         c.phone = $phone,
         c.companyName = $companyName
     RETURN c";

pub const DELETE_CUSTOMER_RELATIONSHIPS: &str =
    "MATCH (c:Customer {contactName: $name})-[rel]-() DELETE rel";

pub const DELETE_CUSTOMER_NODE: &str = "MATCH (c:Customer {contactName: $name}) DELETE c";

pub const CONTACT_NAMES: &str = "MATCH (c:Customer)
     WHERE c.contactName IS NOT NULL
     RETURN c.contactName AS contact_name";

/// Map a row holding a Customer node under `c`.
///
/// Missing or non-string properties come back as `None`.
pub fn customer_from_row(row: &Row) -> Result<Customer, GraphError> {
    let node: neo4rs::Node = row.get("c").map_err(|e| GraphError::Deserialize {
        field: "c".to_string(),
        message: e.to_string(),
    })?;

    Ok(Customer {
        contact_name: node.get::<String>(CONTACT_NAME).ok(),
        company_name: node.get::<String>(COMPANY_NAME).ok(),
        address: node.get::<String>(ADDRESS).ok(),
        phone: node.get::<String>(PHONE).ok(),
    })
}

fn customers_from_rows(rows: &[Row]) -> Result<Vec<Customer>, GraphError> {
    rows.iter().map(customer_from_row).collect()
}

pub fn search_query(term: &str) -> Query {
    query(SEARCH_CUSTOMERS).param("term", term)
}

pub fn add_query(customer: &NewCustomer) -> Query {
    query(ADD_CUSTOMER)
        .param("contactName", customer.contact_name.clone())
        .param("address", customer.address.clone())
        .param("phone", customer.phone.clone())
        .param("companyName", customer.company_name.clone())
}

pub fn update_query(update: &CustomerUpdate) -> Query {
    query(UPDATE_CUSTOMER)
        .param("oldName", update.old_name.as_str())
        .param("contactName", update.contact_name.as_str())
        .param("address", update.address.as_str())
        .param("phone", update.phone.as_str())
        .param("companyName", update.company_name.as_str())
}

/// Fetch every Customer.
pub async fn list_customers(client: &GraphClient) -> Result<Vec<Customer>, GraphError> {
    let rows = client.query_rows(query(LIST_CUSTOMERS)).await?;
    customers_from_rows(&rows)
}

/// Substring search over company name, contact name and address.
///
/// An empty term short-circuits to the full listing instead of relying on
/// `CONTAINS ''` and its handling of null properties.
pub async fn search_customers(client: &GraphClient, term: &str) -> Result<Vec<Customer>, GraphError> {
    if term.is_empty() {
        return list_customers(client).await;
    }
    let rows = client.query_rows(search_query(term)).await?;
    debug!(term, matches = rows.len(), "Searched customers");
    customers_from_rows(&rows)
}

/// Upsert a Customer keyed on `contactName`.
pub async fn add_customer(client: &GraphClient, customer: &NewCustomer) -> Result<Vec<Customer>, GraphError> {
    let rows = client.query_rows(add_query(customer)).await?;
    let existed = rows
        .first()
        .and_then(|row| row.get::<bool>("existed").ok())
        .unwrap_or(false);
    if existed {
        debug!(contact_name = ?customer.contact_name, "Customer already present, left unchanged");
    } else {
        info!(contact_name = ?customer.contact_name, "Added customer");
    }
    customers_from_rows(&rows)
}

/// Rewrite the Customer(s) named `update.old_name`.
pub async fn update_customer(client: &GraphClient, update: &CustomerUpdate) -> Result<Vec<Customer>, GraphError> {
    let rows = client.query_rows(update_query(update)).await?;
    if rows.is_empty() {
        debug!(old_name = %update.old_name, "No customer matched update");
    } else {
        info!(old_name = %update.old_name, contact_name = %update.contact_name, "Updated customer");
    }
    customers_from_rows(&rows)
}

/// Delete a Customer and its relationships in one transaction.
pub async fn delete_customer(client: &GraphClient, contact_name: &str) -> Result<(), GraphError> {
    let mut txn = client.start_txn().await?;

    let result = async {
        txn.run(query(DELETE_CUSTOMER_RELATIONSHIPS).param("name", contact_name))
            .await?;
        txn.run(query(DELETE_CUSTOMER_NODE).param("name", contact_name))
            .await?;
        Ok::<(), neo4rs::Error>(())
    }
    .await;

    match result {
        Ok(()) => {
            txn.commit().await?;
            info!(contact_name, "Deleted customer");
            Ok(())
        }
        Err(e) => {
            warn!(contact_name, error = %e, "Delete failed, rolling back");
            Err(after_rollback(e.into(), txn.rollback().await))
        }
    }
}

/// The statement error wins over a failed rollback, which is only logged.
fn after_rollback<E: std::fmt::Display>(statement_error: GraphError, rollback: Result<(), E>) -> GraphError {
    if let Err(rollback_error) = rollback {
        error!(error = %rollback_error, "Rollback failed");
    }
    statement_error
}

/// The `contactName` of every Customer that has one.
pub async fn contact_names(client: &GraphClient) -> Result<Vec<String>, GraphError> {
    let rows = client.query_rows(query(CONTACT_NAMES)).await?;
    rows.iter()
        .map(|row| {
            row.get::<String>("contact_name").map_err(|e| GraphError::Deserialize {
                field: "contact_name".to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}
