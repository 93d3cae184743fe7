//! The storage seam handed to route handlers.
//!
//! Handlers never hold a database handle of their own: they receive a
//! shared `CustomerStore`, and its owner decides how sessions are acquired.

use async_trait::async_trait;

use crate::model::{Customer, CustomerUpdate, NewCustomer};
use crate::CustResult;

/// Customer persistence operations.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Issue a trivial round-trip against the backend.
    async fn ping(&self) -> CustResult<()>;

    /// Every Customer.
    async fn list_customers(&self) -> CustResult<Vec<Customer>>;

    /// Customers whose company name, contact name or address contains `term`.
    /// An empty term returns every Customer.
    async fn search_customers(&self, term: &str) -> CustResult<Vec<Customer>>;

    /// Create a Customer keyed on `contactName` unless one already exists.
    ///
    /// Existing nodes are returned untouched.
    async fn add_customer(&self, customer: &NewCustomer) -> CustResult<Vec<Customer>>;

    /// Rewrite the Customer(s) named `old_name`. Nothing is created when no
    /// node matches, and the result is then empty.
    async fn update_customer(&self, update: &CustomerUpdate) -> CustResult<Vec<Customer>>;

    /// Remove every relationship touching the named Customer, then the node.
    /// Deleting an unknown name is a no-op.
    async fn delete_customer(&self, contact_name: &str) -> CustResult<()>;

    /// The `contactName` of every Customer that has one.
    async fn contact_names(&self) -> CustResult<Vec<String>>;
}
