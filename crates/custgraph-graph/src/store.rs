//! `CustomerStore` backed by Neo4j.

use async_trait::async_trait;

use custgraph_core::{CustError, CustResult, Customer, CustomerStore, CustomerUpdate, NewCustomer};

use crate::client::{GraphClient, GraphError};
use crate::queries::customers;

impl From<GraphError> for CustError {
    fn from(err: GraphError) -> Self {
        CustError::store(err)
    }
}

#[async_trait]
impl CustomerStore for GraphClient {
    async fn ping(&self) -> CustResult<()> {
        Ok(GraphClient::ping(self).await?)
    }

    async fn list_customers(&self) -> CustResult<Vec<Customer>> {
        Ok(customers::list_customers(self).await?)
    }

    async fn search_customers(&self, term: &str) -> CustResult<Vec<Customer>> {
        Ok(customers::search_customers(self, term).await?)
    }

    async fn add_customer(&self, customer: &NewCustomer) -> CustResult<Vec<Customer>> {
        customer.key()?;
        Ok(customers::add_customer(self, customer).await?)
    }

    async fn update_customer(&self, update: &CustomerUpdate) -> CustResult<Vec<Customer>> {
        Ok(customers::update_customer(self, update).await?)
    }

    async fn delete_customer(&self, contact_name: &str) -> CustResult<()> {
        Ok(customers::delete_customer(self, contact_name).await?)
    }

    async fn contact_names(&self) -> CustResult<Vec<String>> {
        Ok(customers::contact_names(self).await?)
    }
}
