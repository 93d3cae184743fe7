//! In-memory `CustomerStore`.
//!
//! Keeps nodes and relationships in process with the same upsert, match
//! and delete semantics as the graph-backed store. Used by tests and by
//! `serve --in-memory` when no Neo4j instance is around.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{Customer, CustomerUpdate, NewCustomer};
use crate::store::CustomerStore;
use crate::CustResult;

#[derive(Default)]
struct MemoryGraph {
    next_id: u64,
    nodes: Vec<(u64, Customer)>,
    relationships: Vec<(u64, u64)>,
}

impl MemoryGraph {
    fn ids_named(&self, contact_name: &str) -> Vec<u64> {
        self.nodes
            .iter()
            .filter(|(_, c)| c.contact_name.as_deref() == Some(contact_name))
            .map(|(id, _)| *id)
            .collect()
    }
}

/// Process-local customer graph.
#[derive(Default)]
pub struct MemoryStore {
    graph: RwLock<MemoryGraph>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect every Customer named `from` to every Customer named `to`.
    /// Returns the number of relationships created.
    pub async fn relate(&self, from: &str, to: &str) -> usize {
        let mut graph = self.graph.write().await;
        let sources = graph.ids_named(from);
        let targets = graph.ids_named(to);
        let mut created = 0;
        for source in &sources {
            for target in &targets {
                graph.relationships.push((*source, *target));
                created += 1;
            }
        }
        created
    }

    /// Number of relationships currently stored.
    pub async fn relationship_count(&self) -> usize {
        self.graph.read().await.relationships.len()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn ping(&self) -> CustResult<()> {
        Ok(())
    }

    async fn list_customers(&self) -> CustResult<Vec<Customer>> {
        let graph = self.graph.read().await;
        Ok(graph.nodes.iter().map(|(_, c)| c.clone()).collect())
    }

    async fn search_customers(&self, term: &str) -> CustResult<Vec<Customer>> {
        if term.is_empty() {
            return self.list_customers().await;
        }
        let graph = self.graph.read().await;
        Ok(graph
            .nodes
            .iter()
            .filter(|(_, c)| c.matches(term))
            .map(|(_, c)| c.clone())
            .collect())
    }

    async fn add_customer(&self, customer: &NewCustomer) -> CustResult<Vec<Customer>> {
        let key = customer.key()?;
        let mut graph = self.graph.write().await;

        let existing: Vec<Customer> = graph
            .nodes
            .iter()
            .filter(|(_, c)| c.contact_name.as_deref() == Some(key))
            .map(|(_, c)| c.clone())
            .collect();
        if !existing.is_empty() {
            debug!(contact_name = %key, "Customer already present, left unchanged");
            return Ok(existing);
        }

        let created = customer.to_customer();
        let id = graph.next_id;
        graph.next_id += 1;
        graph.nodes.push((id, created.clone()));
        Ok(vec![created])
    }

    async fn update_customer(&self, update: &CustomerUpdate) -> CustResult<Vec<Customer>> {
        let mut graph = self.graph.write().await;
        let mut updated = Vec::new();
        for (_, customer) in graph.nodes.iter_mut() {
            if customer.contact_name.as_deref() == Some(update.old_name.as_str()) {
                update.apply(customer);
                updated.push(customer.clone());
            }
        }
        Ok(updated)
    }

    async fn delete_customer(&self, contact_name: &str) -> CustResult<()> {
        let mut graph = self.graph.write().await;
        let doomed = graph.ids_named(contact_name);
        graph
            .relationships
            .retain(|(a, b)| !doomed.contains(a) && !doomed.contains(b));
        graph.nodes.retain(|(id, _)| !doomed.contains(id));
        Ok(())
    }

    async fn contact_names(&self) -> CustResult<Vec<String>> {
        let graph = self.graph.read().await;
        Ok(graph
            .nodes
            .iter()
            .filter_map(|(_, c)| c.contact_name.clone())
            .collect())
    }
}
