//! Neo4j connection client.

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;
use std::time::Duration;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Neo4j did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Failed to read field '{field}': {message}")]
    Deserialize { field: String, message: String },
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: usize,
    pub fetch_size: usize,
    /// Upper bound on the initial connect-and-ping. Queries themselves are unbounded.
    pub connect_timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
            database: "neo4j".to_string(),
            max_connections: 8,
            fetch_size: 200,
            connect_timeout_secs: 10,
        }
    }
}

/// Client for customer graph operations.
///
/// Owns the neo4rs pool; every call checks out its own session. Clone is cheap.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// `Graph::connect` only builds the pool, so a `RETURN 1` ping follows to
    /// force a real bolt handshake. The whole exchange is bounded by
    /// `connect_timeout_secs` so an unreachable server fails fast.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let limit = Duration::from_secs(config.connect_timeout_secs);
        tokio::time::timeout(limit, Self::connect_unbounded(config))
            .await
            .map_err(|_| GraphError::Timeout(limit))?
    }

    async fn connect_unbounded(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let client = Self { graph };
        client.ping().await?;

        tracing::info!(uri = %config.uri, db = %config.database, "Connected to Neo4j");
        Ok(client)
    }

    /// Run the trivial health query.
    pub async fn ping(&self) -> Result<(), GraphError> {
        self.run(Query::new("RETURN 1".to_string())).await
    }

    /// Execute a Cypher query that returns no results.
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a Cypher query and collect every row.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Begin an explicit transaction.
    pub async fn start_txn(&self) -> Result<neo4rs::Txn, GraphError> {
        Ok(self.graph.start_txn().await?)
    }

    /// Get a reference to the underlying neo4rs Graph.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }
}
