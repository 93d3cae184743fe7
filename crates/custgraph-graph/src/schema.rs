//! Neo4j schema initialization.
//!
//! Only a lookup index is created: `contactName` is the intended key, but
//! nothing enforces its uniqueness.

use neo4rs::Query;
use tracing::info;

use crate::client::{GraphClient, GraphError};

const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE INDEX customer_contact_name IF NOT EXISTS FOR (c:Customer) ON (c.contactName)",
];

/// Create the Customer lookup index. Safe to run repeatedly.
pub async fn initialize_schema(client: &GraphClient) -> Result<usize, GraphError> {
    info!("Initializing Neo4j schema...");

    for statement in SCHEMA_STATEMENTS {
        client.run(Query::new(statement.to_string())).await?;
    }

    info!("Neo4j schema initialized ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(SCHEMA_STATEMENTS.len())
}
