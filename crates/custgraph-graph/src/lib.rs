//! # custgraph Graph
//!
//! Neo4j data-access layer for custgraph.
//!
//! Provides the connection client, the Cypher statements for every
//! customer operation, schema setup, and the `CustomerStore`
//! implementation used by the web front-end.

pub mod client;
pub mod queries;
pub mod schema;
mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
