//! Cypher statements and row mapping.

pub mod customers;
