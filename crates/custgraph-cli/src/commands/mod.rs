//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

use custgraph_graph::{GraphClient, GraphConfig};

pub mod customer;
pub mod graph;
pub mod ping;
pub mod serve;

/// Customer records in a Neo4j graph, over HTTP or the terminal.
#[derive(Parser)]
#[command(name = "custgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (extension optional)
    #[arg(short, long, global = true, default_value = "custgraph", env = "CUSTGRAPH_CONFIG")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Check that Neo4j answers queries
    Ping,

    /// Inspect customers
    #[command(subcommand)]
    Customer(customer::CustomerCommands),

    /// Graph maintenance commands
    #[command(subcommand)]
    Graph(graph::GraphCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = crate::config::load(&self.config)?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Ping => ping::execute(&config.neo4j).await,
            Commands::Customer(cmd) => customer::execute(cmd, &config.neo4j).await,
            Commands::Graph(cmd) => graph::execute(cmd, &config.neo4j).await,
        }
    }
}

/// Connect to Neo4j, naming the endpoint on failure.
pub(crate) async fn connect(config: &GraphConfig) -> Result<GraphClient> {
    GraphClient::connect(config)
        .await
        .map_err(|e| anyhow::anyhow!("Could not reach Neo4j at {}: {}", config.uri, e))
}
