//! Health check command.

use anyhow::Result;
use colored::Colorize;

use custgraph_graph::GraphConfig;

pub async fn execute(config: &GraphConfig) -> Result<()> {
    let client = super::connect(config).await?;
    client.ping().await?;
    println!("{} Neo4j at {} is answering queries", "ok".green().bold(), config.uri);
    Ok(())
}
