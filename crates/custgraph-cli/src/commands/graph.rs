//! Graph maintenance commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use custgraph_graph::GraphConfig;

#[derive(Subcommand)]
pub enum GraphCommands {
    /// Create the Customer contactName index
    Schema,
}

pub async fn execute(cmd: GraphCommands, config: &GraphConfig) -> Result<()> {
    let client = super::connect(config).await?;

    match cmd {
        GraphCommands::Schema => {
            let applied = custgraph_graph::schema::initialize_schema(&client).await?;
            println!("{} {} schema statement(s) applied", "Schema ready:".green().bold(), applied);
        }
    }
    Ok(())
}
