//! Customer inspection commands.

use anyhow::Result;
use clap::Subcommand;

use custgraph_core::CustomerStore;
use custgraph_graph::GraphConfig;

use crate::output;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List every customer
    List,

    /// Customers whose company, contact name or address contains a term
    Search {
        /// Case-sensitive substring
        term: String,
    },

    /// Print contact names only
    Names,
}

pub async fn execute(cmd: CustomerCommands, config: &GraphConfig) -> Result<()> {
    let client = super::connect(config).await?;

    match cmd {
        CustomerCommands::List => {
            let customers = client.list_customers().await?;
            output::print_customers_table(&customers);
        }
        CustomerCommands::Search { term } => {
            let customers = client.search_customers(&term).await?;
            output::print_customers_table(&customers);
        }
        CustomerCommands::Names => {
            for name in client.contact_names().await? {
                println!("{name}");
            }
        }
    }
    Ok(())
}
