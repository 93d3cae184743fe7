//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use custgraph_core::{CustomerStore, MemoryStore};

use crate::config::AppConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides `server.port`)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "logs/custgraph.log")]
    pub log_file: PathBuf,

    /// Serve from a process-local store instead of Neo4j
    #[arg(long)]
    pub in_memory: bool,
}

pub async fn execute(args: ServeArgs, config: AppConfig) -> Result<()> {
    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);

    let store: Arc<dyn CustomerStore> = if args.in_memory {
        tracing::warn!("Serving from an in-memory store; data is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(super::connect(&config.neo4j).await?)
    };
    let backend = if args.in_memory { "in-memory" } else { config.neo4j.uri.as_str() };

    println!();
    println!("  {} {}", "custgraph".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}:{}/customers", "Customers".green(), host, port);
    println!("  {}     {}", "Backend".green(), backend);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    custgraph_web::run_server(store, &host, port).await
}
