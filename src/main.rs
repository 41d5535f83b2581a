//! Kanban MCP Server - Main Entry Point
//!
//! This is the main entry point for the kanban MCP server application.
//! The actual implementation is in the `kanban_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use kanban_mcp::KanbanServerHandler;
use mcp_attr::server::serve_stdio;
use std::io;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Kanban MCP Server - checklist-driven kanban board via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file
    file: String,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "kanban_mcp=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Initialize logging to stderr; stdout carries the MCP protocol
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(&args.log_level);

    let handler = KanbanServerHandler::new(&args.file)?;
    tracing::info!("Serving kanban board over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
