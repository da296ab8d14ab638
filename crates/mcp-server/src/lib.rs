//! Useless MCP Server
//!
//! Serves a fixed catalog of cross-occupational learning cards to MCP hosts
//! over HTTP.
//!
//! ## Tools
//!
//! - `get_learning_card` - One card by id, occupation or category (random otherwise)
//! - `list_all_cards` - Every card's id, title, occupation and category
//! - `search_cards` - Case-insensitive keyword search
//!
//! ## Endpoints
//!
//! - `GET /` - health report
//! - `POST /mcp` - JSON-RPC requests
//! - `GET /cards/{id}/preview` - rendered card HTML

use anyhow::Result;
use clap::Parser;
use std::io;
use std::sync::Arc;
use useless_catalog::Catalog;
use useless_widget::{CardRenderer, WidgetBundle};

pub mod config;
pub mod dispatch;
pub mod format;
pub mod http;
pub mod tools;

pub use config::{Cli, ServerConfig};
pub use dispatch::{McpServer, Method, RequestError};
pub use http::{router, AppState};
pub use tools::{call_tool, tool_definitions, ToolError, ToolName};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

pub fn print_tools_json() -> Result<String> {
    let payload = serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "tools": tool_definitions(),
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Loads the catalog and widget bundle; failures degrade instead of abort.
pub fn build_state(config: &ServerConfig) -> Result<AppState> {
    let catalog = Catalog::load_or_empty(&config.data_path);
    let widget = WidgetBundle::load_or_missing(&config.bundle_path);
    Ok(AppState {
        server: McpServer::new(catalog, widget),
        renderer: CardRenderer::new()?,
    })
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = Arc::new(build_state(&config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;

    log::info!("Useless MCP Server running on http://{local_addr}");
    log::info!(
        "MCP endpoint available at http://{local_addr}{}",
        http::MCP_ENDPOINT
    );
    log::info!("Health check at http://{local_addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_tools {
        return print_stdout(&print_tools_json()?);
    }

    config::init_logging(&cli);
    let config = ServerConfig::resolve(&cli)?;
    serve(config).await
}
