//! Makai MCP Server - Main entrypoint.
//!
//! This is the main entry point for the Makai MCP Server application.
//! It initializes the logging system, loads configuration, and starts the
//! stdio server loop.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use makai_mcp_lib::config::{ConfigLoader, MakaiConfig};
use makai_mcp_lib::error::{MakaiError, MakaiResult};
use makai_mcp_lib::protocol::jsonrpc::RequestDispatcher;
use makai_mcp_lib::protocol::server::McpServer;
use makai_mcp_lib::scraper::{PageScraper, WebScraper};
use makai_mcp_lib::tools;

/// Command line arguments for the Makai MCP Server.
#[derive(Parser, Debug)]
#[clap(name = "Makai MCP Server", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the server
    Start,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Diagnostics always go to stderr: stdout is the protocol channel and
/// must carry nothing but response lines.
fn init_logging() -> MakaiResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MakaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> MakaiResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "MAKAI";
    let config_loader = ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command.unwrap_or(Command::Start) {
        Command::Start => {
            info!("Starting Makai MCP Server");

            // Load and validate configuration
            let config = match config_loader.load() {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            info!(
                "Server configured with name: {}, fetch timeout: {} ms",
                config.server.name, config.http.request_timeout_ms
            );

            // Construct the scraper up front; a failure here is a startup
            // failure and exits non-zero.
            let scraper: Arc<dyn PageScraper> = match WebScraper::new(&config.http) {
                Ok(scraper) => Arc::new(scraper),
                Err(e) => {
                    tracing::error!("Failed to construct scraper: {}", e);
                    process::exit(1);
                }
            };

            let registry = tools::standard_registry(scraper);
            let server = McpServer::new(RequestDispatcher::new(registry), &config.server);

            if let Err(e) = server.run().await {
                tracing::error!("Server terminated: {}", e);
                process::exit(1);
            }

            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = MakaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MakaiError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MakaiError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(MakaiError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
