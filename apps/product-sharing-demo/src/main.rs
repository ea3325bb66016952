//! Product Sharing demo
//!
//! Walks through product ownership, sharing, listing, and unsharing against
//! an in-process registry and narrates each access decision.
//!
//! # Usage
//!
//! ```bash
//! product-sharing-demo
//! product-sharing-demo --config demo.yaml -v
//! SHARING_DEMO__SHARING__LOG_DECISIONS=true product-sharing-demo -v
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod scenario;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use product_sharing::{ProductSharingLocalClient, ResourceRegistry};
use tracing_subscriber::EnvFilter;

use crate::config::{DemoConfig, LoggingConfig};

/// Product Sharing demo - ownership and share-list access checks
#[derive(Parser, Debug)]
#[command(name = "product-sharing-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref() {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    let mut config = DemoConfig::load(cli.config.as_deref())?;
    config.apply_verbosity(cli.verbose);

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    init_logging(&config.logging);

    let registry = Arc::new(ResourceRegistry::from_config(&config.sharing)?);
    tracing::debug!(policy = registry.policy_name(), "registry ready");

    let client = ProductSharingLocalClient::new(registry);
    let mut stdout = std::io::stdout().lock();
    scenario::run(&client, &mut stdout).await
}

/// Logs go to stderr so the narration on stdout stays clean.
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
