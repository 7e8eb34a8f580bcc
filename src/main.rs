use anyhow::Result;
use clap::Parser;
use golinks::config::Config;
use golinks::server;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Short-link redirector.
#[derive(Parser)]
#[command(name = "golinks")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port number to listen on (overrides LISTEN)
    #[arg(long)]
    http_port: Option<u16>,

    /// Redirects file (overrides REDIRECTS_FILE)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(port) = args.http_port {
        config = config.with_http_port(port);
    }
    if let Some(path) = args.config {
        config = config.with_redirects_file(path);
    }
    config.validate()?;

    init_tracing(&config)?;
    tracing::info!("Starting golinks...");
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}
