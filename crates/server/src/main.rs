//! Standalone token server.

use anyhow::Result;
use clap::Parser;
use isomap_server::ServerConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "isomap-server")]
#[command(version, about = "Serve the Mapbox token to the isochrone map", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    config: ServerConfig,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    isomap_server::run(cli.config).await
}
