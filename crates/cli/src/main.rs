//! isomap CLI - isochrone calculation from the command line

mod surface;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use isomap_app::{Command, Element, RecordingSurface, Session};
use isomap_client::blocking::{self, IsochroneClientBlocking};
use isomap_client::{IsochroneClient, IsochroneClientOptions};
use isomap_colormap::generate_gradient;
use isomap_core::steps::time_steps;
use isomap_core::{bounds, FeatureCollection, LngLat, TravelMode, TravelQuery};
use isomap_server::ServerConfig;

use crate::surface::TerminalSurface;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "isomap")]
#[command(author, version, about = "Travel-time isochrones from the Mapbox API", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a single or gradient isochrone around a point
    Calculate {
        #[command(flatten)]
        point: PointArgs,
        /// Draw a 12-band gradient instead of a single area
        #[arg(long)]
        gradient: bool,
        /// Outline the areas without filling them
        #[arg(long)]
        outlines_only: bool,
        /// Request gradient rings (bands are still drawn as full areas)
        #[arg(long)]
        rings: bool,
        #[command(flatten)]
        auth: TokenArgs,
        /// Directory to write one GeoJSON file per populated layer source
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch one isochrone and print or save the raw GeoJSON
    Fetch {
        #[command(flatten)]
        point: PointArgs,
        #[command(flatten)]
        auth: TokenArgs,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the gradient time thresholds for a maximum travel time
    Steps {
        /// Maximum travel time in minutes
        #[arg(long, default_value_t = 30)]
        max: u32,
        /// Number of thresholds
        #[arg(long, default_value_t = 12)]
        count: usize,
    },
    /// Print the gradient color palette
    Palette {
        /// Number of colors
        #[arg(long, default_value_t = 12)]
        steps: usize,
    },
    /// Run the token server
    Serve {
        #[command(flatten)]
        config: ServerConfig,
    },
    /// Fetch the access token from a running token server
    Token {
        /// Token endpoint URL
        #[arg(long, default_value = "http://127.0.0.1:3000/api/mapbox-token")]
        url: String,
    },
}

#[derive(Args)]
struct PointArgs {
    /// Longitude of the starting point
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
    /// Latitude of the starting point
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Maximum travel time in minutes
    #[arg(short, long, default_value_t = 30)]
    minutes: u32,
    /// Travel mode: driving, driving-traffic, walking, cycling, transit
    #[arg(long, default_value = "driving")]
    mode: TravelMode,
}

impl PointArgs {
    fn query(&self) -> Result<TravelQuery> {
        let point = LngLat::new(self.lng, self.lat).context("Invalid starting point")?;
        Ok(TravelQuery::new(point, self.minutes, self.mode))
    }
}

#[derive(Args)]
struct TokenArgs {
    /// Mapbox access token
    #[arg(long, env = "MAPBOX_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Token endpoint to ask when no token is given
    #[arg(long, conflicts_with = "token")]
    token_url: Option<String>,
}

impl TokenArgs {
    async fn resolve(&self) -> Result<String> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(token.to_string());
        }
        match &self.token_url {
            Some(url) => isomap_client::fetch_token(url)
                .await
                .with_context(|| format!("Failed to fetch token from {url}")),
            None => bail!("No access token: pass --token, set MAPBOX_TOKEN, or pass --token-url"),
        }
    }

    fn resolve_blocking(&self) -> Result<String> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(token.to_string());
        }
        match &self.token_url {
            Some(url) => blocking::fetch_token(url)
                .with_context(|| format!("Failed to fetch token from {url}")),
            None => bail!("No access token: pass --token, set MAPBOX_TOKEN, or pass --token-url"),
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("logging was already initialised");
    }
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn write_geojson(fc: &FeatureCollection, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(fc).context("Failed to encode GeoJSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn done(name: &str, elapsed: Duration) {
    println!("{name} finished");
    println!("  Processing time: {elapsed:.2?}");
}

// ─── Commands ───────────────────────────────────────────────────────────

struct CalculateArgs {
    query: TravelQuery,
    gradient: bool,
    outlines_only: bool,
    rings: bool,
}

async fn calculate(args: CalculateArgs, token: String) -> Result<RecordingSurface> {
    let client = IsochroneClient::new(token, IsochroneClientOptions::default())
        .context("Failed to build isochrone client")?;
    let label = if args.gradient {
        "Calculating gradient..."
    } else {
        "Calculating..."
    };
    let mut session = Session::new(client, TerminalSurface::new(spinner(label)));
    session.boot().await;

    let query = args.query;
    session.dispatch(Command::MapClicked(query.point)).await;
    session.dispatch(Command::TimeChanged(query.minutes)).await;
    session.dispatch(Command::ModeChanged(query.mode)).await;
    session.dispatch(Command::GradientToggled(args.gradient)).await;
    session.dispatch(Command::OutlinesOnlyToggled(args.outlines_only)).await;
    session.dispatch(Command::RingsToggled(args.rings)).await;
    session.dispatch(Command::CalculatePressed).await;

    debug!(
        triggers = session.surface().recorded().trigger_history.len(),
        "session finished"
    );
    Ok(session.into_surface().finish())
}

fn report(surface: &RecordingSurface, output: Option<&Path>) -> Result<()> {
    if let Some(alert) = surface.alerts.first() {
        bail!("{alert}");
    }

    if let Some(camera) = surface.camera {
        println!(
            "Bounds: [{:.5}, {:.5}] - [{:.5}, {:.5}]",
            camera.min().x,
            camera.min().y,
            camera.max().x,
            camera.max().y
        );
    }
    if surface.legend_visible {
        println!(
            "Legend: {} .. {}",
            surface.text(Element::MinTime).unwrap_or("-"),
            surface.text(Element::MaxTime).unwrap_or("-")
        );
    }

    if let Some(dir) = output {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    for (id, fc) in surface.populated_sources() {
        let visible = surface
            .layers
            .values()
            .any(|layer| layer.source == id && layer.visible);
        println!(
            "  {id}: {} feature(s){}",
            fc.len(),
            if visible { "" } else { " (hidden)" }
        );
        if let Some(dir) = output {
            let path = dir.join(format!("{id}.geojson"));
            write_geojson(fc, &path)?;
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn fetch(query: TravelQuery, token: String, output: Option<&Path>) -> Result<()> {
    let client = IsochroneClientBlocking::new(token, IsochroneClientOptions::default())
        .context("Failed to build isochrone client")?;
    let pb = spinner("Fetching isochrone...");
    let fc = client
        .fetch(&query)
        .with_context(|| format!("Failed to fetch isochrone at {}", query.point))?;
    pb.finish_and_clear();

    if let Some(rect) = bounds(&fc) {
        info!(
            "Extent: {:.5},{:.5} .. {:.5},{:.5}",
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y
        );
    }
    match output {
        Some(path) => {
            write_geojson(&fc, path)?;
            println!("Isochrone saved to: {}", path.display());
        }
        None => println!(
            "{}",
            serde_json::to_string_pretty(&fc).context("Failed to encode GeoJSON")?
        ),
    }
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Calculate {
            point,
            gradient,
            outlines_only,
            rings,
            auth,
            output,
        } => {
            let start = Instant::now();
            let args = CalculateArgs {
                query: point.query()?,
                gradient,
                outlines_only,
                rings,
            };
            info!(
                "Isochrone around {} ({} min, {})",
                args.query.point, args.query.minutes, args.query.mode
            );
            let surface = runtime()?.block_on(async {
                let token = auth.resolve().await?;
                calculate(args, token).await
            })?;
            report(&surface, output.as_deref())?;
            done("Calculation", start.elapsed());
        }

        Commands::Fetch {
            point,
            auth,
            output,
        } => {
            let start = Instant::now();
            let query = point.query()?;
            let token = auth.resolve_blocking()?;
            fetch(query, token, output.as_deref())?;
            done("Fetch", start.elapsed());
        }

        Commands::Steps { max, count } => {
            let steps = time_steps(max, count);
            if steps.is_empty() {
                bail!("No thresholds: max must be at least 5 minutes and count at least 1");
            }
            let line: Vec<String> = steps.iter().map(u32::to_string).collect();
            println!("{}", line.join(" "));
        }

        Commands::Palette { steps } => {
            for (i, color) in generate_gradient(steps).iter().enumerate() {
                println!("{i:>3}  {color}  {}", color.to_rgb().to_hex());
            }
        }

        Commands::Serve { config } => {
            info!("Starting token server: {config:?}");
            actix_web::rt::System::new()
                .block_on(isomap_server::run(config))
                .context("Token server failed")?;
        }

        Commands::Token { url } => {
            let token = blocking::fetch_token(&url)
                .with_context(|| format!("Failed to fetch token from {url}"))?;
            println!("{token}");
        }
    }

    Ok(())
}
