use anyhow::Context;
use clap::{Parser, ValueEnum};
use rankx::seed::{bundled_catalogue, load_catalogue};
use rankx::{EngineConfig, PairingStrategy, RankingEngine, RestApi};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Pairing {
    /// Both sides uniformly at random
    Uniform,
    /// Experimental: favour opponents with similar ratings
    Proximity,
}

/// A pairwise-comparison ranking server
#[derive(Parser, Debug)]
#[command(name = "rankx")]
#[command(about = "Rank items from pairwise votes with Elo ratings", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level, overridden by RUST_LOG when set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// JSON catalogue of starting items (defaults to the bundled heritage sites)
    #[arg(short, long)]
    seed_file: Option<PathBuf>,

    /// How matchups are drawn. `uniform` is the default; `proximity` is experimental
    /// and favours pairs with close ratings
    #[arg(long, value_enum, default_value_t = Pairing::Uniform)]
    pairing: Pairing,

    /// Preference for close ratings with --pairing proximity (experimental)
    #[arg(long, default_value_t = 1.0)]
    sharpness: f64,

    /// Number of votes listed when a request gives no usable limit
    #[arg(long, default_value_t = rankx_core::DEFAULT_RECENT_LIMIT)]
    recent_limit: usize,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            default_recent_limit: self.recent_limit,
            pairing: match self.pairing {
                Pairing::Uniform => PairingStrategy::Uniform,
                Pairing::Proximity => PairingStrategy::Proximity {
                    sharpness: self.sharpness,
                },
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting RankX v{}", env!("CARGO_PKG_VERSION"));

    let engine = RankingEngine::in_memory(args.engine_config())?;
    let catalogue = match &args.seed_file {
        Some(path) => {
            info!("Seed file: {:?}", path);
            load_catalogue(path)?
        }
        None => bundled_catalogue()?,
    };
    engine.seed(catalogue)?;
    let engine = Arc::new(engine);
    info!("Engine initialized with {} items", engine.stats().total_items);

    let engine_http = engine.clone();
    let host = args.host.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", host, http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, &host, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("RankX started successfully");
    info!("HTTP API: http://localhost:{}/api", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    let stats = engine.stats();
    info!(
        total_votes = stats.total_votes,
        total_items = stats.total_items,
        "Shutting down..."
    );
    Ok(())
}
