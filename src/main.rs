use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cropwise_api::RestApi;
use cropwise_artifacts::ArtifactStore;

/// Crop recommendation service over pre-fitted scaling and classification artifacts
#[derive(Parser, Debug)]
#[command(name = "cropwise")]
#[command(about = "Serve crop recommendations from soil and climate measurements", long_about = None)]
struct Args {
    /// Path to the directory holding the fitted artifacts
    #[arg(short, long, default_value = "./artifacts")]
    artifact_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Cropwise v{}", env!("CARGO_PKG_VERSION"));
    info!("Artifact directory: {:?}", args.artifact_dir);
    info!("HTTP API port: {}", args.http_port);

    let store = Arc::new(ArtifactStore::load(&args.artifact_dir)?);
    info!("Artifacts loaded");

    info!("HTTP API: http://localhost:{}/", args.http_port);
    RestApi::start(store, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
