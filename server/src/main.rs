mod api;
mod app;
mod auth;
mod catalog;
mod config;
mod db;
mod error;
mod models;
mod raw_sql;
mod schema;
mod state;
mod telemetry;

use anyhow::Context;
use auth::JwtKeys;
use clap::Parser;
use config::ServerConfig;
use receptai_core::ai::create_client_from_env;
use receptai_core::catalog::load_catalog_file;
use receptai_core::detection::create_detector_from_env;
use state::AppContext;
use std::path::PathBuf;
use std::sync::Arc;

pub use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "receptai-server", about = "ReceptAI HTTP API server")]
struct Args {
    /// Print the OpenAPI document and exit
    #[arg(long)]
    openapi: bool,

    /// Validate and import a dish catalog JSON file, then exit
    #[arg(long, value_name = "FILE")]
    import_dishes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.openapi {
        let spec = api::openapi()
            .to_pretty_json()
            .context("Failed to serialize OpenAPI spec")?;
        println!("{}", spec);
        return Ok(());
    }

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    telemetry::init_telemetry()?;

    let config = ServerConfig::from_env()?;
    let pool = db::create_pool(&config.database_url)?;

    if let Some(path) = args.import_dishes {
        let dishes = load_catalog_file(&path)
            .with_context(|| format!("Invalid catalog file {}", path.display()))?;
        let mut conn = pool.get().context("Failed to get DB connection")?;
        let summary = catalog::import_dishes(&mut conn, &dishes).context("Catalog import failed")?;
        tracing::info!(
            inserted = summary.inserted,
            upserted = summary.upserted,
            "Imported dishes from {}",
            path.display()
        );
        return Ok(());
    }

    let detector = create_detector_from_env().context("Failed to configure product detector")?;
    let ai_client = create_client_from_env().context("Failed to configure recipe generator")?;

    tracing::info!(
        detector = detector.detector_name(),
        token_ttl_minutes = config.access_token_expire_minutes,
        "Configured services"
    );

    let state: AppState = Arc::new(AppContext {
        pool,
        jwt: JwtKeys::new(&config.secret_key, config.access_token_expire_minutes),
        detector: Arc::from(detector),
        ai_client: Arc::from(ai_client),
    });

    let app = app::build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);
    tracing::info!(
        "OpenAPI spec available at http://{}/api-docs/openapi.json",
        local_addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
