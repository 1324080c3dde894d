use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crm_lite::{
    create_router,
    database::{create_database_pool, run_migrations},
    AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crm_lite=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("loading configuration")?;
    tracing::info!(environment = %config.environment, "Starting CRM Lite");

    let db = create_database_pool(&config.database.url, config.database.max_connections)
        .await
        .context("connecting to database")?;

    if config.database.run_migrations {
        run_migrations(&db).await.context("running migrations")?;
        tracing::info!("Migrations completed");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("parsing server address")?;

    let app = create_router(AppState {
        db,
        config: Arc::new(config),
    });

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
