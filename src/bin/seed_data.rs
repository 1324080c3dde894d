//! Seed data script: creates the reporting tables and fills them with a demo data set.
//!
//! Run with: cargo run --bin seed-data
//!
//! The database is taken from the same configuration as the server
//! (`CRM_DATABASE__URL`, default `sqlite:data.db`).

use anyhow::Context;
use tracing::info;

use crm_lite::{
    database::{create_database_pool, run_migrations},
    seed, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::load().context("loading configuration")?;

    info!("Connecting to database: {}", config.database.url);
    let db = create_database_pool(&config.database.url, 1).await?;
    run_migrations(&db).await?;

    seed::insert_demo_data(&db)
        .await
        .context("inserting demo data (is the database already seeded?)")?;

    info!("  Created {} products", seed::PRODUCTS.len());
    info!("  Created {} customers", seed::CUSTOMERS.len());
    info!("  Created {} suppliers", seed::SUPPLIERS.len());
    info!("  Created {} activity records", seed::ACTIVITY.len());
    info!("");
    info!("Try: http://localhost:3000/identify?userId=admin");

    Ok(())
}
