#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use crm_lite::{
    config::{Config, ReportingConfig},
    database::{create_database_pool, run_migrations, Database},
    seed, AppState,
};

/// A fresh in-memory database with the reporting tables and no rows.
pub async fn empty_db() -> Database {
    let db = create_database_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory database");
    run_migrations(&db).await.expect("migrations");
    db
}

/// An in-memory database loaded with the demo data set.
pub async fn seeded_db() -> Database {
    let db = empty_db().await;
    seed::insert_demo_data(&db).await.expect("seed data");
    db
}

pub fn test_state(db: Database, static_dir: &Path) -> AppState {
    let config = Config {
        reporting: ReportingConfig {
            admin_token: "admin".to_string(),
            static_dir: static_dir.to_path_buf(),
        },
        ..Config::default()
    };

    AppState {
        db,
        config: Arc::new(config),
    }
}
