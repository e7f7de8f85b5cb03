//! Sport API server: reads settings, prepares the store, serves the routes.

use sport_api::{
    app_router, ensure_database_exists, ensure_sport_table, init_tracing, load_sport_fixtures,
    AppConfig, AppState, InMemorySportRepository, PgSportRepository, SportRepository, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let repo: Arc<dyn SportRepository> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_sport_table(&pool, &config.schema).await?;
            Arc::new(PgSportRepository::new(pool, &config.schema))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(InMemorySportRepository::new())
        }
    };

    if config.load_fixtures {
        load_sport_fixtures(repo.as_ref()).await?;
    }

    let state = AppState {
        repo,
        redact_internal_errors: config.redact_internal_errors,
    };
    let app = app_router(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
