//! Sport API: CRUD REST resource for sports backed by PostgreSQL.

pub mod error;
pub mod extractors;
pub mod fixtures;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validation;

pub use error::{AppError, ConfigError};
pub use fixtures::load_sport_fixtures;
pub use model::{NewSport, Sport, SportPayload};
pub use repository::{InMemorySportRepository, PgSportRepository, SportRepository};
pub use routes::{app_router, common_routes, sport_routes};
pub use service::SportService;
pub use settings::{AppConfig, LogFormat, StoreKind};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_sport_table};
pub use telemetry::init_tracing;
