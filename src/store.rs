//! Database bootstrap: create the database and the `sport` table when missing.

use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const SPORT_TABLE: &str = "sport";

/// Quote identifier for PostgreSQL.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Schema-qualified, quoted name of the sport table (e.g. `"public"."sport"`).
pub fn qualified_sport_table(schema: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(SPORT_TABLE))
}

/// Create the schema and the sport table if they do not exist.
/// The UNIQUE constraint on `name` backs the application-level uniqueness check.
pub async fn ensure_sport_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            CONSTRAINT sport_name_key UNIQUE (name)
        )
        "#,
        qualified_sport_table(schema)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_connect_options(database_url)?;
    let db_name = match db_name {
        Some(name) if name != "postgres" => name,
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` admin database on the same server, plus the target database name.
fn admin_connect_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Internal(format!("invalid DATABASE_URL: {}", e)))?;
    let db_name = opts
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);
    Ok((opts.database("postgres"), db_name))
}
