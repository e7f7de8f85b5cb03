//! PostgreSQL-backed sport store.

use super::SportRepository;
use crate::error::AppError;
use crate::model::{NewSport, Sport};
use crate::store::qualified_sport_table;
use crate::validation::Violation;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgSportRepository {
    pool: PgPool,
    /// Schema-qualified, quoted table name.
    table: String,
}

impl PgSportRepository {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgSportRepository {
            pool,
            table: qualified_sport_table(schema),
        }
    }
}

/// Unique-constraint failures come back as the same violation the validator
/// reports, so a lost check-then-write race still answers 400.
fn map_write_error(err: sqlx::Error, name: &str) -> AppError {
    match err.as_database_error() {
        Some(db) if db.is_unique_violation() => AppError::Validation(vec![Violation::name_taken(name)]),
        _ => AppError::Db(err),
    }
}

#[async_trait]
impl SportRepository for PgSportRepository {
    async fn find_all(&self) -> Result<Vec<Sport>, AppError> {
        let sql = format!("SELECT id, name FROM {} ORDER BY id", self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Sport>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Sport>, AppError> {
        let sql = format!("SELECT id, name FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Sport>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Sport>, AppError> {
        let sql = format!("SELECT id, name FROM {} WHERE name = $1", self.table);
        tracing::debug!(sql = %sql, sport_name = %name, "query");
        let row = sqlx::query_as::<_, Sport>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, sport: NewSport) -> Result<Sport, AppError> {
        let sql = format!("INSERT INTO {} (name) VALUES ($1) RETURNING id, name", self.table);
        tracing::debug!(sql = %sql, sport_name = %sport.name, "query");
        sqlx::query_as::<_, Sport>(&sql)
            .bind(&sport.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &sport.name))
    }

    async fn update(&self, sport: &Sport) -> Result<Sport, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1 WHERE id = $2 RETURNING id, name",
            self.table
        );
        tracing::debug!(sql = %sql, id = sport.id, sport_name = %sport.name, "query");
        sqlx::query_as::<_, Sport>(&sql)
            .bind(&sport.name)
            .bind(sport.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &sport.name))?
            .ok_or(AppError::NotFound)
    }

    async fn delete(&self, sport: &Sport) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id = sport.id, "query");
        let done = sqlx::query(&sql).bind(sport.id).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn purge(&self) -> Result<(), AppError> {
        let sql = format!("TRUNCATE {} RESTART IDENTITY", self.table);
        tracing::debug!(sql = %sql, "query");
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
