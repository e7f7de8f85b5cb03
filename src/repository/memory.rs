//! In-process sport store. Same contract as the PostgreSQL one, including
//! the unique `name` constraint.

use super::SportRepository;
use crate::error::AppError;
use crate::model::{NewSport, Sport};
use crate::validation::Violation;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Sport>,
    last_id: i64,
}

impl Table {
    fn name_clash(&self, name: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|s| s.name == name && Some(s.id) != except)
    }
}

#[derive(Default)]
pub struct InMemorySportRepository {
    table: RwLock<Table>,
}

impl InMemorySportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SportRepository for InMemorySportRepository {
    async fn find_all(&self) -> Result<Vec<Sport>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Sport>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Sport>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|s| s.name == name).cloned())
    }

    async fn insert(&self, sport: NewSport) -> Result<Sport, AppError> {
        let mut table = self.table.write().await;
        if table.name_clash(&sport.name, None) {
            return Err(AppError::Validation(vec![Violation::name_taken(&sport.name)]));
        }
        table.last_id += 1;
        let stored = Sport {
            id: table.last_id,
            name: sport.name,
        };
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, sport: &Sport) -> Result<Sport, AppError> {
        let mut table = self.table.write().await;
        if table.name_clash(&sport.name, Some(sport.id)) {
            return Err(AppError::Validation(vec![Violation::name_taken(&sport.name)]));
        }
        let row = table.rows.get_mut(&sport.id).ok_or(AppError::NotFound)?;
        row.name = sport.name.clone();
        Ok(row.clone())
    }

    async fn delete(&self, sport: &Sport) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        table.rows.remove(&sport.id).ok_or(AppError::NotFound)?;
        Ok(())
    }

    async fn purge(&self) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        *table = Table::default();
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
