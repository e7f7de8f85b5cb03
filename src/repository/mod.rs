//! Storage seam for sports. The service layer only talks to this trait.

mod memory;
mod postgres;

pub use memory::InMemorySportRepository;
pub use postgres::PgSportRepository;

use crate::error::AppError;
use crate::model::{NewSport, Sport};
use async_trait::async_trait;

#[async_trait]
pub trait SportRepository: Send + Sync {
    /// All sports in primary-key order.
    async fn find_all(&self) -> Result<Vec<Sport>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Sport>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Sport>, AppError>;

    /// Store a new sport and return it with its assigned id.
    /// A name clash caught by the store is reported as a validation failure.
    async fn insert(&self, sport: NewSport) -> Result<Sport, AppError>;

    /// Persist the name of an existing sport. `NotFound` if the row is gone.
    async fn update(&self, sport: &Sport) -> Result<Sport, AppError>;

    /// Remove a sport. `NotFound` if the row is gone.
    async fn delete(&self, sport: &Sport) -> Result<(), AppError>;

    /// Remove every sport and restart id generation.
    async fn purge(&self) -> Result<(), AppError>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
