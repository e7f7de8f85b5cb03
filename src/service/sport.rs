//! Sport lifecycle: list, create, update, delete on top of a repository.

use crate::error::AppError;
use crate::model::{NewSport, Sport, SportDraft, SportPayload};
use crate::repository::SportRepository;
use crate::validation::SportValidator;

pub struct SportService;

impl SportService {
    pub async fn list(repo: &dyn SportRepository) -> Result<Vec<Sport>, AppError> {
        repo.find_all().await
    }

    /// Validate then insert. The store assigns the id.
    pub async fn create(repo: &dyn SportRepository, payload: SportPayload) -> Result<Sport, AppError> {
        let draft = SportDraft::from_payload(payload);
        let name = SportValidator::validate(repo, &draft).await?;
        let sport = repo.insert(NewSport { name: name.to_string() }).await?;
        tracing::info!(id = sport.id, "sport created");
        Ok(sport)
    }

    pub async fn get(repo: &dyn SportRepository, id: i64) -> Result<Sport, AppError> {
        repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Overlay the payload onto the stored sport, validate the result, persist it.
    pub async fn update(
        repo: &dyn SportRepository,
        current: &Sport,
        payload: SportPayload,
    ) -> Result<Sport, AppError> {
        let draft = SportDraft::overlay(current, payload);
        let name = SportValidator::validate(repo, &draft).await?;
        let merged = Sport {
            id: current.id,
            name: name.to_string(),
        };
        let sport = repo.update(&merged).await?;
        tracing::info!(id = sport.id, "sport updated");
        Ok(sport)
    }

    pub async fn delete(repo: &dyn SportRepository, id: i64) -> Result<(), AppError> {
        let sport = Self::get(repo, id).await?;
        repo.delete(&sport).await?;
        tracing::info!(id, "sport deleted");
        Ok(())
    }
}
