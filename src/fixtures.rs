//! Seed data: twenty sports named `sport 0` to `sport 19`.

use crate::error::AppError;
use crate::model::NewSport;
use crate::repository::SportRepository;

pub const FIXTURE_COUNT: usize = 20;

/// Purge the store, then insert the fixture sports in order.
pub async fn load_sport_fixtures(repo: &dyn SportRepository) -> Result<(), AppError> {
    repo.purge().await?;
    for i in 0..FIXTURE_COUNT {
        repo.insert(NewSport {
            name: format!("sport {}", i),
        })
        .await?;
    }
    tracing::info!(count = FIXTURE_COUNT, "sport fixtures loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySportRepository;

    #[tokio::test]
    async fn loads_twenty_sports_in_order() {
        let repo = InMemorySportRepository::new();
        load_sport_fixtures(&repo).await.unwrap();
        let sports = repo.find_all().await.unwrap();
        assert_eq!(sports.len(), FIXTURE_COUNT);
        assert_eq!(sports[0].name, "sport 0");
        assert_eq!(sports[19].name, "sport 19");
        assert_eq!(sports[19].id, 20);
    }

    #[tokio::test]
    async fn reloading_replaces_previous_rows() {
        let repo = InMemorySportRepository::new();
        repo.insert(NewSport { name: "stale".into() }).await.unwrap();
        load_sport_fixtures(&repo).await.unwrap();
        load_sport_fixtures(&repo).await.unwrap();
        let sports = repo.find_all().await.unwrap();
        assert_eq!(sports.len(), FIXTURE_COUNT);
        assert!(repo.find_by_name("stale").await.unwrap().is_none());
    }
}
