use std::sync::Arc;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::Serialize;
use uuid::Uuid;

use crate::database::Database;
use crate::entities;
use crate::services::soft_fail;

use entities::award::{Column, Entity as Award};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardView {
    pub id: Uuid,
    pub title: String,
    pub award_type: String,
    pub year: i32,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl From<entities::award::Model> for AwardView {
    fn from(award: entities::award::Model) -> Self {
        Self {
            id: award.id,
            title: award.title,
            award_type: award.award_type,
            year: award.year,
            url: award.url,
            description: award.description,
        }
    }
}

#[derive(Clone)]
pub struct AwardService {
    db: Arc<Database>,
}

impl AwardService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Featured awards by display order, newest year first within an order.
    fn featured() -> Select<Award> {
        Award::find()
            .filter(Column::IsFeatured.eq(true))
            .order_by_asc(Column::DisplayOrder)
            .order_by_desc(Column::Year)
    }

    pub async fn get_awards(&self) -> Vec<AwardView> {
        let awards = Self::featured().all(&self.db.conn).await;
        soft_fail("list awards", awards)
            .into_iter()
            .map(AwardView::from)
            .collect()
    }

    pub async fn get_awards_by_artist_id(&self, artist_id: Uuid) -> Vec<AwardView> {
        let awards = Self::featured()
            .filter(Column::ArtistId.eq(artist_id))
            .all(&self.db.conn)
            .await;
        soft_fail("list awards by artist", awards)
            .into_iter()
            .map(AwardView::from)
            .collect()
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<AwardView> {
        let award = Award::find_by_id(id).one(&self.db.conn).await;
        soft_fail("get award by id", award).map(AwardView::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_artist, insert_award, test_db};

    #[tokio::test]
    async fn test_awards_featured_only_and_ordered() {
        let db = test_db().await;
        insert_award(&db, None, "Hidden", 2024, 0, false).await;
        insert_award(&db, None, "Second slot", 2024, 2, true).await;
        insert_award(&db, None, "First slot old", 2019, 1, true).await;
        insert_award(&db, None, "First slot new", 2023, 1, true).await;
        let service = AwardService::new(db);

        let titles: Vec<_> = service
            .get_awards()
            .await
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["First slot new", "First slot old", "Second slot"]);
    }

    #[tokio::test]
    async fn test_awards_by_artist() {
        let db = test_db().await;
        let artist = insert_artist(&db, "Lowg", None).await;
        insert_award(&db, Some(artist.id), "Mine", 2022, 1, true).await;
        insert_award(&db, None, "Unlinked", 2022, 0, true).await;
        let service = AwardService::new(db);

        let awards = service.get_awards_by_artist_id(artist.id).await;
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].title, "Mine");
        assert_eq!(awards[0].award_type, "Winner");
        assert!(service.get_awards_by_artist_id(Uuid::new_v4()).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = test_db().await;
        let award = insert_award(&db, None, "One", 2022, 1, false).await;
        let service = AwardService::new(db);

        assert_eq!(service.get_by_id(award.id).await.unwrap().year, 2022);
        assert!(service.get_by_id(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_awards_backend_error_is_empty() {
        let conn = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        let service = AwardService::new(Arc::new(Database { conn }));

        assert!(service.get_awards().await.is_empty());
    }
}
