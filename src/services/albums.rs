use std::sync::Arc;

use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use uuid::Uuid;

use crate::database::Database;
use crate::entities;
use crate::entities::album::AlbumType;
use crate::services::soft_fail;
use crate::services::storage::StorageLocation;

use entities::album::{Column, Entity as Album};

/// Album row shaped for rendering. Storage paths are already absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumView {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub bio: Option<String>,
    pub cover_url: Option<String>,
    pub year: i32,
    pub featured_artist: String,
    pub album_type: AlbumType,
    pub genre: Option<String>,
    pub youtube_video_id: Option<String>,
    pub spotify_album_id: Option<String>,
    pub spotify_url: Option<String>,
    pub is_featured: bool,
}

impl AlbumView {
    /// Bio, or a one-line summary when the album has none.
    pub fn description(&self) -> String {
        match &self.bio {
            Some(bio) if !bio.trim().is_empty() => bio.clone(),
            _ => format!("{} released in {}.", self.album_type, self.year),
        }
    }
}

/// Map a raw row into its view model.
pub fn transform_album(location: &StorageLocation, album: entities::album::Model) -> AlbumView {
    AlbumView {
        id: album.id,
        cover_url: location.resolve_optional(album.cover_url.as_deref()),
        slug: album.slug,
        title: album.title,
        bio: album.bio,
        year: album.release_year,
        featured_artist: album
            .featured_artists
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "None".to_string()),
        album_type: album.album_type,
        genre: album.genre,
        youtube_video_id: album.youtube_video_id,
        spotify_album_id: album.spotify_album_id,
        spotify_url: album.spotify_url,
        is_featured: album.is_featured,
    }
}

/// Read access to the album catalog. Every query fails soft.
#[derive(Clone)]
pub struct AlbumService {
    db: Arc<Database>,
    location: StorageLocation,
}

impl AlbumService {
    pub fn new(db: Arc<Database>, location: StorageLocation) -> Self {
        Self { db, location }
    }

    fn to_views(&self, albums: Vec<entities::album::Model>) -> Vec<AlbumView> {
        albums
            .into_iter()
            .map(|album| transform_album(&self.location, album))
            .collect()
    }

    /// Whole catalog by display order.
    pub async fn list_all(&self) -> Vec<AlbumView> {
        let albums = Album::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&self.db.conn)
            .await;
        self.to_views(soft_fail("list albums", albums))
    }

    pub async fn list_featured(&self, limit: u64) -> Vec<AlbumView> {
        let albums = Album::find()
            .filter(Column::IsFeatured.eq(true))
            .order_by_asc(Column::DisplayOrder)
            .limit(limit)
            .all(&self.db.conn)
            .await;
        self.to_views(soft_fail("list featured albums", albums))
    }

    /// Newest release first.
    pub async fn list_by_type(&self, album_type: AlbumType) -> Vec<AlbumView> {
        let albums = Album::find()
            .filter(Column::AlbumType.eq(album_type))
            .order_by_desc(Column::ReleaseYear)
            .all(&self.db.conn)
            .await;
        self.to_views(soft_fail(&format!("list {}s", album_type), albums))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Option<AlbumView> {
        let album = Album::find()
            .filter(Column::Slug.eq(slug))
            .one(&self.db.conn)
            .await;
        let album = soft_fail("get album by slug", album);
        if album.is_none() {
            tracing::warn!(slug, "Album not found");
        }
        album.map(|album| transform_album(&self.location, album))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<AlbumView> {
        let album = Album::find_by_id(id).one(&self.db.conn).await;
        soft_fail("get album by id", album).map(|album| transform_album(&self.location, album))
    }

    /// Circular successor of `current_slug` in display order.
    ///
    /// The smallest display order above the current one wins; past the end it
    /// wraps to the smallest display order of any other album. `None` when the
    /// slug is unknown or it is the only album.
    pub async fn get_next(&self, current_slug: &str) -> Option<AlbumView> {
        let next = self.find_next(current_slug).await;
        soft_fail("get next album", next).map(|album| transform_album(&self.location, album))
    }

    async fn find_next(&self, current_slug: &str) -> Result<Option<entities::album::Model>, DbErr> {
        let current = Album::find()
            .filter(Column::Slug.eq(current_slug))
            .one(&self.db.conn)
            .await?;

        let Some(current_order) = current.map(|album| album.display_order) else {
            return Ok(None);
        };

        let next = Album::find()
            .filter(Column::DisplayOrder.gt(current_order))
            .order_by_asc(Column::DisplayOrder)
            .one(&self.db.conn)
            .await?;

        if next.is_some() {
            return Ok(next);
        }

        Album::find()
            .filter(Column::Slug.ne(current_slug))
            .order_by_asc(Column::DisplayOrder)
            .one(&self.db.conn)
            .await
    }
}
