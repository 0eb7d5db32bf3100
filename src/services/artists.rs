use std::sync::Arc;

use sea_orm::EntityTrait;
use serde::Serialize;
use uuid::Uuid;

use crate::database::Database;
use crate::entities;
use crate::services::soft_fail;
use crate::services::storage::StorageLocation;

pub const DEFAULT_ROLE: &str = "Musician / Rapper";

const FALLBACK_NAME: &str = "Artist Name";
const FALLBACK_BIO: &str = "Artist bio goes here. Update your artist data in Supabase.";
const FALLBACK_AVATAR_PATH: &str = "avatars/profile.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistView {
    /// Row id, or `fallback` for the built-in placeholder artist.
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: String,
}

pub fn transform_artist(location: &StorageLocation, artist: entities::artist::Model) -> ArtistView {
    ArtistView {
        id: artist.id.to_string(),
        name: artist.name,
        bio: artist.bio,
        avatar_url: location.resolve_optional(artist.avatar_url.as_deref()),
        role: DEFAULT_ROLE.to_string(),
    }
}

/// Placeholder shown until an artist row exists.
pub fn fallback_artist(location: &StorageLocation) -> ArtistView {
    ArtistView {
        id: "fallback".to_string(),
        name: FALLBACK_NAME.to_string(),
        bio: Some(FALLBACK_BIO.to_string()),
        avatar_url: Some(location.public_url(FALLBACK_AVATAR_PATH)),
        role: DEFAULT_ROLE.to_string(),
    }
}

/// Single-artist deployment: the first row of `artists` is "the" artist.
#[derive(Clone)]
pub struct ArtistService {
    db: Arc<Database>,
    location: StorageLocation,
}

impl ArtistService {
    pub fn new(db: Arc<Database>, location: StorageLocation) -> Self {
        Self { db, location }
    }

    pub async fn get_main_artist(&self) -> Option<ArtistView> {
        let artist = entities::artist::Entity::find().one(&self.db.conn).await;
        let artist = soft_fail("get main artist", artist);
        if artist.is_none() {
            tracing::warn!("No artist found in database");
        }
        artist.map(|artist| transform_artist(&self.location, artist))
    }

    pub async fn get_main_artist_with_fallback(&self) -> ArtistView {
        match self.get_main_artist().await {
            Some(artist) => artist,
            None => fallback_artist(&self.location),
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<ArtistView> {
        let artist = entities::artist::Entity::find_by_id(id)
            .one(&self.db.conn)
            .await;
        soft_fail("get artist by id", artist).map(|artist| transform_artist(&self.location, artist))
    }
}
