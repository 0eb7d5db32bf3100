use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Release kind. Albums, EPs and singles all live in the `albums` table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AlbumType {
    #[sea_orm(string_value = "Album")]
    Album,
    #[sea_orm(string_value = "EP")]
    EP,
    #[sea_orm(string_value = "Single")]
    Single,
}

impl AlbumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::Album => "Album",
            AlbumType::EP => "EP",
            AlbumType::Single => "Single",
        }
    }
}

impl fmt::Display for AlbumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown album type: {0}")]
pub struct UnknownAlbumType(pub String);

impl FromStr for AlbumType {
    type Err = UnknownAlbumType;

    /// Case-insensitive; `compilation` is filed as an album.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "album" | "compilation" => Ok(AlbumType::Album),
            "ep" => Ok(AlbumType::EP),
            "single" => Ok(AlbumType::Single),
            _ => Err(UnknownAlbumType(s.to_string())),
        }
    }
}

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "albums")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// URL key used by `/albums/{slug}`; also the media folder name in storage.
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub bio: Option<String>,
    pub release_year: i32,
    pub album_type: AlbumType,
    pub genre: Option<String>,
    pub featured_artists: Option<String>,
    /// Path relative to the storage bucket, e.g. `covers/album.jpg`.
    pub cover_url: Option<String>,
    pub youtube_video_id: Option<String>,
    pub spotify_album_id: Option<String>,
    pub spotify_url: Option<String>,
    pub is_featured: bool,
    /// Catalog position. Values are unique; `next` traversal relies on it.
    pub display_order: i32,
}

impl ActiveModelBehavior for ActiveModel {}
