use sea_orm::entity::prelude::*;

/// Written by the album sync tool only; the site never reads tracks.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tracks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub album_id: Uuid,
    pub title: String,
    pub track_number: i32,
    pub duration_seconds: i32,
    /// Comma separated, e.g. "Artist B, Artist C"
    pub featured_artists: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
