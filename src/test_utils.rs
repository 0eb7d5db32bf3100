use std::sync::Arc;

use sea_orm::{ActiveModelTrait, ConnectionTrait, Database as SeaDatabase, Set};
use uuid::Uuid;

use crate::database::Database;
use crate::entities;
use crate::entities::album::AlbumType;
use crate::services::storage::StorageLocation;

pub const TEST_STORAGE_URL: &str = "https://project.supabase.co";

pub fn test_location() -> StorageLocation {
    StorageLocation::new(TEST_STORAGE_URL, "artist_assets")
}

pub async fn test_db() -> Arc<Database> {
    let conn = SeaDatabase::connect("sqlite::memory:?mode=rwc")
        .await
        .unwrap();

    // Enable foreign keys
    conn.execute_unprepared("PRAGMA foreign_keys = ON")
        .await
        .unwrap();

    let schema = include_str!("../schema.sql");
    for stmt in schema.split(';') {
        let trimmed = stmt.trim();
        if !trimmed.is_empty() {
            // Strip comment-only lines
            let without_comments: String = trimmed
                .lines()
                .filter(|line| !line.trim_start().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n");
            let without_comments = without_comments.trim();
            if !without_comments.is_empty() {
                conn.execute_unprepared(without_comments)
                    .await
                    .unwrap_or_else(|e| {
                        panic!(
                            "Failed to execute SQL: {}\nStatement: {}",
                            e, without_comments
                        )
                    });
            }
        }
    }

    Arc::new(Database { conn })
}

/// Albums table row with everything optional left empty.
pub fn album_row(slug: &str, display_order: i32) -> entities::album::ActiveModel {
    entities::album::ActiveModel {
        id: Set(Uuid::new_v4()),
        slug: Set(slug.to_string()),
        title: Set(slug.to_uppercase()),
        bio: Set(None),
        release_year: Set(2024),
        album_type: Set(AlbumType::Album),
        genre: Set(None),
        featured_artists: Set(None),
        cover_url: Set(None),
        youtube_video_id: Set(None),
        spotify_album_id: Set(None),
        spotify_url: Set(None),
        is_featured: Set(false),
        display_order: Set(display_order),
        ..Default::default()
    }
}

pub async fn insert_album(db: &Database, row: entities::album::ActiveModel) -> entities::album::Model {
    row.insert(&db.conn).await.unwrap()
}

pub async fn insert_artist(
    db: &Database,
    name: &str,
    avatar_url: Option<&str>,
) -> entities::artist::Model {
    let artist = entities::artist::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        bio: Set(Some(format!("{name} makes records."))),
        avatar_url: Set(avatar_url.map(str::to_string)),
        ..Default::default()
    };
    artist.insert(&db.conn).await.unwrap()
}

pub async fn insert_award(
    db: &Database,
    artist_id: Option<Uuid>,
    title: &str,
    year: i32,
    display_order: i32,
    is_featured: bool,
) -> entities::award::Model {
    let award = entities::award::ActiveModel {
        id: Set(Uuid::new_v4()),
        artist_id: Set(artist_id),
        title: Set(title.to_string()),
        award_type: Set("Winner".to_string()),
        year: Set(year),
        url: Set(None),
        description: Set(None),
        display_order: Set(display_order),
        is_featured: Set(is_featured),
        ..Default::default()
    };
    award.insert(&db.conn).await.unwrap()
}
