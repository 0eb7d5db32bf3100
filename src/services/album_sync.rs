use std::fmt::Write;

use chrono::Datelike;
use color_eyre::{Result, eyre::Context, eyre::eyre};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::database::Database;
use crate::entities::album::{self, AlbumType};
use crate::entities::track;
use crate::spotify_embed::EmbedEntity;

/// One row destined for the `tracks` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedTrack {
    pub title: String,
    pub track_number: i32,
    pub duration_seconds: i32,
    pub featured_artists: Option<String>,
}

/// Everything `sync-album` writes for one album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSync {
    pub spotify_album_id: String,
    pub name: String,
    pub raw_type: String,
    pub album_type: AlbumType,
    pub release_date: String,
    pub release_year: i32,
    pub tracks: Vec<SyncedTrack>,
}

impl AlbumSync {
    pub fn from_entity(spotify_album_id: &str, entity: EmbedEntity, current_year: i32) -> Self {
        let raw_type = entity.entity_type.unwrap_or_else(|| "album".to_string());
        let album_type = raw_type.parse().unwrap_or_else(|_| {
            tracing::warn!(album_type = %raw_type, "Unrecognised album type, storing as Album");
            AlbumType::Album
        });
        let release_date = entity
            .release_date
            .and_then(|date| date.iso_string)
            .unwrap_or_default();

        let tracks = entity
            .track_list
            .into_iter()
            .enumerate()
            .map(|(index, track)| {
                let track_number = index as i32 + 1;
                SyncedTrack {
                    title: track
                        .title
                        .or(track.name)
                        .filter(|title| !title.is_empty())
                        .unwrap_or_else(|| format!("Track {track_number}")),
                    track_number,
                    duration_seconds: (track.duration.unwrap_or(0.0) / 1000.0).round() as i32,
                    featured_artists: featured_from_subtitle(track.subtitle.as_deref()),
                }
            })
            .collect();

        Self {
            spotify_album_id: spotify_album_id.to_string(),
            name: entity
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            raw_type,
            album_type,
            release_year: release_year(&release_date, current_year),
            release_date,
            tracks,
        }
    }

    /// Human readable overview of what was found.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Found: {}", self.name);
        let _ = writeln!(out, "  Type: {}", self.raw_type);
        let _ = writeln!(out, "  Tracks: {}", self.tracks.len());
        let _ = writeln!(out, "  Release: {}", self.release_date);
        let _ = writeln!(out);
        let _ = writeln!(out, "Tracks:");
        for track in &self.tracks {
            let feat = track
                .featured_artists
                .as_deref()
                .map(|feat| format!(" (ft. {feat})"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {}. {} - {}{}",
                track.track_number,
                track.title,
                format_duration(track.duration_seconds),
                feat
            );
        }
        out
    }

    /// SQL that applies this sync by hand.
    pub fn to_sql(&self, slug: &str) -> String {
        let slug = sql_literal(slug);
        let album_id = format!("(SELECT id FROM albums WHERE slug = {slug})");

        let mut out = String::new();
        let _ = writeln!(out, "-- Update album");
        let _ = writeln!(out, "UPDATE albums SET");
        let _ = writeln!(
            out,
            "    spotify_album_id = {},",
            sql_literal(&self.spotify_album_id)
        );
        let _ = writeln!(out, "    release_year = {},", self.release_year);
        let _ = writeln!(out, "    album_type = {}", sql_literal(self.album_type.as_str()));
        let _ = writeln!(out, "WHERE slug = {slug};");
        let _ = writeln!(out);
        let _ = writeln!(out, "-- Delete old tracks");
        let _ = writeln!(out, "DELETE FROM tracks WHERE album_id = {album_id};");

        if !self.tracks.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "-- Insert new tracks");
            let _ = writeln!(
                out,
                "INSERT INTO tracks (album_id, title, track_number, duration_seconds, featured_artists) VALUES"
            );
            let last = self.tracks.len() - 1;
            for (i, track) in self.tracks.iter().enumerate() {
                let featured = track
                    .featured_artists
                    .as_deref()
                    .map(sql_literal)
                    .unwrap_or_else(|| "NULL".to_string());
                let _ = writeln!(
                    out,
                    "    ({album_id}, {}, {}, {}, {featured}){}",
                    sql_literal(&track.title),
                    track.track_number,
                    track.duration_seconds,
                    if i == last { ";" } else { "," }
                );
            }
        }
        out
    }

    /// Write the sync straight into the database.
    ///
    /// Steps run one after another with no transaction: a failure part way
    /// leaves the earlier steps applied.
    pub async fn apply(&self, db: &Database, slug: &str) -> Result<usize> {
        album::Entity::update_many()
            .col_expr(
                album::Column::SpotifyAlbumId,
                Expr::value(self.spotify_album_id.clone()),
            )
            .col_expr(album::Column::ReleaseYear, Expr::value(self.release_year))
            .col_expr(
                album::Column::AlbumType,
                Expr::value(self.album_type.as_str()),
            )
            .filter(album::Column::Slug.eq(slug))
            .exec(&db.conn)
            .await
            .wrap_err("Album update failed")?;

        let album = album::Entity::find()
            .filter(album::Column::Slug.eq(slug))
            .one(&db.conn)
            .await
            .wrap_err("Album lookup failed")?
            .ok_or_else(|| eyre!("Album not found: {slug}"))?;

        let deleted = track::Entity::delete_many()
            .filter(track::Column::AlbumId.eq(album.id))
            .exec(&db.conn)
            .await
            .wrap_err("Failed to delete old tracks")?;
        tracing::debug!(deleted = deleted.rows_affected, slug, "Removed old tracks");

        if self.tracks.is_empty() {
            return Ok(0);
        }

        let rows = self.tracks.iter().map(|t| track::ActiveModel {
            id: sea_orm::Set(Uuid::new_v4()),
            album_id: sea_orm::Set(album.id),
            title: sea_orm::Set(t.title.clone()),
            track_number: sea_orm::Set(t.track_number),
            duration_seconds: sea_orm::Set(t.duration_seconds),
            featured_artists: sea_orm::Set(t.featured_artists.clone()),
            ..Default::default()
        });
        track::Entity::insert_many(rows)
            .exec(&db.conn)
            .await
            .wrap_err("Tracks insert failed")?;

        tracing::info!(slug, tracks = self.tracks.len(), "Album synced");
        Ok(self.tracks.len())
    }
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Year from an ISO date such as `2023-06-02T00:00:00Z`.
pub fn release_year(iso_date: &str, current_year: i32) -> i32 {
    iso_date
        .split('-')
        .next()
        .and_then(|year| year.trim().parse::<i32>().ok())
        .filter(|year| *year != 0)
        .unwrap_or(current_year)
}

/// `"Main, Guest One, Guest Two"` gives `"Guest One, Guest Two"`.
pub fn featured_from_subtitle(subtitle: Option<&str>) -> Option<String> {
    let featured = subtitle?.split(", ").skip(1).collect::<Vec<_>>().join(", ");
    if featured.is_empty() {
        None
    } else {
        Some(featured)
    }
}

/// `m:ss`.
pub fn format_duration(seconds: i32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
