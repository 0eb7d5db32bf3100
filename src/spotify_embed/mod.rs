//! Scrapes album metadata from the public Spotify embed page. No API
//! credentials are needed: the page ships its state as a `__NEXT_DATA__` JSON
//! blob.

mod types;

pub use types::{EmbedEntity, EmbedTrack, ReleaseDate};

use regex::Regex;
use reqwest::Client;

use types::NextData;

pub const EMBED_BASE_URL: &str = "https://open.spotify.com/embed/album";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const NEXT_DATA_PATTERN: &str = r#"(?s)<script id="__NEXT_DATA__"[^>]*>(.*?)</script>"#;

#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("Failed to send http request: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to fetch: {0}")]
    Status(reqwest::StatusCode),
    #[error("Could not find __NEXT_DATA__ in embed page")]
    MissingNextData,
    #[error("Failed to parse embed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not extract entity data - album may not exist")]
    MissingEntity,
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Accept a bare album id or a full `https://open.spotify.com/album/{id}?...` link.
pub fn album_id_from_input(input: &str) -> String {
    if !input.contains("spotify.com/album/") {
        return input.to_string();
    }
    input
        .split("/album/")
        .nth(1)
        .and_then(|rest| rest.split('?').next())
        .filter(|id| !id.is_empty())
        .unwrap_or(input)
        .to_string()
}

pub fn embed_url(album_id: &str) -> String {
    format!("{EMBED_BASE_URL}/{album_id}")
}

/// Pull the entity out of an embed page's HTML.
pub fn extract_entity(html: &str) -> Result<EmbedEntity, EmbedError> {
    let pattern = Regex::new(NEXT_DATA_PATTERN)?;
    let json = pattern
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or(EmbedError::MissingNextData)?
        .as_str();

    let data: NextData = serde_json::from_str(json)?;
    data.props
        .and_then(|props| props.page_props)
        .and_then(|page| page.state)
        .and_then(|state| state.data)
        .and_then(|data| data.entity)
        .ok_or(EmbedError::MissingEntity)
}

pub async fn fetch_album_entity(client: &Client, album_id: &str) -> Result<EmbedEntity, EmbedError> {
    let url = embed_url(album_id);
    tracing::debug!(%url, "Fetching embed page");

    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(EmbedError::Status(response.status()));
    }

    let html = response.text().await?;
    extract_entity(&html)
}
