use crate::entities::album::AlbumType;
use crate::http_server::views::{arrow_icon, escape, section_title};
use crate::services::albums::AlbumView;

const SPOTIFY_BASE_HEIGHT: u32 = 300;
const SPOTIFY_ROW_HEIGHT: u32 = 52;
const SPOTIFY_MAX_ALBUM_ROWS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyTheme {
    Dark = 0,
    Light = 1,
}

pub fn spotify_embed_url(kind: &str, spotify_id: &str, theme: SpotifyTheme) -> String {
    format!(
        "https://open.spotify.com/embed/{}/{}?utm_source=generator&theme={}",
        urlencoding::encode(kind),
        urlencoding::encode(spotify_id),
        theme as u8
    )
}

/// Player height: a fixed header plus one row per visible track. Without a
/// known track count, singles show 1 row, EPs 5 and albums 8.
pub fn spotify_embed_height(album_type: AlbumType, track_count: Option<u32>) -> u32 {
    let count = track_count.filter(|n| *n > 0);
    let rows = match album_type {
        AlbumType::Single => count.unwrap_or(1),
        AlbumType::EP => count.unwrap_or(5),
        AlbumType::Album => count.unwrap_or(10).min(SPOTIFY_MAX_ALBUM_ROWS),
    };
    SPOTIFY_BASE_HEIGHT + SPOTIFY_ROW_HEIGHT * rows
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?rel=0&modestbranding=1",
        urlencoding::encode(video_id)
    )
}

fn album_href(slug: &str) -> String {
    format!("/albums/{}", urlencoding::encode(slug))
}

pub fn album_card(album: &AlbumView) -> String {
    let cover = match &album.cover_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape(url),
            escape(&album.title)
        ),
        None => format!(
            r#"<div class="work-card-placeholder"><p>{}</p></div>"#,
            escape(&album.title)
        ),
    };
    format!(
        r#"<a href="{href}" class="work-card-container--showcase">{cover}<div class="image-blur"></div><div class="work-card-title"><p class="meta">{title}</p></div></a>"#,
        href = album_href(&album.slug),
        title = escape(&album.title),
    )
}

pub fn album_grid(albums: &[AlbumView]) -> String {
    let cards: String = albums.iter().map(album_card).collect();
    format!(r#"<div class="work-cards-container">{cards}</div>"#)
}

fn info_card(label: &str, value: &str, extra_class: &str) -> String {
    format!(
        r#"<div class="album-info-card{extra_class}"><p class="album-info-label">{label}</p><p class="album-info-value" data-text="{value}">{value}</p></div>"#,
        value = escape(value)
    )
}

pub fn album_info(album: &AlbumView) -> String {
    format!(
        r#"<div class="album-info-cards">{}{}{}</div>"#,
        info_card("Year", &album.year.to_string(), ""),
        info_card("ft.", &album.featured_artist, " album-info-card--featured"),
        info_card("Type", album.album_type.as_str(), ""),
    )
}

pub fn album_header(album: &AlbumView) -> String {
    format!(
        r#"<div class="album-detail-header"><div class="album-title-section"><h1>{}</h1><p class="album-description">{}</p></div>{}</div>"#,
        escape(&album.title),
        escape(&album.description()),
        album_info(album)
    )
}

/// Embedded player, or a placeholder with an outbound link when the album has
/// no Spotify id.
pub fn spotify_section(album: &AlbumView) -> String {
    let body = match &album.spotify_album_id {
        Some(id) => format!(
            r#"<div class="spotify-embed"><iframe src="{}" width="100%" height="{}" frameborder="0" allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture" loading="lazy" title="Spotify album"></iframe></div>"#,
            escape(&spotify_embed_url("album", id, SpotifyTheme::Dark)),
            spotify_embed_height(album.album_type, None)
        ),
        None => {
            let link = album
                .spotify_url
                .as_deref()
                .map(|url| {
                    format!(
                        r#"<a href="{}" target="_blank" rel="noopener noreferrer">Listen on Spotify &rarr;</a>"#,
                        escape(url)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<div class="no-spotify-placeholder"><p>Spotify embed is not available for this {}.</p>{link}</div>"#,
                album.album_type
            )
        }
    };
    format!(r#"<div class="album-player-section">{body}</div>"#)
}

pub fn youtube_section(album: &AlbumView) -> Option<String> {
    let video_id = album.youtube_video_id.as_deref()?;
    Some(format!(
        r#"<div class="album-video-section"><div class="lastest-work">{}</div><div class="youtube-embed"><iframe src="{}" title="{}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen></iframe></div></div>"#,
        section_title("Music Video"),
        escape(&youtube_embed_url(video_id)),
        escape(&album.title)
    ))
}

pub fn next_album_section(next: Option<&AlbumView>) -> String {
    let card = match next {
        Some(next) => {
            let href = album_href(&next.slug);
            let thumbnail = next
                .cover_url
                .as_deref()
                .map(|url| {
                    format!(
                        r#"<a href="{href}" class="next-album-thumbnail"><span class="next-album-title">{title}</span><div class="next-album-blur"></div><img src="{}" alt="{title}"></a>"#,
                        escape(url),
                        title = escape(&next.title)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<div class="next-album-card next-album-card--preview"><div class="next-album-content"><span class="next-label">Next</span><div class="next-bottom"><p class="album-preview-desc">{}</p><a href="{href}" class="button-text view-all">View Project</a></div></div>{thumbnail}</div>"#,
                escape(&next.description())
            )
        }
        None => r#"<div class="next-album-card"><span class="next-label">Next</span><p class="album-preview-desc">Explore more releases from the discography.</p><a href="/music" class="button-text view-all">View All Albums</a></div>"#.to_string(),
    };
    format!(r#"<div class="next-album-section">{card}</div>"#)
}

/// Catalog rows for the music page. Each row carries its cover as the hover image.
pub fn work_items(albums: &[AlbumView]) -> String {
    let items: String = albums
        .iter()
        .map(|album| {
            let hover = album
                .cover_url
                .as_deref()
                .map(|url| format!(r#" data-hover-image="{}""#, escape(url)))
                .unwrap_or_default();
            format!(
                r#"<li class="work-items"{hover}><a href="{}"><div class="work-items--container"><div class="work-items--title"><h5>{}</h5></div><div class="work-items--description"><p class="meta">{}</p><p class="meta">{}</p></div>{}</div></a></li>"#,
                album_href(&album.slug),
                escape(&album.title),
                album.album_type,
                album.year,
                arrow_icon()
            )
        })
        .collect();
    format!(r#"<div class="work-wrapper"><ul class="work-section">{items}</ul></div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn album() -> AlbumView {
        AlbumView {
            id: Uuid::new_v4(),
            slug: "l2k".into(),
            title: "L2K".into(),
            bio: None,
            cover_url: Some("https://x/covers/l2k.jpg".into()),
            year: 2022,
            featured_artist: "None".into(),
            album_type: AlbumType::EP,
            genre: None,
            youtube_video_id: None,
            spotify_album_id: None,
            spotify_url: None,
            is_featured: true,
        }
    }

    #[test]
    fn test_spotify_embed_height() {
        assert_eq!(spotify_embed_height(AlbumType::Single, None), 352);
        assert_eq!(spotify_embed_height(AlbumType::EP, None), 560);
        assert_eq!(spotify_embed_height(AlbumType::Album, None), 716);
        assert_eq!(spotify_embed_height(AlbumType::Album, Some(3)), 456);
        assert_eq!(spotify_embed_height(AlbumType::Album, Some(14)), 716);
        assert_eq!(spotify_embed_height(AlbumType::Single, Some(0)), 352);
    }

    #[test]
    fn test_embed_urls() {
        assert_eq!(
            spotify_embed_url("album", "0pA0C8xjH9FDn3tDJQlvpH", SpotifyTheme::Dark),
            "https://open.spotify.com/embed/album/0pA0C8xjH9FDn3tDJQlvpH?utm_source=generator&theme=0"
        );
        assert_eq!(
            youtube_embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
        );
    }

    #[test]
    fn test_spotify_section_placeholder_links_out() {
        let mut album = album();
        album.spotify_url = Some("https://open.spotify.com/album/x".into());
        let html = spotify_section(&album);
        assert!(html.contains("not available for this EP"));
        assert!(html.contains(r#"href="https://open.spotify.com/album/x""#));

        album.spotify_album_id = Some("abc".into());
        let html = spotify_section(&album);
        assert!(html.contains("embed/album/abc?utm_source=generator&amp;theme=0"));
        assert!(html.contains(r#"height="560""#));
    }

    #[test]
    fn test_youtube_section_only_with_video() {
        let mut album = album();
        assert!(youtube_section(&album).is_none());
        album.youtube_video_id = Some("vid".into());
        assert!(youtube_section(&album).unwrap().contains("youtube.com/embed/vid"));
    }

    #[test]
    fn test_next_album_section() {
        let html = next_album_section(Some(&album()));
        assert!(html.contains(r#"href="/albums/l2k""#));
        assert!(html.contains("EP released in 2022."));

        let html = next_album_section(None);
        assert!(html.contains("View All Albums"));
    }

    #[test]
    fn test_work_items_carry_hover_image() {
        let mut no_cover = album();
        no_cover.slug = "bare".into();
        no_cover.cover_url = None;

        let html = work_items(&[album(), no_cover]);
        assert_eq!(html.matches("data-hover-image=").count(), 1);
        assert!(html.contains(r#"data-hover-image="https://x/covers/l2k.jpg""#));
    }
}
