//! Page composers. Independent reads run concurrently; album media waits for
//! the album row because the cover is its fallback.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use crate::http_server::error::PageError;
use crate::http_server::state::AppState;
use crate::http_server::views::{self, album, artist, hero};
use crate::services::storage::homepage_media;

const MUSIC_INTRO: &str = "Explore the complete discography including albums, EPs, and singles. Each project tells a unique story through sound and vision.";

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let (artist, featured) = tokio::join!(
        state.artists.get_main_artist_with_fallback(),
        state.albums.list_featured(state.config.featured_limit),
    );
    let carousel = state.carousel(homepage_media(&featured));
    let links = &state.config.social_links;

    let body = format!(
        r#"{hero}<div class="body-container__right">{card}<div class="lastest-work">{title}<a href="/music" class="button-text view-all">View all</a></div>{grid}<div class="btn-view-all button-text"><a href="/music">Show All</a></div>{footer}</div>"#,
        hero = hero::hero_gallery(&carousel, "Latest Music"),
        card = artist::card_about(&artist, links),
        title = views::section_title("Latest Albums"),
        grid = album::album_grid(&featured),
        footer = views::footer_contact(&artist, links),
    );
    Html(views::layout(
        &state.config.site_title,
        "",
        &state.share_image(),
        &body,
    ))
}

pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    let (artist, awards, featured) = tokio::join!(
        state.artists.get_main_artist_with_fallback(),
        state.awards.get_awards(),
        state.albums.list_featured(state.config.featured_limit),
    );
    let carousel = state.carousel(homepage_media(&featured));
    let links = &state.config.social_links;

    let awards_html = if awards.is_empty() {
        String::new()
    } else {
        artist::awards_section(&awards)
    };
    let body = format!(
        r#"{hero}<div class="body-container__right">{card}{detail}{awards_html}{footer}</div>"#,
        hero = hero::hero_gallery(&carousel, "About"),
        card = artist::card_about(&artist, links),
        detail = artist::about_detail("About", &state.config.about_paragraphs),
        footer = views::footer_contact(&artist, links),
    );
    Html(views::layout(
        &state.config.site_title,
        "About",
        &state.share_image(),
        &body,
    ))
}

pub async fn music(State(state): State<Arc<AppState>>) -> Html<String> {
    let (albums, artist) = tokio::join!(
        state.albums.list_all(),
        state.artists.get_main_artist_with_fallback(),
    );
    let first_cover = albums.first().and_then(|a| a.cover_url.as_deref());
    let default_image = hero::default_hover_image(first_cover);

    let body = format!(
        r#"{hero}<div class="body-container__right"><div class="work-card-about"><div class="work-card--title"><h1>Music</h1></div><div class="work-card--description"><p>{MUSIC_INTRO}</p></div></div>{items}{footer}</div>"#,
        hero = hero::hero_image_with_hover(default_image, "Select Work"),
        items = album::work_items(&albums),
        footer = views::footer_contact(&artist, &state.config.social_links),
    );
    Html(views::layout(
        &state.config.site_title,
        "Music",
        &state.share_image(),
        &body,
    ))
}

pub async fn album(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let (found, artist, next) = tokio::join!(
        state.albums.get_by_slug(&slug),
        state.artists.get_main_artist_with_fallback(),
        state.albums.get_next(&slug),
    );
    let found = found.ok_or(PageError::NotFound)?;

    let media = state
        .media
        .album_media(&slug, found.cover_url.as_deref())
        .await;
    let carousel = state.carousel(media);

    let body = format!(
        r#"{hero}<div class="body-container__right">{header}{player}{video}{next}{footer}</div>"#,
        hero = hero::hero_gallery(&carousel, &found.title),
        header = album::album_header(&found),
        player = album::spotify_section(&found),
        video = album::youtube_section(&found).unwrap_or_default(),
        next = album::next_album_section(next.as_ref()),
        footer = views::footer_contact(&artist, &state.config.social_links),
    );
    Ok(Html(views::layout(
        &state.config.site_title,
        &found.title,
        &state.share_image(),
        &body,
    )))
}

pub async fn not_found() -> PageError {
    PageError::NotFound
}
