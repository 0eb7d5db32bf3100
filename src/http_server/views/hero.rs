//! Left-hand hero column: the rotating media gallery and the music page's
//! hover-swapped cover.

use crate::carousel::{CarouselFrame, HeroCarousel};
use crate::http_server::views::escape;
use crate::services::storage::MediaItem;

pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// How a layer of the gallery plays its media.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Layer {
    /// The only item: autoplays and loops.
    Single,
    /// Underneath layer during a transition: paused.
    Previous,
    /// Animating in: autoplays once, reports when it ends.
    Current,
}

fn media_element(item: &MediaItem, layer: Layer) -> String {
    let url = escape(&item.url);
    if !item.is_video() {
        return format!(
            r#"<img src="{url}" alt="{}" class="hero-gallery-media">"#,
            escape(&item.name)
        );
    }
    let attrs = match layer {
        Layer::Single => "autoplay muted loop playsinline",
        Layer::Previous => "muted playsinline",
        Layer::Current => "autoplay muted playsinline data-carousel-video",
    };
    format!(r#"<video src="{url}" class="hero-gallery-media" {attrs}></video>"#)
}

fn label_overlay(label: &str) -> String {
    format!(
        r#"<div class="select-work"><p class="meta">{}</p></div>"#,
        escape(label)
    )
}

/// Render the carousel's current frame. The previous item sits under the
/// current one so the reveal wipe uncovers it.
pub fn hero_gallery(carousel: &HeroCarousel, label: &str) -> String {
    let media = carousel.media();
    let gallery = match carousel.frame() {
        CarouselFrame::Empty => {
            r#"<div class="hero-gallery-placeholder"><p>Hero Image</p></div>"#.to_string()
        }
        CarouselFrame::Static => {
            let item = media
                .first()
                .map(|item| media_element(item, Layer::Single))
                .unwrap_or_default();
            format!(
                r#"<div class="hero-gallery"><div class="hero-gallery-item hero-gallery-base">{item}</div></div>"#
            )
        }
        CarouselFrame::Showing {
            current,
            previous,
            generation,
        } => {
            let dots: String = (0..media.len())
                .map(|i| {
                    if i == current {
                        r#"<span class="hero-gallery-dot active"></span>"#
                    } else {
                        r#"<span class="hero-gallery-dot"></span>"#
                    }
                })
                .collect();
            let sources: String = media
                .iter()
                .map(|item| {
                    format!(
                        r#"<span data-src="{}" data-type="{}" data-name="{}"></span>"#,
                        escape(&item.url),
                        item.kind.as_str(),
                        escape(&item.name)
                    )
                })
                .collect();
            format!(
                r#"<div class="hero-gallery" data-carousel data-image-duration="{image}" data-reveal-duration="{reveal}" data-generation="{generation}"><div class="hero-gallery-item hero-gallery-base" style="z-index: 1">{prev}</div><div class="hero-gallery-item wipe-animating" style="z-index: 2">{curr}</div><div class="hero-gallery-dots">{dots}</div><div class="hero-gallery-sources" hidden>{sources}</div></div>"#,
                image = carousel.image_duration().as_millis(),
                reveal = carousel.reveal_duration().as_millis(),
                prev = media_element(&media[previous], Layer::Previous),
                curr = media_element(&media[current], Layer::Current),
            )
        }
    };

    format!(
        r#"<div class="body-container__left">{gallery}{}</div>"#,
        label_overlay(label)
    )
}

/// Image shown in the hover hero: the hovered cover, else the default.
pub fn displayed_image<'a>(hovered: Option<&'a str>, default: &'a str) -> &'a str {
    hovered.filter(|url| !url.is_empty()).unwrap_or(default)
}

/// Default hover image for a list of covers: the first cover, else the placeholder.
pub fn default_hover_image(first_cover: Option<&str>) -> &str {
    first_cover.unwrap_or(PLACEHOLDER_IMAGE)
}

pub fn hero_image_with_hover(default_image: &str, label: &str) -> String {
    let shown = escape(displayed_image(None, default_image));
    format!(
        r#"<div class="body-container__left"><img src="{shown}" alt="Selected work" class="hero-image-hover" data-default-image="{shown}">{}</div>"#,
        label_overlay(label)
    )
}
