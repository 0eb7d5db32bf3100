use crate::carousel::HeroCarousel;
use crate::config::SiteConfig;
use crate::services::albums::AlbumService;
use crate::services::artists::ArtistService;
use crate::services::awards::AwardService;
use crate::services::storage::{MediaItem, MediaService};

pub struct AppState {
    pub albums: AlbumService,
    pub artists: ArtistService,
    pub awards: AwardService,
    pub media: MediaService,
    pub config: SiteConfig,
}

impl AppState {
    /// A carousel over `media` with the configured timings.
    pub fn carousel(&self, media: Vec<MediaItem>) -> HeroCarousel {
        HeroCarousel::new(media, self.config.image_duration())
            .with_reveal_duration(self.config.reveal_duration())
    }

    /// Image used for link previews.
    pub fn share_image(&self) -> String {
        self.media.location().hero_image_url()
    }
}
