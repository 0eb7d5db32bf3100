pub mod client;

use std::sync::Arc;

use serde::Serialize;

use crate::ports::storage::StorageClient;
use crate::services::albums::AlbumView;
use crate::supabase_rs::{StorageObject, public_object_url};

pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".webp", ".gif"];
pub const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".mov"];

/// Max objects read from one media folder.
const FOLDER_PAGE_SIZE: u32 = 100;

const HERO_IMAGE_PATH: &str = "hero/hero.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a file name by extension, ignoring case. `None` for anything
    /// outside both allow-lists.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = file_extension(name).to_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A displayable image or video. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub name: String,
}

impl MediaItem {
    pub fn image(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: MediaKind::Image,
            name: name.into(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Where public assets live: backend base URL plus the default bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    base_url: String,
    bucket: String,
}

impl StorageLocation {
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: bucket.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Public URL of `path` in the default bucket.
    pub fn public_url(&self, path: &str) -> String {
        public_object_url(&self.base_url, &self.bucket, path)
    }

    /// Like [`Self::public_url`], but absolute URLs pass through untouched.
    pub fn resolve(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            self.public_url(path_or_url)
        }
    }

    /// Map an optional stored path. `None` and blank paths become `None`.
    pub fn resolve_optional(&self, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.trim().is_empty()).map(|p| self.resolve(p))
    }

    pub fn hero_image_url(&self) -> String {
        self.public_url(HERO_IMAGE_PATH)
    }
}

/// Text from the last `.` (inclusive); empty when there is none.
fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// Turn a raw folder listing into an ordered media sequence.
///
/// Entries without a file name are sub-folder markers and are skipped, as are
/// files outside the image/video allow-lists. Output is ordered by name.
pub fn classify_listing(
    base_url: &str,
    bucket: &str,
    folder: &str,
    objects: Vec<StorageObject>,
) -> Vec<MediaItem> {
    let mut named: Vec<String> = objects
        .into_iter()
        .filter_map(|object| object.name)
        .filter(|name| !name.is_empty())
        .collect();
    named.sort();

    named
        .into_iter()
        .filter_map(|name| {
            let kind = MediaKind::from_file_name(&name)?;
            Some(MediaItem {
                url: public_object_url(base_url, bucket, &format!("{}/{}", folder, name)),
                kind,
                name,
            })
        })
        .collect()
}

/// Homepage carousel media: one image per album cover, albums without a cover
/// are dropped. Input order is kept.
pub fn homepage_media(albums: &[AlbumView]) -> Vec<MediaItem> {
    albums
        .iter()
        .filter_map(|album| {
            album
                .cover_url
                .as_ref()
                .map(|url| MediaItem::image(url.clone(), album.title.clone()))
        })
        .collect()
}

pub struct MediaService {
    client: Arc<dyn StorageClient>,
    location: StorageLocation,
}

impl MediaService {
    pub fn new(client: Arc<dyn StorageClient>, location: StorageLocation) -> Self {
        Self { client, location }
    }

    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// Media files in `folder` of `bucket`. Listing failures are logged and
    /// read as an empty folder.
    pub async fn media_from_folder(&self, bucket: &str, folder: &str) -> Vec<MediaItem> {
        tracing::debug!(bucket, folder, "Listing media folder");

        let objects = match self
            .client
            .list_folder(bucket, folder, FOLDER_PAGE_SIZE)
            .await
        {
            Ok(objects) => objects,
            Err(e) => {
                tracing::error!(bucket, folder, "Error listing media folder: {:?}", e);
                return Vec::new();
            }
        };

        if objects.is_empty() {
            tracing::debug!(folder, "No files found in media folder");
            return Vec::new();
        }

        classify_listing(self.location.base_url(), bucket, folder, objects)
    }

    /// Media for an album page.
    ///
    /// The folder named after the slug wins whenever it holds any media.
    /// Otherwise the cover becomes a single image named `cover`, and with no
    /// cover the result is empty.
    pub async fn album_media(&self, slug: &str, cover: Option<&str>) -> Vec<MediaItem> {
        let folder_media = self.media_from_folder(self.location.bucket(), slug).await;
        tracing::debug!(slug, count = folder_media.len(), "Album folder media");

        if !folder_media.is_empty() {
            return folder_media;
        }

        match self.location.resolve_optional(cover) {
            Some(cover_url) => {
                tracing::debug!(slug, "No folder media, using cover fallback");
                vec![MediaItem::image(cover_url, "cover")]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::album::AlbumType;
    use crate::ports::storage::MockStorageClient;
    use crate::test_utils::{TEST_STORAGE_URL, test_location};

    fn service_with_listing(listing: Vec<StorageObject>) -> MediaService {
        let mut client = MockStorageClient::new();
        client
            .expect_list_folder()
            .returning(move |_, _, _| Ok(listing.clone()));
        MediaService::new(Arc::new(client), test_location())
    }

    fn album_view(title: &str, cover_url: Option<&str>) -> AlbumView {
        AlbumView {
            id: uuid::Uuid::new_v4(),
            slug: title.to_lowercase(),
            title: title.to_string(),
            bio: None,
            cover_url: cover_url.map(str::to_string),
            year: 2023,
            featured_artist: "None".to_string(),
            album_type: AlbumType::Single,
            genre: None,
            youtube_video_id: None,
            spotify_album_id: None,
            spotify_url: None,
            is_featured: true,
        }
    }

    #[test]
    fn test_media_kind_from_file_name() {
        assert_eq!(MediaKind::from_file_name("a.JPG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_file_name("a.b.webp"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_file_name("clip.MoV"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_file_name("notes.txt"), None);
        assert_eq!(MediaKind::from_file_name("jpg"), None);
        assert_eq!(MediaKind::from_file_name(".emptyFolderPlaceholder"), None);
    }

    #[test]
    fn test_allow_lists_are_disjoint() {
        for ext in IMAGE_EXTENSIONS {
            assert!(!VIDEO_EXTENSIONS.contains(&ext));
        }
    }

    #[test]
    fn test_classify_listing_filters_and_orders() {
        let objects = vec![
            StorageObject::file("02.mp4"),
            StorageObject::default(),
            StorageObject::file(""),
            StorageObject::file("readme.md"),
            StorageObject::file("01.JPEG"),
        ];

        let media = classify_listing(TEST_STORAGE_URL, "artist_assets", "l2k", objects);

        assert_eq!(media.len(), 2);
        assert_eq!(media[0].name, "01.JPEG");
        assert_eq!(media[0].kind, MediaKind::Image);
        assert_eq!(
            media[0].url,
            "https://project.supabase.co/storage/v1/object/public/artist_assets/l2k/01.JPEG"
        );
        assert_eq!(media[1].name, "02.mp4");
        assert_eq!(media[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_resolve_passes_absolute_urls_through() {
        let location = test_location();
        assert_eq!(
            location.resolve("https://cdn.example.com/x.jpg"),
            "https://cdn.example.com/x.jpg"
        );
        assert_eq!(
            location.resolve("covers/x.jpg"),
            "https://project.supabase.co/storage/v1/object/public/artist_assets/covers/x.jpg"
        );
        assert_eq!(location.resolve_optional(None), None);
    }

    #[tokio::test]
    async fn test_media_from_folder_listing_error_is_empty() {
        let mut client = MockStorageClient::new();
        client
            .expect_list_folder()
            .returning(|_, _, _| Err(color_eyre::eyre::eyre!("connection refused")));
        let service = MediaService::new(Arc::new(client), test_location());

        let media = service.media_from_folder("artist_assets", "l2k").await;
        assert!(media.is_empty());
    }

    #[tokio::test]
    async fn test_media_from_folder_uses_page_size_and_bucket() {
        let mut client = MockStorageClient::new();
        client
            .expect_list_folder()
            .withf(|bucket, folder, limit| {
                bucket == "other_bucket" && folder == "l2k" && *limit == 100
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![StorageObject::file("a.png")]));
        let service = MediaService::new(Arc::new(client), test_location());

        let media = service.media_from_folder("other_bucket", "l2k").await;
        assert_eq!(
            media[0].url,
            "https://project.supabase.co/storage/v1/object/public/other_bucket/l2k/a.png"
        );
    }

    #[tokio::test]
    async fn test_album_media_prefers_folder_over_cover() {
        let service = service_with_listing(vec![
            StorageObject::file("1.jpg"),
            StorageObject::file("2.png"),
            StorageObject::file("3.webm"),
        ]);

        let media = service.album_media("l2k", None).await;
        assert_eq!(media.len(), 3);

        let media = service.album_media("l2k", Some("covers/x.jpg")).await;
        assert_eq!(media.len(), 3);
        assert!(media.iter().all(|m| m.name != "cover"));
    }

    #[tokio::test]
    async fn test_album_media_falls_back_to_cover() {
        let service = service_with_listing(vec![]);

        let media = service.album_media("l2k", Some("covers/x.jpg")).await;
        assert_eq!(
            media,
            vec![MediaItem {
                url: "https://project.supabase.co/storage/v1/object/public/artist_assets/covers/x.jpg"
                    .to_string(),
                kind: MediaKind::Image,
                name: "cover".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_album_media_keeps_resolved_cover_url() {
        let service = service_with_listing(vec![StorageObject::file("notes.txt")]);
        let resolved = test_location().public_url("covers/x.jpg");

        let media = service.album_media("l2k", Some(&resolved)).await;
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].url, resolved);
    }

    #[tokio::test]
    async fn test_album_media_empty_without_cover() {
        let service = service_with_listing(vec![]);
        assert!(service.album_media("l2k", None).await.is_empty());
    }

    #[tokio::test]
    async fn test_album_media_blank_cover_is_empty() {
        let service = service_with_listing(vec![]);
        assert!(service.album_media("l2k", Some("")).await.is_empty());
        assert!(service.album_media("l2k", Some("  ")).await.is_empty());
    }

    #[test]
    fn test_resolve_optional_blank_path_is_none() {
        let location = test_location();
        assert_eq!(location.resolve_optional(Some("")), None);
        assert_eq!(location.resolve_optional(Some(" \t")), None);
        assert_eq!(
            location.resolve_optional(Some("covers/x.jpg")).as_deref(),
            Some("https://project.supabase.co/storage/v1/object/public/artist_assets/covers/x.jpg")
        );
    }

    #[test]
    fn test_homepage_media_drops_albums_without_cover() {
        let albums = vec![
            album_view("First", Some("https://x/1.jpg")),
            album_view("Second", None),
            album_view("Third", Some("https://x/3.jpg")),
        ];

        let media = homepage_media(&albums);
        assert_eq!(media.len(), 2);
        assert_eq!(media[0], MediaItem::image("https://x/1.jpg", "First"));
        assert_eq!(media[1].name, "Third");
    }

    #[test]
    fn test_media_item_serializes_type_tag() {
        let json = serde_json::to_value(MediaItem::image("u", "n")).unwrap();
        assert_eq!(json, serde_json::json!({"url": "u", "type": "image", "name": "n"}));
    }
}
