use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::{Result, eyre::Context, eyre::eyre};
use serde::{Deserialize, Serialize};

/// Site settings that are not secrets. Credentials come from the CLI/env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Storage bucket holding covers, avatars and hero media.
    pub bucket: String,
    pub site_title: String,
    /// Albums shown on the home and about pages.
    pub featured_limit: u64,
    /// Dwell time of an image in the hero carousel, after its reveal.
    pub image_duration_ms: u64,
    pub reveal_duration_ms: u64,
    pub about_paragraphs: Vec<String>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Short glyph rendered inside the link.
    #[serde(default)]
    pub icon: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bucket: "artist_assets".to_string(),
            site_title: "Artist Portfolio".to_string(),
            featured_limit: 4,
            image_duration_ms: 3000,
            reveal_duration_ms: 1200,
            about_paragraphs: vec![
                "Independent artist writing, recording and producing from the studio up."
                    .to_string(),
            ],
            social_links: vec![
                SocialLink {
                    label: "Spotify".to_string(),
                    href: "https://open.spotify.com".to_string(),
                    icon: Some("SP".to_string()),
                },
                SocialLink {
                    label: "YouTube".to_string(),
                    href: "https://www.youtube.com".to_string(),
                    icon: Some("YT".to_string()),
                },
                SocialLink {
                    label: "Instagram".to_string(),
                    href: "https://www.instagram.com".to_string(),
                    icon: Some("IG".to_string()),
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("artistone").join("config.toml"))
    }

    /// Load the config at the default path, or defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the default config to the default path unless a file is already there.
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| eyre!("No config directory found"))?;
        Self::default().write_if_absent(&path)?;
        Ok(path)
    }

    fn write_if_absent(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            tracing::info!(path = %path.display(), "Config file already exists");
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).wrap_err("Failed to serialize config")?;
        std::fs::write(path, contents)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(true)
    }

    pub fn image_duration(&self) -> Duration {
        Duration::from_millis(self.image_duration_ms)
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            site_title = "N0L4B3L"
            featured_limit = 2

            [[social_links]]
            label = "Bandcamp"
            href = "https://bandcamp.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.site_title, "N0L4B3L");
        assert_eq!(config.featured_limit, 2);
        assert_eq!(config.bucket, "artist_assets");
        assert_eq!(config.image_duration(), Duration::from_millis(3000));
        assert_eq!(config.social_links.len(), 1);
        assert_eq!(config.social_links[0].icon, None);
    }

    #[test]
    fn test_write_if_absent_round_trips_and_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artistone").join("config.toml");
        let mut config = SiteConfig::default();
        config.site_title = "First".into();

        assert!(config.write_if_absent(&path).unwrap());
        assert_eq!(SiteConfig::from_file(&path).unwrap(), config);

        config.site_title = "Second".into();
        assert!(!config.write_if_absent(&path).unwrap());
        assert_eq!(SiteConfig::from_file(&path).unwrap().site_title, "First");
    }

    #[test]
    fn test_from_file_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "featured_limit = \"four\"").unwrap();

        let err = SiteConfig::from_file(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config file"));
    }
}
