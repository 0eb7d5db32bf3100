//! Markup builders. Every function returns a finished HTML fragment; all
//! text coming from the backend or config goes through [`escape`].

pub mod album;
pub mod artist;
pub mod hero;

use chrono::Datelike;

use crate::config::SocialLink;
use crate::services::artists::ArtistView;

const ARROW_DOWN_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 21L17 16M12 21L7 16M12 21V3" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const MAIL_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 20 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M2 2L8.1 6.6C8.8 7.1 9.1 7.4 9.5 7.5C9.8 7.5 10.2 7.5 10.5 7.5C10.9 7.4 11.2 7.1 11.9 6.6C11.9 6.6 15.8 3.6 18 2M1 11.8V4.2C1 3.1 1 2.5 1.2 2.1C1.4 1.7 1.7 1.4 2.1 1.2C2.5 1 3.1 1 4.2 1H15.8C16.9 1 17.5 1 17.9 1.2C18.3 1.4 18.6 1.7 18.8 2.1C19 2.5 19 3.1 19 4.2V11.8C19 12.9 19 13.5 18.8 13.9C18.6 14.3 18.3 14.6 17.9 14.8C17.5 15 16.9 15 15.8 15H4.2C3.1 15 2.5 15 2.1 14.8C1.7 14.6 1.4 14.3 1.2 13.9C1 13.5 1 12.9 1 11.8Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Full document around a page body.
pub fn layout(site_title: &str, page_title: &str, share_image: &str, body: &str) -> String {
    let title = if page_title.is_empty() {
        escape(site_title)
    } else {
        format!("{} | {}", escape(page_title), escape(site_title))
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="Professional music artist portfolio">
<meta property="og:image" content="{share_image}">
<link rel="stylesheet" href="/static/site.css">
<script src="/static/site.js" defer></script>
</head>
<body>
<div class="viewport-frame" aria-hidden="true"></div>
{navbar}
<div class="body-container">
{body}
</div>
</body>
</html>
"#,
        share_image = escape(share_image),
        navbar = navbar(),
    )
}

fn navbar() -> String {
    let links: String = [("/music", "Music"), ("/about", "About"), ("/contact", "Contact")]
        .iter()
        .map(|(href, label)| {
            format!(r#"<li><a href="{href}"><p data-text="{label}">{label}</p></a></li>"#)
        })
        .collect();
    format!(
        r#"<header class="header"><nav class="header--navbar"><ul><li><a href="/"><div class="header--navbar_logo"><p data-text="Home">Home</p></div></a></li>{links}</ul></nav></header>"#
    )
}

/// Section heading with the downward arrow, e.g. "Latest Albums".
pub fn section_title(title: &str) -> String {
    format!(
        r#"<div class="lastest-work--title"><p class="meta">{}</p>{ARROW_DOWN_ICON}</div>"#,
        escape(title)
    )
}

pub fn arrow_icon() -> &'static str {
    ARROW_DOWN_ICON
}

/// Social grid, contact button and footer shared by every page.
pub fn footer_contact(artist: &ArtistView, links: &[SocialLink]) -> String {
    let grid_links = &links[..links.len().min(4)];
    format!(
        r#"<div class="footer-contact">{social}<a href="/contact" class="btn-contact-me"><p>Contact Me</p>{MAIL_ICON}</a>{footer}</div>"#,
        social = artist::social_links(grid_links, artist::SocialVariant::Grid),
        footer = footer(artist),
    )
}

fn footer(artist: &ArtistView) -> String {
    let nav = |heading: &str, links: &[(&str, &str)]| {
        let items: String = links
            .iter()
            .map(|(label, href)| format!(r#"<li><a href="{href}">{label}</a></li>"#))
            .collect();
        format!(r#"<div class="footer--nav"><h6>{heading}</h6><ul>{items}</ul></div>"#)
    };

    format!(
        r#"<div class="footer-infos-contact"><div class="footer-contact-profile">{profile}</div><div class="footer-contact-navi">{pages}{music}</div><div class="footer-license"><p class="meta">&copy; {year} {name}.</p></div></div>"#,
        profile = artist::profile_header(artist),
        pages = nav("Pages", &[("Home", "/"), ("About", "/about"), ("Contact", "/contact")]),
        music = nav("Music", &[("Albums", "/music"), ("Singles", "/music#singles")]),
        year = chrono::Utc::now().year(),
        name = escape(&artist.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_layout_titles() {
        let page = layout("Site", "L2K", "https://x/hero.jpg", "<main></main>");
        assert!(page.contains("<title>L2K | Site</title>"));
        assert!(page.contains(r#"content="https://x/hero.jpg""#));

        let home = layout("Site <3", "", "", "");
        assert!(home.contains("<title>Site &lt;3</title>"));
    }

    #[test]
    fn test_footer_contact_limits_social_grid() {
        let artist = crate::services::artists::fallback_artist(&crate::test_utils::test_location());
        let links: Vec<SocialLink> = (0..6)
            .map(|i| SocialLink {
                label: format!("Link {i}"),
                href: format!("https://example.com/{i}"),
                icon: None,
            })
            .collect();

        let html = footer_contact(&artist, &links);
        assert!(html.contains("Link 3"));
        assert!(!html.contains("Link 4"));
        assert!(html.contains("Artist Name"));
    }
}
