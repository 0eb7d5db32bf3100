use crate::config::SocialLink;
use crate::http_server::views::{arrow_icon, escape};
use crate::services::artists::ArtistView;
use crate::services::awards::AwardView;

pub const AWARDS_TITLE: &str = "Awards & Recognitions";
const AWARDS_DESCRIPTION: &str = "Honored to receive multiple awards for excellence, recognizing creative vision and commitment to the craft.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialVariant {
    List,
    Grid,
}

/// Avatar, or the first letter of the name when there is none.
fn avatar(artist: &ArtistView) -> String {
    match &artist.avatar_url {
        Some(url) => format!(
            r#"<img class="home-card-info_ava" src="{}" alt="{}">"#,
            escape(url),
            escape(&artist.name)
        ),
        None => {
            let initial: String = artist.name.chars().take(1).collect();
            format!(
                r#"<div class="home-card-info_ava home-card-info_ava--initial">{}</div>"#,
                escape(&initial)
            )
        }
    }
}

pub fn profile_header(artist: &ArtistView) -> String {
    format!(
        r#"<div class="home-card-info_profile">{}<div class="home-card-info_name"><h5>{}</h5><p class="meta">{}</p></div></div>"#,
        avatar(artist),
        escape(&artist.name),
        escape(&artist.role)
    )
}

pub fn profile_card(artist: &ArtistView) -> String {
    let bio = artist
        .bio
        .as_deref()
        .filter(|bio| !bio.is_empty())
        .map(|bio| format!(r#"<div class="home-card-info_bio"><p>{}</p></div>"#, escape(bio)))
        .unwrap_or_default();
    format!(
        r#"<div class="home-card-info">{}{bio}</div>"#,
        profile_header(artist)
    )
}

pub fn social_links(links: &[SocialLink], variant: SocialVariant) -> String {
    let class = match variant {
        SocialVariant::List => "socials-list",
        SocialVariant::Grid => "socials-grid",
    };
    let items: String = links
        .iter()
        .map(|link| {
            let icon = link
                .icon
                .as_deref()
                .map(|icon| format!(r#"<span class="socials-icon">{}</span>"#, escape(icon)))
                .unwrap_or_default();
            format!(
                r#"<a href="{}" class="socials-link" target="_blank" rel="noopener noreferrer">{icon}<p>{}</p></a>"#,
                escape(&link.href),
                escape(&link.label)
            )
        })
        .collect();
    format!(r#"<div class="{class}">{items}</div>"#)
}

/// Profile card with the site's social links, top of home and about.
pub fn card_about(artist: &ArtistView, links: &[SocialLink]) -> String {
    format!(
        r#"<div class="home-card-about">{}{}</div>"#,
        profile_card(artist),
        social_links(links, SocialVariant::List)
    )
}

pub fn about_detail(title: &str, paragraphs: &[String]) -> String {
    let text: String = paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();
    format!(
        r#"<div class="about-card--detail"><div class="about-card--title"><h2>{}</h2></div><div class="about-card--text">{text}</div></div>"#,
        escape(title)
    )
}

fn award_item(award: &AwardView) -> String {
    let content = format!(
        r#"<div class="work-items--container"><div class="work-items--title"><h5>{}</h5></div><div class="work-items--description"><p class="meta">{}</p><p class="meta">{}</p></div>{}</div>"#,
        escape(&award.title),
        escape(&award.award_type),
        award.year,
        arrow_icon()
    );
    match &award.url {
        Some(url) => format!(
            r#"<li class="work-items"><a href="{}" target="_blank" rel="noopener noreferrer">{content}</a></li>"#,
            escape(url)
        ),
        None => format!(r#"<li class="work-items">{content}</li>"#),
    }
}

/// Heading breaks after the first `&` part: "Awards<br>&amp; Recognitions".
pub fn awards_section(awards: &[AwardView]) -> String {
    let heading = AWARDS_TITLE
        .split(" & ")
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>&amp; ");
    let items: String = awards.iter().map(award_item).collect();
    format!(
        r#"<div class="award-section"><div class="award-section--header"><div class="award-header--title"><h2>{heading}</h2></div><div class="award-header--text"><p>{}</p></div></div><div class="work-wrapper"><ul class="work-section">{items}</ul></div></div>"#,
        escape(AWARDS_DESCRIPTION)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn artist(avatar_url: Option<&str>) -> ArtistView {
        ArtistView {
            id: "1".into(),
            name: "Low G".into(),
            bio: None,
            avatar_url: avatar_url.map(str::to_string),
            role: "Musician / Rapper".into(),
        }
    }

    #[test]
    fn test_profile_card_initial_without_avatar() {
        let html = profile_card(&artist(None));
        assert!(html.contains(r#"home-card-info_ava--initial">L</div>"#));
        assert!(!html.contains("home-card-info_bio"));

        let html = profile_card(&artist(Some("https://x/a.jpg")));
        assert!(html.contains(r#"src="https://x/a.jpg""#));
    }

    #[test]
    fn test_awards_section_links_only_with_url() {
        let awards = vec![
            AwardView {
                id: Uuid::new_v4(),
                title: "Best <New> Artist".into(),
                award_type: "Winner".into(),
                year: 2023,
                url: Some("https://awards.example/1".into()),
                description: None,
            },
            AwardView {
                id: Uuid::new_v4(),
                title: "Album of the Year".into(),
                award_type: "Nominee".into(),
                year: 2022,
                url: None,
                description: None,
            },
        ];

        let html = awards_section(&awards);
        assert!(html.contains("<h2>Awards<br>&amp; Recognitions</h2>"));
        assert!(html.contains("Best &lt;New&gt; Artist"));
        assert_eq!(html.matches("<a href=").count(), 1);
    }
}
