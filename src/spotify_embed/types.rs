use serde::Deserialize;

/// Outer `__NEXT_DATA__` document. Only the path down to the entity is modelled.
#[derive(Debug, Deserialize)]
pub struct NextData {
    pub props: Option<Props>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    pub page_props: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    pub state: Option<EmbedState>,
}

#[derive(Debug, Deserialize)]
pub struct EmbedState {
    pub data: Option<EmbedData>,
}

#[derive(Debug, Deserialize)]
pub struct EmbedData {
    pub entity: Option<EmbedEntity>,
}

/// Album metadata as the embed widget sees it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedEntity {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub release_date: Option<ReleaseDate>,
    #[serde(default)]
    pub track_list: Vec<EmbedTrack>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDate {
    pub iso_string: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedTrack {
    pub title: Option<String>,
    pub name: Option<String>,
    /// Milliseconds.
    pub duration: Option<f64>,
    /// `"Main Artist, Guest One, Guest Two"`.
    pub subtitle: Option<String>,
}
