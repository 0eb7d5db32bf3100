use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/* ---------- Public URLs ---------- */

/// Compose the public URL of an object in a public bucket.
///
/// `{base_url}/storage/v1/object/public/{bucket}/{path}`; a trailing `/` on
/// `base_url` is dropped so the output never contains `//` at the join.
pub fn public_object_url(base_url: &str, bucket: &str, path: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        base_url.trim_end_matches('/'),
        bucket,
        path
    )
}

/* ---------- Folder listing ---------- */

#[derive(Debug, Clone, Serialize)]
pub struct SortBy {
    pub column: &'static str,
    pub order: &'static str,
}

/// Body of `POST /storage/v1/object/list/{bucket}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObjectsRequest {
    pub prefix: String,
    pub limit: u32,
    pub offset: u32,
    pub sort_by: SortBy,
}

impl ListObjectsRequest {
    /// List one folder, sorted by object name ascending.
    pub fn folder(prefix: &str, limit: u32) -> Self {
        Self {
            prefix: prefix.to_string(),
            limit,
            offset: 0,
            sort_by: SortBy {
                column: "name",
                order: "asc",
            },
        }
    }
}

/// One entry of a folder listing.
///
/// Notes
/// - Sub-folders come back with `id` and `metadata` set to null.
/// - `name` is the file name relative to the listed prefix.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StorageObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl StorageObject {
    pub fn file(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// List objects under a folder of a bucket.
///
/// Endpoint
/// - `POST /storage/v1/object/list/{bucket}`
pub async fn list_objects(
    client: &Client,
    base_url: &Url,
    api_key: &str,
    bucket: &str,
    request: &ListObjectsRequest,
) -> Result<Vec<StorageObject>> {
    let url = base_url
        .join(&format!("storage/v1/object/list/{}", bucket))
        .wrap_err("Failed to build storage list URL")?;

    let objects = client
        .post(url)
        .header("apikey", api_key)
        .bearer_auth(api_key)
        .json(request)
        .send()
        .await
        .wrap_err_with(|| format!("Failed to list storage folder {}", request.prefix))?
        .error_for_status()?
        .json::<Vec<StorageObject>>()
        .await
        .wrap_err("Failed to deserialize storage listing")?;

    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_object_url() {
        assert_eq!(
            public_object_url("https://abc.supabase.co", "artist_assets", "covers/x.jpg"),
            "https://abc.supabase.co/storage/v1/object/public/artist_assets/covers/x.jpg"
        );
    }

    #[test]
    fn test_public_object_url_trims_trailing_slash() {
        assert_eq!(
            public_object_url("https://abc.supabase.co/", "b", "p.png"),
            "https://abc.supabase.co/storage/v1/object/public/b/p.png"
        );
    }

    #[test]
    fn test_public_object_url_is_deterministic() {
        let a = public_object_url("https://abc.supabase.co", "b", "l2k/01.jpg");
        let b = public_object_url("https://abc.supabase.co", "b", "l2k/01.jpg");
        assert_eq!(a, b);
    }

    #[test]
    fn test_list_request_body() {
        let body = serde_json::to_value(ListObjectsRequest::folder("l2k", 100)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "prefix": "l2k",
                "limit": 100,
                "offset": 0,
                "sortBy": { "column": "name", "order": "asc" }
            })
        );
    }

    #[test]
    fn test_storage_object_folder_entry() {
        let objects: Vec<StorageObject> = serde_json::from_str(
            r#"[
                {"name": "nested", "id": null, "metadata": null},
                {"name": "01.jpg", "id": "a1", "metadata": {"size": 10}}
            ]"#,
        )
        .unwrap();
        assert_eq!(objects.len(), 2);
        assert!(objects[0].id.is_none());
        assert_eq!(objects[1].name.as_deref(), Some("01.jpg"));
    }
}
