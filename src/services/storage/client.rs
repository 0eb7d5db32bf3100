use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use url::Url;

use crate::ports::storage::StorageClient;
use crate::supabase_rs::{ListObjectsRequest, StorageObject, list_objects};

pub struct SupabaseStorageAdapter {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseStorageAdapter {
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .wrap_err_with(|| format!("Invalid storage base URL: {}", base_url))?;
        Ok(Self {
            client: Client::new(),
            base_url,
            api_key,
        })
    }
}

#[async_trait::async_trait]
impl StorageClient for SupabaseStorageAdapter {
    async fn list_folder(
        &self,
        bucket: &str,
        folder: &str,
        limit: u32,
    ) -> Result<Vec<StorageObject>> {
        let request = ListObjectsRequest::folder(folder, limit);
        list_objects(&self.client, &self.base_url, &self.api_key, bucket, &request).await
    }
}
