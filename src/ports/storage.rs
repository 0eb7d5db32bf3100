use color_eyre::eyre::Result;

use crate::supabase_rs::StorageObject;

/// Port trait wrapping the storage bucket capabilities used by the media classifier.
///
/// Implementations live in `services::storage::client` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StorageClient: Send + Sync {
    /// List up to `limit` objects directly under `folder`, sorted by name.
    async fn list_folder(&self, bucket: &str, folder: &str, limit: u32)
    -> Result<Vec<StorageObject>>;
}
