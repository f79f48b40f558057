use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Fixed key the wizard blob is stored under.
///
/// The version suffix changes only on breaking blob-shape changes; additive
/// changes rely on serde defaults instead.
pub const STORAGE_KEY: &str = "pagecraft.onboarding.v1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("state could not be encoded: {0}")]
    Codec(String),
}

/// Local key/blob persistence for wizard state.
///
/// Blobs are opaque JSON strings. The wizard owns (de)serialization, so a
/// corrupt blob is tolerated at load time instead of failing the host.
/// Concurrent writers are last-write-wins; implementations make no attempt
/// to reconcile.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;

    async fn clear(&self, key: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> StateStore for Arc<S>
where
    S: StateStore + ?Sized,
{
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key).await
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        (**self).save(key, blob).await
    }

    async fn clear(&self, key: &str) -> Result<(), StoreError> {
        (**self).clear(key).await
    }
}
