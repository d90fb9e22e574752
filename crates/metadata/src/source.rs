//! Volume source trait definition

use async_trait::async_trait;
use googlebooks::{GoogleBooksClient, Volume};

use crate::FetchError;

/// A catalog that can look up a volume by identifier.
///
/// The fetcher depends on this trait rather than on the HTTP client
/// directly so tests can substitute a scripted source.
#[async_trait]
pub trait VolumeSource: Send + Sync {
    async fn get_volume(&self, volume_id: &str) -> Result<Volume, FetchError>;
}

#[async_trait]
impl VolumeSource for GoogleBooksClient {
    async fn get_volume(&self, volume_id: &str) -> Result<Volume, FetchError> {
        Ok(GoogleBooksClient::get_volume(self, volume_id).await?)
    }
}
