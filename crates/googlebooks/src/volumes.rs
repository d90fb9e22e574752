use crate::client::{GoogleBooksClient, USER_AGENT};
use crate::models::Volume;

impl GoogleBooksClient {
    /// Get a volume by its catalog identifier
    /// GET /volumes/{volume_id}
    pub async fn get_volume(&self, volume_id: &str) -> crate::Result<Volume> {
        let url = self.url(&format!("/volumes/{}", volume_id));
        let response = self
            .client()
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
