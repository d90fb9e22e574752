use reqwest::Client;

use crate::error::GoogleBooksError;

const BASE_URL: &str = "https://www.googleapis.com/books/v1";
pub(crate) const USER_AGENT: &str = "shelf/0.1";

pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
}

impl GoogleBooksClient {
    /// Create a GoogleBooksClient with the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a GoogleBooksClient pointed at a different base URL.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GoogleBooksError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| GoogleBooksError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Volume;

    fn client() -> GoogleBooksClient {
        GoogleBooksClient::new(Client::new())
    }

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(http::Response::builder().status(status).body(body).unwrap())
    }

    #[tokio::test]
    async fn test_handle_response_success() {
        let result: crate::Result<Volume> =
            client().handle_response(response(200, r#"{"id": "abc"}"#)).await;
        assert_eq!(result.unwrap().id, "abc");
    }

    #[tokio::test]
    async fn test_handle_response_maps_non_success_to_api_error() {
        let result: crate::Result<Volume> = client()
            .handle_response(response(503, "Service Unavailable"))
            .await;
        match result {
            Err(GoogleBooksError::Api {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_response_json_error_carries_path() {
        let body = r#"{"id": "abc", "volumeInfo": {"pageCount": "many"}}"#;
        let result: crate::Result<Volume> = client().handle_response(response(200, body)).await;
        match result {
            Err(GoogleBooksError::Json { path, .. }) => {
                assert_eq!(path, "volumeInfo.pageCount");
            }
            other => panic!("expected Json error, got {:?}", other),
        }
    }
}
