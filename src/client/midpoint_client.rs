use async_trait::async_trait;
use tracing::{error, warn};

use super::client_error::{ClientError, GENERIC_BACKEND_MESSAGE};
use crate::types::midpoint::{ErrorBody, FindMidpointRequest, MidpointResult};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Anything that can answer a find-midpoint request.
#[async_trait]
pub trait MidpointBackend {
    async fn find_midpoint(
        &self,
        request: &FindMidpointRequest,
    ) -> Result<MidpointResult, ClientError>;
}

#[derive(Clone)]
pub struct MidpointClientConfig {
    pub base_url: String,
}

impl Default for MidpointClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

/// Single-attempt JSON client for `POST /api/find_midpoint`. No retries and
/// no client-side timeout.
#[derive(Clone)]
pub struct MidpointClient {
    config: MidpointClientConfig,
    client: reqwest::Client,
}

impl MidpointClient {
    pub fn new(config: MidpointClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/find_midpoint",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl MidpointBackend for MidpointClient {
    async fn find_midpoint(
        &self,
        request: &FindMidpointRequest,
    ) -> Result<MidpointResult, ClientError> {
        let resp = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach midpoint backend: {}", e);
                ClientError::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            error!("Failed to read midpoint response body: {}", e);
            ClientError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| GENERIC_BACKEND_MESSAGE.to_string());
            warn!("Midpoint backend returned {}: {}", status, message);

            return Err(ClientError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<MidpointResult>(&body).map_err(|e| {
            error!("Malformed midpoint response: {}", e);
            ClientError::Transport(format!("Malformed response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::client::client_error::CONNECTIVITY_MESSAGE;

    fn request() -> FindMidpointRequest {
        FindMidpointRequest {
            address1: "123 Main St".to_string(),
            address2: "456 Oak Ave".to_string(),
            place_type: "cafe".to_string(),
            place_id1: "".to_string(),
            place_id2: "".to_string(),
        }
    }

    fn client(server: &mockito::ServerGuard) -> MidpointClient {
        MidpointClient::new(MidpointClientConfig {
            base_url: format!("{}/", server.url()),
        })
    }

    #[tokio::test]
    async fn test_posts_json_and_decodes_result() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/find_midpoint")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "address1": "123 Main St",
                "address2": "456 Oak Ave",
                "placeType": "cafe",
                "placeId1": "",
                "placeId2": ""
            })))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "origin1": { "lat": 1, "lng": 1 },
                    "origin2": { "lat": 2, "lng": 2 },
                    "midpoint": { "lat": 1.5, "lng": 1.5 },
                    "places": [{ "name": "Cafe A", "location": { "lat": 1.4, "lng": 1.6 }, "rating": 4.5, "user_ratings_total": 120 }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let result = client(&server).find_midpoint(&request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.places.len(), 1);
        assert_eq!(result.places[0].name.as_deref(), Some("Cafe A"));
    }

    #[tokio::test]
    async fn test_backend_error_message_is_surfaced() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/api/find_midpoint")
            .with_status(404)
            .with_body(json!({ "error": "no places found" }).to_string())
            .create_async()
            .await;

        let err = client(&server).find_midpoint(&request()).await.unwrap_err();

        assert_eq!(
            err,
            ClientError::Backend {
                status: 404,
                message: "no places found".to_string()
            }
        );
        assert_eq!(err.user_message(), "no places found");
    }

    #[tokio::test]
    async fn test_backend_error_without_message_is_generic() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/api/find_midpoint")
            .with_status(500)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let err = client(&server).find_midpoint(&request()).await.unwrap_err();

        assert_eq!(err.user_message(), GENERIC_BACKEND_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_transport_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/api/find_midpoint")
            .with_body("not json")
            .create_async()
            .await;

        let err = client(&server).find_midpoint(&request()).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = MidpointClient::new(MidpointClientConfig {
            base_url: format!("http://{}", addr),
        });

        let err = client.find_midpoint(&request()).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
    }
}
