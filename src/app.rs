use crate::{
    routes::apply_routes,
    services::maps_client::maps_service::{MapsService, MapsServiceConfig},
    types::app_state::AppState,
};
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

pub struct AppConfig {
    pub maps_host: String,
    pub maps_api_key: Option<String>,
}

pub fn gen_app(config: AppConfig) -> Router {
    // The UI is served from its own origin.
    let cors_middleware = CorsLayer::permissive();
    let state = AppState {
        maps_service: MapsService::new(MapsServiceConfig {
            api_key: config.maps_api_key,
            host: config.maps_host,
        }),
    };

    apply_routes(Router::new(), &state)
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Html(
        r#"<html>
  <body style="font-family:system-ui; padding:20px;">
    <h2>Let's Meet API</h2>
    <p>This server only provides API endpoints.</p>
    <ul>
      <li>Health check: <a href="/api/health">/api/health</a></li>
      <li>Find a midpoint: <code>POST /api/find_midpoint</code></li>
    </ul>
  </body>
</html>
"#,
    )
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let google_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        maps_host: google_server.url(),
        maps_api_key: Some("key".to_string()),
    });

    MockApp { app, google_server }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        http::StatusCode,
    };
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn root_page() {
        let app = gen_app(AppConfig {
            maps_host: "host".to_string(),
            maps_api_key: None,
        });

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Let's Meet API"));
    }

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let app = gen_mock_app().await.app;

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/find_midpoint")
                    .header("origin", "http://localhost:5500")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
