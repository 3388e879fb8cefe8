use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_health_contracts::{HealthService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { email } = service.get_status().await;

    let status = if email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(HealthResponse { http: true, email })).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use pretty_assertions::assert_eq;
    use relay_core_contact_contracts::MockContactService;
    use relay_core_health_contracts::MockHealthService;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{RestServer, RestServerConfig};

    async fn get(health: MockHealthService) -> (StatusCode, Value) {
        let router = RestServer::new(
            health,
            MockContactService::new(),
            RestServerConfig {
                host: [127, 0, 0, 1].into(),
                port: 8000,
            },
        )
        .router();

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let health = MockHealthService::new().with_get_status(HealthStatus { email: true });

        // Act
        let result = get(health).await;

        // Assert
        assert_eq!(result, (StatusCode::OK, json!({"http": true, "email": true})));
    }

    #[tokio::test]
    async fn smtp_unreachable() {
        // Arrange
        let health = MockHealthService::new().with_get_status(HealthStatus { email: false });

        // Act
        let result = get(health).await;

        // Assert
        assert_eq!(
            result,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"http": true, "email": false})
            )
        );
    }
}
