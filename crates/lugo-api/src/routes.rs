//! Router assembly

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use crate::{handlers, state::AppState};

/// Multipart framing on top of the photo itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let photo_limit =
        state.config.uploads.max_photo_size_mb as usize * 1024 * 1024 + MULTIPART_OVERHEAD_BYTES;

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route("/api/v1/auth/register", post(handlers::auth::register))
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route("/api/v1/catalog/{owner_id}", get(handlers::catalog::owner_catalog))
        .route("/api/v1/public/properties/{id}", get(handlers::catalog::public_property));

    // Session-protected routes; handlers take `AuthSession`
    let protected_routes = Router::new()
        .route("/api/v1/auth/logout", post(handlers::auth::logout))
        .route(
            "/api/v1/profile",
            get(handlers::profile::get_profile).put(handlers::profile::update_profile),
        )
        .route(
            "/api/v1/properties",
            get(handlers::properties::list_properties).post(handlers::properties::create_property),
        )
        .route(
            "/api/v1/properties/{id}",
            get(handlers::properties::get_property)
                .put(handlers::properties::update_property)
                .delete(handlers::properties::delete_property),
        )
        .route("/api/v1/properties/{id}/status", put(handlers::properties::change_status))
        .route(
            "/api/v1/properties/{id}/terminate-lease",
            post(handlers::properties::terminate_lease),
        )
        .route(
            "/api/v1/properties/{id}/change-tenant",
            post(handlers::properties::change_tenant),
        )
        .route(
            "/api/v1/properties/{id}/tenants",
            get(handlers::tenants::list_tenants).post(handlers::tenants::register_tenant),
        )
        .route("/api/pdf/generate", post(handlers::receipts::generate_receipt))
        .route("/api/v1/receipts/preview", post(handlers::receipts::preview_receipt))
        .route(
            "/api/v1/uploads/photos",
            post(handlers::uploads::upload_photo).layer(DefaultBodyLimit::max(photo_limit)),
        )
        .route("/api/v1/uploads/signed-url", post(handlers::uploads::signed_upload_url))
        .route("/api/v1/dashboard", get(handlers::dashboard::summary));

    let cors = cors_layer(&state.config.app.cors_origin);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        // CORS
        .layer(cors)
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value),
        Err(e) => {
            warn!("Invalid CORS origin {:?}: {}; cross-origin requests disabled", origin, e);
            layer
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use lugo_core::error::DomainError;

    use crate::test_support::{sample_property, TestApp};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = TestApp::new().router();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let app = TestApp::new().router();
        let response = app
            .oneshot(Request::builder().uri("/api/v1/properties").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_unknown_session_is_rejected() {
        let mut test_app = TestApp::new();
        let token = test_app.token_for_unknown_session(Uuid::new_v4());
        let response = test_app
            .router()
            .oneshot(json_request("GET", "/api/v1/dashboard", Some(&token), json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_own_properties() {
        let owner = Uuid::new_v4();
        let mut test_app = TestApp::new();
        let token = test_app.login(owner);
        test_app
            .properties
            .expect_find_by_owner()
            .returning(move |owner_id| Ok(vec![sample_property(*owner_id)]));

        let response = test_app
            .router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/properties")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["owner_id"], owner.to_string());
    }

    #[tokio::test]
    async fn test_create_property_reports_field_errors() {
        let mut test_app = TestApp::new();
        let token = test_app.login(Uuid::new_v4());
        test_app.properties.expect_create().never();

        let payload = json!({
            "title": "Casa",
            "address": {
                "street": "Rua das Flores",
                "number": "10",
                "neighborhood": "Centro",
                "city": "Niterói",
                "state": "RJX"
            },
            "pricing": { "rent": -10.0 }
        });
        let response = test_app
            .router()
            .oneshot(json_request("POST", "/api/v1/properties", Some(&token), payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["details"]["address.state"].is_array());
        assert_eq!(body["error"]["details"]["pricing.rent"][0], "Rent cannot be negative");
    }

    #[tokio::test]
    async fn test_terminate_lease_of_foreign_property_is_forbidden() {
        let mut test_app = TestApp::new();
        let token = test_app.login(Uuid::new_v4());
        let property = sample_property(Uuid::new_v4());
        let property_id = property.id;
        test_app
            .properties
            .expect_find_by_id()
            .returning(move |_| Ok(Some(property.clone())));
        test_app.tenants.expect_find_active_by_property().never();

        let response = test_app
            .router()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/properties/{}/terminate-lease", property_id),
                Some(&token),
                json!({}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_terminate_lease_without_tenant_frees_property() {
        let owner = Uuid::new_v4();
        let mut test_app = TestApp::new();
        let token = test_app.login(owner);
        let property = sample_property(owner);
        let property_id = property.id;
        test_app
            .properties
            .expect_find_by_id()
            .returning(move |_| Ok(Some(property.clone())));
        test_app
            .tenants
            .expect_find_active_by_property()
            .returning(|_| Ok(None));
        test_app
            .properties
            .expect_update_status()
            .times(1)
            .returning(|_, _| Ok(()));

        let response = test_app
            .router()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/properties/{}/terminate-lease", property_id),
                Some(&token),
                json!({}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["tenant_id"], Value::Null);
        assert_eq!(body["data"]["receipts_removed"], 0);
    }

    #[tokio::test]
    async fn test_generate_receipt_for_other_user_fails_with_500() {
        let mut test_app = TestApp::new();
        let token = test_app.login(Uuid::new_v4());
        test_app.storage.expect_upload().never();

        let payload = json!({
            "data": {
                "referenceMonth": "3",
                "referenceYear": "2024",
                "tenantName": "Maria da Silva",
                "propertyName": "Apartamento Centro",
                "rentValue": "R$ 1.500,00",
                "totalValue": "R$ 1.500,00",
                "paymentDate": "2024-03-05"
            },
            "userId": Uuid::new_v4(),
            "propertyId": Uuid::new_v4(),
            "tenantId": Uuid::new_v4()
        });
        let response = test_app
            .router()
            .oneshot(json_request("POST", "/api/pdf/generate", Some(&token), payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Unauthorized"));
        assert!(body.get("pdfUrl").is_none());
    }

    #[tokio::test]
    async fn test_generate_receipt_malformed_body_fails_with_500() {
        let mut test_app = TestApp::new();
        let token = test_app.login(Uuid::new_v4());

        let response = test_app
            .router()
            .oneshot(json_request("POST", "/api/pdf/generate", Some(&token), json!({"data": {}})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn test_public_catalog_unknown_owner_is_404() {
        let mut test_app = TestApp::new();
        test_app.profiles.expect_find_by_id().returning(|_| Ok(None));

        let response = test_app
            .router()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/catalog/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_is_401() {
        let mut test_app = TestApp::new();
        test_app.users.expect_find_by_email().returning(|_| Ok(None));

        let response = test_app
            .router()
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({"email": "ninguem@example.com", "password": "Senha123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_register_weak_password_is_400() {
        let mut test_app = TestApp::new();
        test_app.users.expect_create().never();

        let response = test_app
            .router()
            .oneshot(json_request(
                "POST",
                "/api/v1/auth/register",
                None,
                json!({"email": "ana@example.com", "password": "senha123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"]["details"]["password"].is_array());
    }

    #[tokio::test]
    async fn test_signed_url_outside_user_folder_is_403() {
        let mut test_app = TestApp::new();
        let token = test_app.login(Uuid::new_v4());
        test_app.storage.expect_create_signed_upload_url().never();

        let response = test_app
            .router()
            .oneshot(json_request(
                "POST",
                "/api/v1/uploads/signed-url",
                Some(&token),
                json!({"path": format!("{}/foto.jpg", Uuid::new_v4())}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_database_failure_is_generic_500() {
        let owner = Uuid::new_v4();
        let mut test_app = TestApp::new();
        let token = test_app.login(owner);
        test_app
            .properties
            .expect_count_by_owner()
            .returning(|_| Err(DomainError::DatabaseError("connection reset".to_string())));

        let response = test_app
            .router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/dashboard")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Internal server error");
    }
}
