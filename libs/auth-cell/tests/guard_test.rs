use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use auth_cell::router::{admin_page_routes, auth_api_routes, auth_page_routes};
use shared_utils::test_utils::{JwtTestUtils, MockClinicStore, TestConfig, TestUser};

fn request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn admin_app(store: MockClinicStore) -> Router {
    admin_page_routes(TestConfig::admin().to_state(store))
}

#[tokio::test]
async fn anonymous_user_is_sent_to_login() {
    let response = admin_app(MockClinicStore::new())
        .oneshot(request("/dashboard", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/auth/login?redirect=%2Fdashboard"
    );
}

#[tokio::test]
async fn patient_role_is_sent_home() {
    let config = TestConfig::admin();
    let user = TestUser::patient("pat@clinic.test");
    let token = JwtTestUtils::create_test_token(&user, &config.jwt_secret, None);
    let store = MockClinicStore::new().with_profile(user.to_profile());

    let response = admin_page_routes(config.to_state(store))
        .oneshot(request("/dashboard", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn admin_role_reaches_dashboard() {
    let config = TestConfig::admin();
    let user = TestUser::admin("admin@clinic.test");
    let token = JwtTestUtils::create_test_token(&user, &config.jwt_secret, None);
    let store = MockClinicStore::new().with_profile(user.to_profile());

    let response = admin_page_routes(config.to_state(store))
        .oneshot(request("/dashboard", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["userId"], user.id);
    assert_eq!(json["sections"][0], "/appointments");
}

#[tokio::test]
async fn expired_token_counts_as_anonymous() {
    let config = TestConfig::admin();
    let user = TestUser::admin("admin@clinic.test");
    let token = JwtTestUtils::create_expired_token(&user, &config.jwt_secret);
    let store = MockClinicStore::new().with_profile(user.to_profile());

    let response = admin_page_routes(config.to_state(store))
        .oneshot(request("/dashboard", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/auth/login?redirect=%2Fdashboard");
}

#[tokio::test]
async fn profile_lookup_failure_denies_without_error() {
    let config = TestConfig::admin();
    let user = TestUser::admin("admin@clinic.test");
    let token = JwtTestUtils::create_test_token(&user, &config.jwt_secret, None);
    let store = MockClinicStore::new().with_profile(user.to_profile()).failing_profiles();

    let response = admin_page_routes(config.to_state(store))
        .oneshot(request("/dashboard", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn session_endpoint_reports_decision() {
    let config = TestConfig::patient();
    let app = auth_api_routes(config.to_state(MockClinicStore::new()));

    let response = app
        .oneshot(request("/session?path=/patients/7", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["authenticated"], false);
    assert_eq!(json["allowed"], false);
    assert_eq!(json["redirectTo"], "/auth/login?redirect=%2Fpatients%2F7");
}

#[tokio::test]
async fn login_page_falls_back_to_deployment_redirect() {
    let app = auth_page_routes(TestConfig::admin().to_state(MockClinicStore::new()));

    let response = app
        .oneshot(request("/auth/login?redirect=https://evil.test", None))
        .await
        .unwrap();
    let json = json_body(response).await;

    assert_eq!(json["deployment"], "ADMIN");
    assert_eq!(json["redirect"], "/dashboard");
}
