use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use provider_cell::router::provider_page_routes;
use shared_utils::test_utils::{JwtTestUtils, MockClinicStore, TestConfig, TestFixtures, TestUser};

fn seeded_store() -> MockClinicStore {
    MockClinicStore::new()
        .with_service(TestFixtures::service("svc-braces", "Braces Consultation"))
        .with_provider(TestFixtures::provider("p1", "Dr. Ana Lopez", "Orthodontics", Some(4.2), 12, &["svc-braces"]))
        .with_provider(TestFixtures::provider("p2", "Dr. Ben Cho", "General", Some(4.9), 5, &["svc-braces"]))
        .with_provider(TestFixtures::provider("p3", "Dr. Carla Diaz", "Orthodontics", None, 20, &["svc-braces"]))
        .with_provider(TestFixtures::provider("p4", "Dr. Dan Eze", "Periodontics", Some(5.0), 7, &["svc-cleaning"]))
}

fn app(store: MockClinicStore) -> (Router, String) {
    let config = TestConfig::patient();
    let token = JwtTestUtils::create_test_token(&TestUser::patient("pat@clinic.test"), &config.jwt_secret, None);
    (provider_page_routes(config.to_state(store)), token)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
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

fn provider_ids(json: &Value) -> Vec<String> {
    json["providers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn lists_eligible_providers_by_rating() {
    let (app, token) = app(seeded_store());

    let response = app
        .oneshot(get("/booking/provider?serviceId=svc-braces", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["service"]["name"], "Braces Consultation");
    assert_eq!(provider_ids(&json), vec!["p2", "p1", "p3"]);
    assert_eq!(json["specialties"], serde_json::json!(["all", "Orthodontics", "General"]));
    assert_eq!(json["sort"], "rating");
    assert!(json["notification"].is_null());
}

#[tokio::test]
async fn filters_by_specialty_and_sorts_by_experience() {
    let (app, token) = app(seeded_store());

    let response = app
        .oneshot(get(
            "/booking/provider?serviceId=svc-braces&specialty=Orthodontics&sort=experience",
            Some(&token),
        ))
        .await
        .unwrap();

    let json = json_body(response).await;
    assert_eq!(provider_ids(&json), vec!["p3", "p1"]);
    // Options still reflect every fetched provider, not just the filtered ones.
    assert_eq!(json["specialties"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn sorts_by_name() {
    let (app, token) = app(seeded_store());

    let response = app
        .oneshot(get("/booking/provider?serviceId=svc-braces&sort=name", Some(&token)))
        .await
        .unwrap();

    let json = json_body(response).await;
    assert_eq!(provider_ids(&json), vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn unknown_service_notifies_and_redirects() {
    let (app, token) = app(seeded_store());

    let response = app
        .oneshot(get("/booking/provider?serviceId=nope", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["notification"]["message"], "Service not found");
    assert_eq!(json["redirectTo"], "/booking");
    assert!(json["providers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn fetch_failure_degrades_to_empty_state() {
    let (app, token) = app(seeded_store().failing_providers());

    let response = app
        .oneshot(get("/booking/provider?serviceId=svc-braces", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["notification"]["level"], "error");
    assert_eq!(json["notification"]["message"], "Failed to load providers");
    assert!(json["service"].is_null());
    assert!(json["providers"].as_array().unwrap().is_empty());
    assert!(json["redirectTo"].is_null());
}

#[tokio::test]
async fn invalid_providers_are_skipped() {
    let bad = TestFixtures::provider("bad", "Dr. Bad", "General", Some(7.5), 1, &["svc-braces"]);
    let (app, token) = app(seeded_store().with_provider(bad));

    let response = app
        .oneshot(get("/booking/provider?serviceId=svc-braces", Some(&token)))
        .await
        .unwrap();

    let json = json_body(response).await;
    assert!(!provider_ids(&json).contains(&"bad".to_string()));
}

#[tokio::test]
async fn missing_service_id_goes_back_to_booking() {
    let (app, token) = app(seeded_store());

    let response = app.oneshot(get("/booking/provider", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/booking");
}

#[tokio::test]
async fn anonymous_visitor_is_sent_to_login() {
    let (app, _) = app(seeded_store());

    let response = app
        .oneshot(get("/booking/provider?serviceId=svc-braces", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/auth/login?redirect=%2Fbooking");
}

#[tokio::test]
async fn selection_points_at_datetime_step() {
    let (app, _) = app(seeded_store());

    let response = app
        .oneshot(get("/booking/provider/select?serviceId=svc-braces&providerId=p1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["next"], "/booking/datetime?serviceId=svc-braces&providerId=p1");
}
