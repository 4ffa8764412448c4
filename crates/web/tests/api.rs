use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use directions::client::DirectionsClient;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tracking::LocationStore;
use web::{router, WebState};

fn test_app() -> axum::Router {
    router(WebState {
        store: Arc::new(LocationStore::new()),
        directions_client: Arc::new(DirectionsClient::new(None)),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_location(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/update-location")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn can_update_and_fetch_a_location() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_location(json!({"lat": 30.3165, "lon": 78.0322})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["location"]["lat"], 30.3165);
    assert_eq!(body["location"]["lon"], 78.0322);
    assert!(body["location"]["timestamp"].is_i64());

    // no nurseId -> the whole table, ids attached
    let response = app.oneshot(get("/get-location")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["nurseId"], "default");
    assert_eq!(records[0]["lat"], 30.3165);
}

#[tokio::test]
async fn can_track_nurses_independently() {
    let app = test_app();

    for (id, lat) in [("anna", 54.0), ("birte", 53.0)] {
        let response = app
            .clone()
            .oneshot(post_location(
                json!({"lat": lat, "lon": 10.0, "nurseId": id}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(get("/get-location?nurseId=anna"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["lat"], 54.0);

    let response = app
        .oneshot(get("/get-location?nurseId=carla"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn rejects_non_numeric_coordinates() {
    let response = test_app()
        .oneshot(post_location(json!({"lat": "north", "lon": 78.0322})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid coordinates");
}

#[tokio::test]
async fn empty_store_yields_not_found() {
    let response = test_app().oneshot(get("/get-location")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No location data available");
}

#[tokio::test]
async fn can_estimate_a_route() {
    let response = test_app()
        .oneshot(get(
            "/api/route?from_lat=0&from_lng=0&to_lat=0&to_lng=1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let distance = body["distance"].as_f64().unwrap();
    assert!((distance - 144_553.0).abs() < 10.0);
    assert_eq!(body["duration"], 17_346);
    assert_eq!(body["geometry"]["type"], "LineString");

    let coordinates = body["geometry"]["coordinates"].as_array().unwrap();
    assert_eq!(coordinates.len(), 11);
    assert_eq!(coordinates[0][0], 0.0);
    assert_eq!(coordinates[10][0], 1.0);
    assert_eq!(body["steps"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn route_with_missing_parameter_is_rejected() {
    let response = test_app()
        .oneshot(get("/api/route?from_lat=0&from_lng=0&to_lat=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing coordinates");
}

#[tokio::test]
async fn realroute_validates_before_contacting_the_provider() {
    let response = test_app()
        .oneshot(get("/api/realroute?from_lat=0&from_lng=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing coordinates");
}

#[tokio::test]
async fn realroute_without_api_key_reports_an_upstream_error() {
    let response = test_app()
        .oneshot(get(
            "/api/realroute?from_lat=0&from_lng=0&to_lat=0&to_lng=1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn unknown_api_route_yields_the_error_envelope() {
    let response = test_app().oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn ping_pongs() {
    let response = test_app().oneshot(get("/api/ping")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "pong!");
}
