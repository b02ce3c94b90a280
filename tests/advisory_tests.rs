//! End-to-end tests for the advisory API
//!
//! Drives the real router with `tower::ServiceExt::oneshot`, standing in
//! for OpenWeatherMap with a wiremock server.

use agri_advisory::config::{Config, ServerConfig, WeatherConfig};
use agri_advisory::{create_app, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app(api_endpoint: &str, api_key: &str) -> Router {
    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        weather: WeatherConfig {
            api_endpoint: api_endpoint.to_string(),
            api_key: api_key.to_string(),
        },
    };
    create_app(AppState::new(config))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn owm_body() -> Value {
    json!({
        "coord": {"lon": 80.27, "lat": 13.08},
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
        "main": {"temp": 31.27, "feels_like": 35.1, "temp_min": 30.0, "temp_max": 32.0,
                 "pressure": 1008, "humidity": 74},
        "wind": {"speed": 4.2, "deg": 180},
        "rain": {"1h": 2.5},
        "dt": 1724400000,
        "name": "Chennai"
    })
}

#[tokio::test]
async fn provider_success_flows_through_to_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "Chennai,IN"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(owm_body()))
        .mount(&server)
        .await;

    // "Tamil Nadu" resolves through the state table to Chennai,IN
    let (status, body) = get_json(
        test_app(&server.uri(), "test-key"),
        "/weather/Tamil%20Nadu?crop=Rice",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "Provider");
    assert_eq!(body["temperature"], 31.3);
    assert_eq!(body["humidity"], 74);
    assert_eq!(body["rainfall_mm"], 2.5);
    assert_eq!(body["pressure"], 1008);
    assert_eq!(body["weather_main"], "Clouds");
    assert_eq!(body["location"], "Tamil Nadu");
    assert_eq!(body["crop_type"], "rice");
    assert_eq!(body["water_priority"], "High");
}

#[tokio::test]
async fn provider_failure_falls_back_to_synthetic_weather() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get_json(
        test_app(&server.uri(), "test-key"),
        "/weather/Chennai?crop=Wheat",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "Fallback");
    assert_eq!(body["location"], "Chennai");
    assert_eq!(body["crop_type"], "wheat");
    assert_eq!(body["water_priority"], "Medium");
    assert_eq!(body["pressure"], 1012);
    assert_eq!(body["weather_main"], "Clear");

    let temperature = body["temperature"].as_f64().unwrap();
    assert!((24.0..=29.0).contains(&temperature));
    let humidity = body["humidity"].as_i64().unwrap();
    assert!((55..=80).contains(&humidity));
    let rainfall = body["rainfall_mm"].as_f64().unwrap();
    assert!((0.0..=3.5).contains(&rainfall));
    let wind = body["wind_speed"].as_f64().unwrap();
    assert!((5.0..=15.0).contains(&wind));

    let score = body["irrigation_score"].as_i64().unwrap();
    assert!((0..=100).contains(&score));
    let confidence = body["confidence_percent"].as_i64().unwrap();
    assert!((75..=98).contains(&confidence));
    assert_eq!(body["irrigate"].as_bool().unwrap(), score > 65);
}

#[tokio::test]
async fn malformed_provider_payload_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (status, body) = get_json(test_app(&server.uri(), "test-key"), "/weather/Mumbai").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "Fallback");
}

#[tokio::test]
async fn missing_rain_field_defaults_to_zero() {
    let mut payload = owm_body();
    payload.as_object_mut().unwrap().remove("rain");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let (_, body) = get_json(test_app(&server.uri(), "test-key"), "/weather/Chennai").await;

    assert_eq!(body["source"], "Provider");
    assert_eq!(body["rainfall_mm"], 0.0);
}

#[tokio::test]
async fn crop_defaults_to_rice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_, body) = get_json(test_app(&server.uri(), "test-key"), "/weather/Delhi").await;
    assert_eq!(body["crop_type"], "rice");
}

#[tokio::test]
async fn unknown_location_returns_guidance() {
    let (status, body) = get_json(test_app("http://127.0.0.1:9", "k"), "/weather/Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Invalid location");

    let cities = body["available_cities"].as_array().unwrap();
    assert_eq!(cities.len(), 15);
    assert!(cities.contains(&json!("Chennai")));
    assert!(cities.contains(&json!("Ahmedabad")));

    let states = body["available_states"].as_array().unwrap();
    assert_eq!(states.len(), 10);
    assert!(states.contains(&json!("Punjab")));
    assert!(states.contains(&json!("Tamil Nadu")));
}

#[tokio::test]
async fn crops_endpoint_lists_exactly_the_eight_categories() {
    let (status, body) = get_json(test_app("http://127.0.0.1:9", "k"), "/crops").await;

    assert_eq!(status, StatusCode::OK);
    let mut crops: Vec<&str> = body["crops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    crops.sort_unstable();
    assert_eq!(
        crops,
        vec![
            "cotton",
            "fruits",
            "millets",
            "pulses",
            "rice",
            "sugarcane",
            "vegetables",
            "wheat"
        ]
    );
}

#[tokio::test]
async fn health_reports_key_presence() {
    let (status, body) = get_json(test_app("http://127.0.0.1:9", "some-key"), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_key_configured"], true);
    assert!(body["timestamp"].is_string());

    let (_, body) = get_json(test_app("http://127.0.0.1:9", ""), "/health").await;
    assert_eq!(body["api_key_configured"], false);
}

#[tokio::test]
async fn home_describes_the_service() {
    let (status, body) = get_json(test_app("http://127.0.0.1:9", "k"), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Precision Agriculture API");
    assert_eq!(body["weather_endpoint"], "/weather/<city_or_state>?crop=rice");
    assert_eq!(body["cities"].as_array().unwrap().len(), 15);
    assert_eq!(body["states"].as_array().unwrap().len(), 10);
}
