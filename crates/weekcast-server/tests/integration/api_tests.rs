use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::common::{
    FORECAST_PAGE, body_json, setup_test_app, setup_with_upstream,
};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn week_returns_seven_days_after_today() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/Minsk")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["city"], "minsk");

    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "21 Mar");
    assert_eq!(days[0]["temperature_c"], "-13");
    assert_eq!(days[0]["condition"], "Cloudy");
    assert_eq!(days[0]["summary"], "-13C Cloudy");
    assert_eq!(days[6]["date"], "27 Mar");
    assert!(days.iter().all(|d| d["date"] != "20 Mar"));
}

#[tokio::test]
async fn upstream_receives_lowercased_city() {
    let app = setup_test_app().await;

    app.router
        .oneshot(
            Request::get("/v1/forecast/MINSK")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let requests = app.upstream.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/weather/minsk/segment/details");
    assert_eq!(requests[0].url.query(), Some("limit=10"));
}

#[tokio::test]
async fn day_returns_single_summary() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/minsk/21%20Mar")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["city"], "minsk");
    assert_eq!(json["date"], "21 Mar");
    assert_eq!(json["summary"], "-13C Cloudy");
}

#[tokio::test]
async fn unknown_date_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/minsk/01%20Jan")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "unknown_date");
    assert!(json["message"].as_str().unwrap().contains("01 Jan"));
}

#[tokio::test]
async fn today_is_not_queryable() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/minsk/20%20Mar")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_city_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "invalid_city");
}

#[tokio::test]
async fn unknown_city_upstream_404_returns_502() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/atlantis")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "upstream_error");
}

#[tokio::test]
async fn partial_markup_returns_502() {
    let upstream = MockServer::start().await;
    let broken = FORECAST_PAGE.replacen(
        r#"<div class="forecast-briefly__condition">Fog</div>"#,
        "",
        1,
    );
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(broken))
        .mount(&upstream)
        .await;
    let app = setup_with_upstream(upstream).await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/minsk")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "upstream_markup");
    assert!(json["message"].as_str().unwrap().contains("misalignment"));
}

#[tokio::test]
async fn slow_upstream_returns_504() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(FORECAST_PAGE)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&upstream)
        .await;
    let app = setup_with_upstream(upstream).await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/forecast/minsk")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn openapi_document_lists_forecast_paths() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/v1/forecast/{city}"].is_object());
    assert!(json["paths"]["/v1/forecast/{city}/{date}"].is_object());
}
