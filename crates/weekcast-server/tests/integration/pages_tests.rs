use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::common::{FORECAST_PAGE, body_text, setup_test_app, setup_with_upstream};

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_links_to_forms() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"href="/list/city""#));
    assert!(html.contains(r#"href="/city/date""#));
}

#[tokio::test]
async fn city_form_posts_text_field() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/list/city").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains(r#"name="text""#));
}

#[tokio::test]
async fn week_form_renders_list() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(form_post("/list/city", "text=Minsk"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.starts_with("<p>Weather in minsk for week: </p>"));
    assert!(html.contains("<li>21 Mar -13C Cloudy</li>"));
    assert!(html.contains("<li>27 Mar +4C Partly cloudy</li>"));
    assert!(!html.contains("20 Mar"));
    assert_eq!(html.matches("<li>").count(), 7);
}

#[tokio::test]
async fn day_form_renders_summary() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(form_post("/city/date", "city=minsk&date=21+Mar"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "<p>Weather in minsk on the 21 Mar: -13C Cloudy</p>"
    );
}

#[tokio::test]
async fn day_form_with_unknown_date_fails() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(form_post("/city/date", "city=minsk&date=01+Jan"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upstream_markup_in_conditions_is_escaped() {
    let upstream = MockServer::start().await;
    let hostile = FORECAST_PAGE.replacen(
        r#"<div class="forecast-briefly__condition">Cloudy</div>"#,
        r#"<div class="forecast-briefly__condition">&lt;script&gt;alert(1)&lt;/script&gt;</div>"#,
        1,
    );
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(hostile))
        .mount(&upstream)
        .await;
    let app = setup_with_upstream(upstream).await;

    let response = app
        .router
        .oneshot(form_post("/list/city", "text=<b>Minsk</b>"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Weather in &lt;b&gt;minsk&lt;&#x2F;b&gt; for week"));
    assert!(html.contains("<li>21 Mar -13C &lt;script&gt;alert(1)&lt;&#x2F;script&gt;</li>"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
}

#[tokio::test]
async fn useragent_reports_platform_and_browser() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/useragent")
                .header(
                    header::USER_AGENT,
                    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        "<p>You are using linux operation system, and accessing this app with firefox browser.</p>"
    );
}

#[tokio::test]
async fn useragent_without_header_is_unknown() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/useragent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("using an unknown operation system"));
    assert!(html.contains("with an unknown browser"));
}
