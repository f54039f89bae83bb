use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use weekcast_core::City;

use crate::dto::{DayResponse, ForecastDayResponse, HealthResponse, WeekResponse};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::pages;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/v1/forecast/{city}", get(get_week))
        .route("/v1/forecast/{city}/{date}", get(get_day));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).merge(pages::router()).with_state(state)
}

// ---------------------------------------------------------------------------
// Forecast
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/forecast/{city}",
    params(
        ("city" = String, Path, description = "City name as used by the upstream, e.g. minsk")
    ),
    responses(
        (status = 200, description = "Seven-day forecast, starting tomorrow", body = WeekResponse),
        (status = 400, description = "Empty city", body = crate::dto::ErrorResponse),
        (status = 502, description = "Upstream failure or unexpected markup", body = crate::dto::ErrorResponse),
        (status = 504, description = "Upstream timed out", body = crate::dto::ErrorResponse),
    ),
    tag = "forecast"
)]
pub async fn get_week(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let city = City::new(&city)?;
    let forecast = state.forecast.week(&city).await?;

    let response = WeekResponse {
        city: city.to_string(),
        days: forecast.into_iter().map(ForecastDayResponse::from).collect(),
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/forecast/{city}/{date}",
    params(
        ("city" = String, Path, description = "City name as used by the upstream, e.g. minsk"),
        ("date" = String, Path, description = "Date label exactly as rendered upstream, e.g. \"21 Mar\""),
    ),
    responses(
        (status = 200, description = "Forecast for one date", body = DayResponse),
        (status = 400, description = "Empty city", body = crate::dto::ErrorResponse),
        (status = 404, description = "Date not among the reported days", body = crate::dto::ErrorResponse),
        (status = 502, description = "Upstream failure or unexpected markup", body = crate::dto::ErrorResponse),
        (status = 504, description = "Upstream timed out", body = crate::dto::ErrorResponse),
    ),
    tag = "forecast"
)]
pub async fn get_day(
    State(state): State<Arc<AppState>>,
    Path((city, date)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let city = City::new(&city)?;
    let entry = state.forecast.day(&city, &date).await?;

    let response = DayResponse {
        city: city.to_string(),
        day: ForecastDayResponse::from(entry),
    };

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse { status: "healthy" })
}
