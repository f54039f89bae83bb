//! Browser-facing HTML pages: two small forms and their result fragments.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::Serialize;

use weekcast_core::City;

use crate::dto::{CityDateForm, CityForm};
use crate::error::ApiError;
use crate::state::AppState;
use crate::templates;
use crate::useragent::UserAgent;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/list/city", get(city_form).post(week_page))
        .route("/city/date", get(city_date_form).post(day_page))
        .route("/useragent", get(useragent))
}

#[derive(Serialize)]
struct WeekPage<'a> {
    city: &'a str,
    lines: Vec<String>,
}

#[derive(Serialize)]
struct DayPage<'a> {
    city: &'a str,
    date: &'a str,
    summary: String,
}

#[derive(Serialize)]
struct AgentPage {
    platform: &'static str,
    browser: &'static str,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_static(templates::INDEX)?))
}

pub async fn city_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_static(templates::CITY_FORM)?))
}

pub async fn city_date_form(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_static(templates::DATE_FORM)?))
}

pub async fn week_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CityForm>,
) -> Result<Html<String>, ApiError> {
    let city = City::new(&form.text)?;
    let forecast = state.forecast.week(&city).await?;

    let page = WeekPage {
        city: city.as_str(),
        lines: forecast.display_lines(),
    };
    Ok(Html(state.templates.render(templates::WEEK, &page)?))
}

pub async fn day_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CityDateForm>,
) -> Result<Html<String>, ApiError> {
    let city = City::new(&form.city)?;
    let entry = state.forecast.day(&city, &form.date).await?;

    let page = DayPage {
        city: city.as_str(),
        date: &form.date,
        summary: entry.summary(),
    };
    Ok(Html(state.templates.render(templates::DAY, &page)?))
}

pub async fn useragent(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    let agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(UserAgent::parse);

    let page = AgentPage {
        platform: agent.and_then(|ua| ua.platform).unwrap_or("an unknown"),
        browser: agent.and_then(|ua| ua.browser).unwrap_or("an unknown"),
    };
    Ok(Html(state.templates.render(templates::USER_AGENT, &page)?))
}
