use serde::{Deserialize, Serialize};

use weekcast_core::models::ForecastEntry;

// ---------------------------------------------------------------------------
// Forecast
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ForecastDayResponse {
    /// Date label as rendered by the upstream, e.g. "21 Mar"
    pub date: String,
    /// Signed Celsius value, e.g. "-13"
    pub temperature_c: String,
    pub condition: String,
    /// "<temp>C <condition>"
    pub summary: String,
}

impl From<ForecastEntry> for ForecastDayResponse {
    fn from(entry: ForecastEntry) -> Self {
        let summary = entry.summary();
        Self {
            date: entry.date,
            temperature_c: entry.temperature_c,
            condition: entry.condition,
            summary,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WeekResponse {
    /// Lower-cased city name used for the upstream request
    pub city: String,
    pub days: Vec<ForecastDayResponse>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DayResponse {
    pub city: String,
    #[serde(flatten)]
    pub day: ForecastDayResponse,
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Body of `POST /list/city`.
#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub text: String,
}

/// Body of `POST /city/date`.
#[derive(Debug, Deserialize)]
pub struct CityDateForm {
    pub city: String,
    pub date: String,
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
