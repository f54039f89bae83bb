use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "weekcast API",
        version = "0.1.0",
        description = "Seven-day city forecast scraped from the upstream weather page."
    ),
    paths(
        crate::routes::get_week,
        crate::routes::get_day,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::ForecastDayResponse,
        crate::dto::WeekResponse,
        crate::dto::DayResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "forecast", description = "Weekly and single-day forecasts"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
