use crate::error::AppError;
use crate::models::{City, ForecastEntry, ForecastSet};
use crate::traits::{Extractor, Fetcher};

/// Runs the forecast pipeline: fetch page → extract and align → optional date lookup.
///
/// Generic over the fetcher and extractor so the pipeline can be exercised
/// without real HTTP. Holds no mutable state; clones share nothing that
/// changes between calls.
#[derive(Clone)]
pub struct ForecastService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    fetcher: F,
    extractor: E,
}

impl<F, E> ForecastService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    /// The seven-day forecast for `city`, in page order.
    pub async fn week(&self, city: &City) -> Result<ForecastSet, AppError> {
        tracing::info!(%city, "Fetching forecast");
        let doc = self.fetcher.fetch(city).await?;
        tracing::info!(%city, bytes = doc.len(), "Fetched forecast page");

        let forecast = self.extractor.extract(doc)?;
        tracing::info!(%city, days = forecast.len(), "Forecast extracted");

        Ok(forecast)
    }

    /// The forecast for one exact date label, e.g. `"21 Mar"`.
    ///
    /// Fails with [`crate::ExtractError::UnknownDate`] when the label is not
    /// among the reported days.
    pub async fn day(&self, city: &City, date: &str) -> Result<ForecastEntry, AppError> {
        let forecast = self.week(city).await?;
        let entry = forecast.entry_for(date)?.clone();
        Ok(entry)
    }

    /// `"<date> <temp>C <condition>"` lines for the week.
    pub async fn extract_week(&self, city: &str) -> Result<Vec<String>, AppError> {
        let city = City::new(city)?;
        Ok(self.week(&city).await?.display_lines())
    }

    /// `"<temp>C <condition>"` for one date.
    pub async fn extract_day(&self, city: &str, date: &str) -> Result<String, AppError> {
        let city = City::new(city)?;
        Ok(self.day(&city, date).await?.summary())
    }
}
