pub mod config;
pub mod fetcher;
pub mod markup;

pub use config::FetchConfig;
pub use fetcher::ReqwestFetcher;
pub use markup::{MarkupExtractor, MarkupProfile};

use weekcast_core::{AppError, ForecastService};

/// The production pipeline: reqwest fetcher + markup extractor.
pub type WeatherService = ForecastService<ReqwestFetcher, MarkupExtractor>;

/// Builds a [`WeatherService`] from `config` with the default markup profile.
pub fn weather_service(config: FetchConfig) -> Result<WeatherService, AppError> {
    let fetcher = ReqwestFetcher::with_config(config)?;
    let extractor = MarkupExtractor::new()?;
    Ok(ForecastService::new(fetcher, extractor))
}
