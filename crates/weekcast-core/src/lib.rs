pub mod error;
pub mod forecast;
pub mod models;
pub mod service;
pub mod traits;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use error::{AppError, ExtractError, FetchError};
pub use forecast::{FORECAST_WINDOW, align, normalize_temperature};
pub use models::{City, FieldLists, ForecastEntry, ForecastSet, RawDocument};
pub use service::ForecastService;
pub use traits::{Extractor, Fetcher};
