use std::future::Future;

use crate::error::{ExtractError, FetchError};
use crate::models::{City, ForecastSet, RawDocument};

/// Retrieves the raw forecast page for a city.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, city: &City) -> impl Future<Output = Result<RawDocument, FetchError>> + Send;
}

/// Turns a raw forecast page into the reported forecast window.
pub trait Extractor: Send + Sync + Clone {
    /// Consumes the document; it is not needed after extraction.
    fn extract(&self, doc: RawDocument) -> Result<ForecastSet, ExtractError>;
}
