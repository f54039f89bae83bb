//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::{ExtractError, FetchError};
use crate::forecast::align;
use crate::models::{City, FieldLists, ForecastSet, RawDocument};
use crate::traits::{Extractor, Fetcher};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns queued responses and records requested cities.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<RawDocument, FetchError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self::with_responses(vec![Ok(RawDocument::from(html))])
    }

    pub fn with_error(error: FetchError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<RawDocument, FetchError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Cities passed to `fetch`, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, city: &City) -> Result<RawDocument, FetchError> {
        self.requested.lock().unwrap().push(city.as_str().to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(RawDocument::from("<html><body>default</body></html>"))
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

/// Mock extractor that ignores the document and aligns fixed field lists.
#[derive(Clone)]
pub struct MockExtractor {
    fields: Arc<FieldLists>,
}

impl MockExtractor {
    /// Runs the real alignment over `fields` on every call.
    pub fn aligning(fields: FieldLists) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }
}

impl Extractor for MockExtractor {
    fn extract(&self, _doc: RawDocument) -> Result<ForecastSet, ExtractError> {
        align(FieldLists::clone(&self.fields))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Eight raw days, 20–27 Mar. Index 1 carries a Unicode minus.
pub fn sample_week_fields() -> FieldLists {
    let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    FieldLists {
        conditions: to_vec(&[
            "clear", "cloudy", "rain", "snow", "overcast", "fog", "sleet", "storm",
        ]),
        dates: to_vec(&[
            "20 Mar", "21 Mar", "22 Mar", "23 Mar", "24 Mar", "25 Mar", "26 Mar", "27 Mar",
        ]),
        temperatures: to_vec(&[
            "+10", "\u{2212}13", "+13", "13", "\u{2212}1", "+2", "0", "+4",
        ]),
    }
}
