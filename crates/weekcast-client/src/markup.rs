use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};
use weekcast_core::error::ExtractError;
use weekcast_core::forecast::align;
use weekcast_core::models::{FieldLists, ForecastSet, RawDocument};
use weekcast_core::traits::Extractor;

/// CSS selectors locating the three field lists on the forecast page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupProfile {
    /// One element per day; its full text is the condition.
    pub conditions: String,
    /// One element per day; its full text is the date label.
    pub dates: String,
    /// One block per day; the value is read from [`Self::temperature_value`] inside it.
    pub temperature_blocks: String,
    pub temperature_value: String,
}

impl Default for MarkupProfile {
    fn default() -> Self {
        Self {
            conditions: "div.forecast-briefly__condition".into(),
            dates: "time.time.forecast-briefly__date".into(),
            temperature_blocks: "div.temp.forecast-briefly__temp.forecast-briefly__temp_day".into(),
            temperature_value: "span.temp__value.temp__value_with-unit".into(),
        }
    }
}

struct Selectors {
    conditions: Selector,
    dates: Selector,
    temperature_blocks: Selector,
    temperature_value: Selector,
}

/// Forecast extractor over the upstream's "briefly" markup using `scraper`.
///
/// Selectors are compiled once at construction and shared between clones.
#[derive(Clone)]
pub struct MarkupExtractor {
    selectors: Arc<Selectors>,
}

impl MarkupExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_profile(&MarkupProfile::default())
    }

    pub fn with_profile(profile: &MarkupProfile) -> Result<Self, ExtractError> {
        let selectors = Selectors {
            conditions: compile(&profile.conditions)?,
            dates: compile(&profile.dates)?,
            temperature_blocks: compile(&profile.temperature_blocks)?,
            temperature_value: compile(&profile.temperature_value)?,
        };

        Ok(Self {
            selectors: Arc::new(selectors),
        })
    }

    /// Collects the three raw field lists in document order.
    ///
    /// A temperature block without a nested value contributes nothing, so a
    /// partially rendered block shows up as a length mismatch downstream.
    pub fn field_lists(&self, html: &Html) -> FieldLists {
        let s = &self.selectors;

        FieldLists {
            conditions: html.select(&s.conditions).map(text_of).collect(),
            dates: html.select(&s.dates).map(text_of).collect(),
            temperatures: html
                .select(&s.temperature_blocks)
                .filter_map(|block| block.select(&s.temperature_value).next())
                .map(text_of)
                .collect(),
        }
    }
}

impl Extractor for MarkupExtractor {
    fn extract(&self, doc: RawDocument) -> Result<ForecastSet, ExtractError> {
        let html = parse(&doc)?;
        let fields = self.field_lists(&html);
        tracing::debug!(
            conditions = fields.conditions.len(),
            dates = fields.dates.len(),
            temperatures = fields.temperatures.len(),
            "Collected field lists"
        );
        align(fields)
    }
}

fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn parse(doc: &RawDocument) -> Result<Html, ExtractError> {
    let text = std::str::from_utf8(doc.as_bytes())
        .map_err(|e| ExtractError::ParseFailure(format!("document is not valid UTF-8: {e}")))?;

    if text.trim().is_empty() {
        return Err(ExtractError::ParseFailure("document has no content".into()));
    }

    Ok(Html::parse_document(text))
}

/// All descendant text, untrimmed.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
