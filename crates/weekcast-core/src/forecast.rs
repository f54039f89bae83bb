//! Alignment of scraped field lists into forecast entries.
//!
//! The upstream page renders dates, temperatures and conditions in three
//! separate markup regions with no shared key. The only link between them is
//! position, so [`align`] checks that all three lists have the same length
//! before zipping them, and then keeps only [`FORECAST_WINDOW`].

use std::ops::Range;

use crate::error::ExtractError;
use crate::models::{FieldLists, ForecastEntry, ForecastSet};

/// Raw indices reported to callers.
///
/// Index 0 is the "today" block, which the upstream fills with different
/// data (current conditions rather than a day forecast). It must stay
/// excluded; only the seven day-by-day entries that follow are reported.
pub const FORECAST_WINDOW: Range<usize> = 1..8;

/// Unicode MINUS SIGN as used by the upstream for negative temperatures.
const UNICODE_MINUS: char = '\u{2212}';

/// Replaces U+2212 with ASCII `-`. Nothing else is touched.
pub fn normalize_temperature(raw: &str) -> String {
    raw.replace(UNICODE_MINUS, "-")
}

/// Zips the three field lists into a date-keyed forecast for
/// [`FORECAST_WINDOW`].
pub fn align(fields: FieldLists) -> Result<ForecastSet, ExtractError> {
    let FieldLists {
        conditions,
        dates,
        temperatures,
    } = fields;

    if conditions.len() != dates.len() || dates.len() != temperatures.len() {
        return Err(ExtractError::Misalignment {
            conditions: conditions.len(),
            dates: dates.len(),
            temperatures: temperatures.len(),
        });
    }

    if dates.len() < FORECAST_WINDOW.end {
        return Err(ExtractError::InsufficientDays {
            found: dates.len(),
            required: FORECAST_WINDOW.end,
        });
    }

    let forecast = dates
        .into_iter()
        .zip(temperatures)
        .zip(conditions)
        .skip(FORECAST_WINDOW.start)
        .take(FORECAST_WINDOW.len())
        .map(|((date, temperature), condition)| ForecastEntry {
            date,
            temperature_c: normalize_temperature(&temperature),
            condition,
        })
        .collect();

    Ok(forecast)
}
