use std::fmt;

use serde::Serialize;

use crate::error::{AppError, ExtractError};

/// City identifier as embedded in the upstream request path.
///
/// Always lower-cased. Beyond rejecting empty input no validation or
/// escaping is applied; callers own the character set they pass in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::InvalidCity("city name must not be empty".into()));
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw forecast page body as returned by a [`crate::traits::Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument(Vec<u8>);

impl RawDocument {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self(body.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RawDocument {
    fn from(body: String) -> Self {
        Self(body.into_bytes())
    }
}

impl From<&str> for RawDocument {
    fn from(body: &str) -> Self {
        Self(body.as_bytes().to_vec())
    }
}

/// The three per-field sequences scraped from one document, each in
/// document order. Same-index elements are expected to describe the same
/// day; see [`crate::forecast::align`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLists {
    pub conditions: Vec<String>,
    pub dates: Vec<String>,
    pub temperatures: Vec<String>,
}

/// One day's forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastEntry {
    /// Date label exactly as the upstream renders it (e.g. "21 Mar").
    pub date: String,
    /// Signed Celsius value, e.g. "-13" or "+10".
    pub temperature_c: String,
    pub condition: String,
}

impl ForecastEntry {
    /// `"<temp>C <condition>"`
    pub fn summary(&self) -> String {
        format!("{}C {}", self.temperature_c, self.condition)
    }
}

impl fmt::Display for ForecastEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}C {}", self.date, self.temperature_c, self.condition)
    }
}

/// Date-keyed forecast in document order.
///
/// Re-inserting an existing date replaces its entry in place, so the
/// position of the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ForecastSet {
    entries: Vec<ForecastEntry>,
}

impl ForecastSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: ForecastEntry) {
        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, date: &str) -> Option<&ForecastEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Looks up `date` exactly; a missing date is an error, never a default.
    pub fn entry_for(&self, date: &str) -> Result<&ForecastEntry, ExtractError> {
        self.get(date)
            .ok_or_else(|| ExtractError::UnknownDate(date.to_string()))
    }

    pub fn summary_for(&self, date: &str) -> Result<String, ExtractError> {
        self.entry_for(date).map(ForecastEntry::summary)
    }

    /// `"<date> <temp>C <condition>"` for every day, in order.
    pub fn display_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.date.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ForecastSet {
    type Item = ForecastEntry;
    type IntoIter = std::vec::IntoIter<ForecastEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ForecastSet {
    type Item = &'a ForecastEntry;
    type IntoIter = std::slice::Iter<'a, ForecastEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<ForecastEntry> for ForecastSet {
    fn from_iter<I: IntoIterator<Item = ForecastEntry>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}
