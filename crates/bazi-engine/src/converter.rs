//! The external calendar capability boundary.
//!
//! A [`CalendarConverter`] turns a solar instant into a loosely-shaped
//! calendar record. Real converters disagree on calling convention, so the
//! trait exposes both: one taking the [`Instant`] itself and one taking the
//! decomposed local date. Either may report [`ConverterError::Unsupported`].
//!
//! Converters are optional. A [`CapabilityLoader`] acquires one
//! asynchronously and [`acquire_converter`] bounds that wait; a slow or
//! failing load is reported as absence rather than as an error.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ConverterError;
use crate::instant::Instant;

/// The converter's raw output. No schema is assumed.
pub type ConverterRecord = Value;

/// Converts a solar date or instant to calendrical pillar data.
pub trait CalendarConverter: Send + Sync {
    /// Convert an absolute instant.
    fn convert_instant(&self, instant: &Instant) -> Result<ConverterRecord, ConverterError>;

    /// Convert a decomposed local calendar date.
    fn convert_date(&self, year: i32, month: u32, day: u32)
        -> Result<ConverterRecord, ConverterError>;
}

/// Acquires a [`CalendarConverter`], possibly by loading it from elsewhere.
#[async_trait]
pub trait CapabilityLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn CalendarConverter>, ConverterError>;
}

/// Wait at most `grace` for `loader` to produce a converter.
///
/// Returns `None` when there is no loader, the load fails, or it does not
/// finish in time.
pub async fn acquire_converter(
    loader: Option<&dyn CapabilityLoader>,
    grace: Duration,
) -> Option<Arc<dyn CalendarConverter>> {
    let loader = loader?;
    match tokio::time::timeout(grace, loader.load()).await {
        Ok(Ok(converter)) => {
            debug!("calendar converter loaded");
            Some(converter)
        }
        Ok(Err(e)) => {
            warn!(error = %e, "calendar converter unavailable");
            None
        }
        Err(_) => {
            let e = ConverterError::Timeout(grace.as_millis());
            warn!(error = %e, "calendar converter unavailable");
            None
        }
    }
}

// ── TableConverter ──────────────────────────────────────────────────────────

/// A converter backed by precomputed records keyed by `YYYY-MM-DD`.
///
/// Only the decomposed-date convention is supported.
#[derive(Debug, Clone, Default)]
pub struct TableConverter {
    records: HashMap<String, ConverterRecord>,
}

impl TableConverter {
    pub fn new(records: HashMap<String, ConverterRecord>) -> Self {
        Self { records }
    }

    /// Build a table from a JSON object mapping dates to records.
    pub fn from_json(json: &str) -> Result<Self, ConverterError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ConverterError::Load(e.to_string()))?;
        match value {
            Value::Object(map) => Ok(Self::new(map.into_iter().collect())),
            other => Err(ConverterError::Load(format!(
                "expected a JSON object keyed by date, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CalendarConverter for TableConverter {
    fn convert_instant(&self, _instant: &Instant) -> Result<ConverterRecord, ConverterError> {
        Err(ConverterError::Unsupported)
    }

    fn convert_date(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<ConverterRecord, ConverterError> {
        let key = format!("{year:04}-{month:02}-{day:02}");
        self.records
            .get(&key)
            .cloned()
            .ok_or(ConverterError::NotFound(key))
    }
}

/// Loads a [`TableConverter`] from a JSON file.
#[derive(Debug, Clone)]
pub struct TableLoader {
    path: PathBuf,
}

impl TableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CapabilityLoader for TableLoader {
    async fn load(&self) -> Result<Arc<dyn CalendarConverter>, ConverterError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConverterError::Load(format!("{}: {e}", self.path.display())))?;
        let table = TableConverter::from_json(&json)?;
        debug!(path = %self.path.display(), records = table.len(), "loaded converter table");
        Ok(Arc::new(table))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
