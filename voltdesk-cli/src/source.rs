//! Page sources feeding the list screens.

use std::io;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use voltdesk_lib::model::Record;
use voltdesk_lib::pagination::PageMeta;
use voltdesk_lib::RecordError;

/// Page source error type.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read data: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of records or an object with a `data` array")]
    Shape,
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
}

/// One page of records plus its pagination metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub records: Vec<Record>,
    pub meta: PageMeta,
}

/// Something that can serve records a page at a time.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch `page` (1-based) with `page_size` records per page. Out-of-range
    /// pages are clamped by the source and reported back in `meta`.
    async fn fetch(&self, page: u32, page_size: u32) -> Result<Page, SourceError>;
}

/// Serves records loaded from a JSON document, with simulated latency.
#[derive(Clone, Debug)]
pub struct JsonSource {
    records: Vec<Record>,
    latency: Duration,
}

impl JsonSource {
    /// Parse records from a JSON string.
    ///
    /// Accepts a bare array of objects or a list response of the form
    /// `{ "data": [...] }`.
    pub fn from_json_str(raw: &str) -> Result<Self, SourceError> {
        let json: serde_json::Value = serde_json::from_str(raw)?;
        let items = match json {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(mut map) => match map.remove("data") {
                Some(serde_json::Value::Array(items)) => items,
                _ => return Err(SourceError::Shape),
            },
            _ => return Err(SourceError::Shape),
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Record::from_json(item).map_err(|source| SourceError::Record { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("loaded {} records", records.len());
        Ok(Self {
            records,
            latency: Duration::ZERO,
        })
    }

    /// Read and parse records from a file.
    pub async fn from_file(path: &Path) -> Result<Self, SourceError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&raw)
    }

    /// Delay every fetch by `latency`.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PageSource for JsonSource {
    async fn fetch(&self, page: u32, page_size: u32) -> Result<Page, SourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let meta = PageMeta::from_items(page, self.records.len() as u64, page_size);
        let size = meta.effective_page_size() as usize;
        let start = (meta.current_page as usize - 1).saturating_mul(size);
        let end = start.saturating_add(size).min(self.records.len());
        let records = self.records.get(start..end).unwrap_or_default().to_vec();

        log::debug!(
            "fetched page {}/{} ({} records)",
            meta.current_page,
            meta.total_pages,
            records.len()
        );
        Ok(Page { records, meta })
    }
}
