//! Loader for the RPCS3 compatibility dataset.
//!
//! The document maps product code to entry metadata:
//! `{ "results": { "<id>": { status, title?, network?, ... } } }`.
//! The loader flattens it into a list of [`Entry`] records with the key
//! copied into each record's `id`.

use std::collections::BTreeMap;
use std::path::Path;

use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use roulette_core::models::{Entry, Status};

use crate::error::ApiError;

/// The compatibility list's public export.
pub const DEFAULT_DATASET_URL: &str = "https://rpcs3.net/compatibility?api=v1";

#[derive(Debug, Deserialize)]
struct CompatDocument {
    #[serde(default)]
    results: BTreeMap<String, EntryInfo>,
}

/// Wire shape of one entry, without its key.
#[derive(Debug, Deserialize)]
struct EntryInfo {
    status: Status,
    title: Option<String>,
    network: Option<u8>,
    date: Option<String>,
    #[serde(rename = "wiki-title")]
    wiki_title: Option<String>,
    thread: Option<String>,
}

impl EntryInfo {
    fn into_entry(self, id: String) -> Entry {
        Entry {
            id,
            title: self.title,
            status: self.status,
            network: self.network,
            date: self.date,
            wiki_title: self.wiki_title,
            thread: self.thread,
        }
    }
}

/// HTTP client for the compatibility dataset.
pub struct CompatClient {
    http: Client,
}

impl CompatClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status,
                message: body,
            })
        }
    }

    /// Fetch and flatten the dataset.
    pub async fn fetch(&self, url: &str) -> Result<Vec<Entry>, ApiError> {
        let resp = self.http.get(url).send().await?;
        let resp = Self::check_response(resp).await?;
        let doc: CompatDocument = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(flatten(doc))
    }

    /// Fetch the dataset; any failure is logged and yields an empty list
    /// so downstream filtering degrades to an empty pool.
    pub async fn fetch_or_empty(&self, url: &str) -> Vec<Entry> {
        match self.fetch(url).await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Error loading compatibility data: {e}");
                Vec::new()
            }
        }
    }
}

impl Default for CompatClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a dataset document from a JSON string.
pub fn parse_document(json: &str) -> Result<Vec<Entry>, ApiError> {
    let doc: CompatDocument =
        serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(flatten(doc))
}

/// Load the dataset from a local JSON file.
pub fn load_file(path: &Path) -> Result<Vec<Entry>, ApiError> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

fn flatten(doc: CompatDocument) -> Vec<Entry> {
    doc.results
        .into_iter()
        .map(|(id, info)| info.into_entry(id))
        .collect()
}
