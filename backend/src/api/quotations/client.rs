//! HTTP client for the quotation search endpoint.

use std::sync::Arc;

use common::display_model::DisplayModel;
use common::quotation::{QuotationRecord, QuotationSearchResponse, QuotationSummary};
use common::view_state::QuotationLookup;
use serde_json::Value;

use crate::config::QuotationApiConfig;
use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, TracingSink};
use crate::error::QuotationApiError;

/// Reads quotations from the search endpoint.
///
/// The endpoint has no per-id route, so every lookup downloads the whole
/// collection and filters it here.
#[derive(Clone)]
pub struct QuotationClient {
    http: reqwest::Client,
    config: QuotationApiConfig,
    sink: Arc<dyn DiagnosticSink>,
}

/// Client configured from the environment, logging through `tracing`.
pub fn get_quotation_client() -> anyhow::Result<QuotationClient> {
    Ok(QuotationClient::new(QuotationApiConfig::from_env()?))
}

impl QuotationClient {
    pub fn new(config: QuotationApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &QuotationApiConfig {
        &self.config
    }

    pub(crate) fn record(&self, event: DiagnosticEvent) {
        self.sink.record(event);
    }

    /// Every record of the collection, undecoded.
    pub async fn fetch_collection(&self) -> Result<Vec<Value>, QuotationApiError> {
        let response = self.http.get(self.config.search_url.clone()).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            return Err(QuotationApiError::Status { status, body: response_txt });
        }
        let response: QuotationSearchResponse<Value> = serde_json::from_str(&response_txt)?;
        Ok(response.data.unwrap_or_default())
    }

    /// Exact match on `_id`. Only the matching record is decoded.
    pub async fn find_quotation(
        &self,
        quotation_id: &str,
    ) -> Result<Option<QuotationRecord>, QuotationApiError> {
        let records = self.fetch_collection().await?;
        let Some(raw) = records
            .into_iter()
            .find(|raw| raw.get("_id").and_then(Value::as_str) == Some(quotation_id))
        else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(raw)?))
    }

    /// Looks a quotation up and normalizes it for display.
    ///
    /// Never fails: missing ids, missing records and request failures all come
    /// back as a [`QuotationLookup`] and are reported to the diagnostics sink.
    pub async fn lookup(&self, quotation_id: Option<&str>) -> QuotationLookup {
        let Some(quotation_id) = quotation_id.filter(|id| !id.is_empty()) else {
            self.record(DiagnosticEvent::LookupSkipped);
            return QuotationLookup::NotFound;
        };
        self.record(DiagnosticEvent::FetchStarted { quotation_id: quotation_id.to_string() });

        match self.find_quotation(quotation_id).await {
            Ok(Some(record)) => {
                self.record(DiagnosticEvent::QuotationFound {
                    quotation_id: quotation_id.to_string(),
                    item_count: record.items.as_ref().map(|items| items.len()).unwrap_or(0),
                });
                QuotationLookup::Found(DisplayModel::from(record))
            }
            Ok(None) => {
                self.record(DiagnosticEvent::QuotationMissing {
                    quotation_id: quotation_id.to_string(),
                });
                QuotationLookup::NotFound
            }
            Err(e) => {
                self.record(DiagnosticEvent::FetchFailed {
                    quotation_id: quotation_id.to_string(),
                    cause: e.to_string(),
                });
                QuotationLookup::FetchFailed(e.to_string())
            }
        }
    }

    /// Summaries of every decodable record, in collection order.
    pub async fn list_summaries(&self) -> Result<Vec<QuotationSummary>, QuotationApiError> {
        let records = self.fetch_collection().await?;
        let mut summaries = Vec::with_capacity(records.len());
        for raw in records {
            let quotation_id = raw.get("_id").and_then(Value::as_str).map(str::to_string);
            match serde_json::from_value::<QuotationRecord>(raw) {
                Ok(record) => summaries.push(QuotationSummary::from(&record)),
                Err(e) => self.record(DiagnosticEvent::RecordSkipped {
                    quotation_id,
                    cause: e.to_string(),
                }),
            }
        }
        Ok(summaries)
    }
}
