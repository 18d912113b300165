//! Diagnostic events emitted by quotation lookups.
//!
//! Lookups never surface failures to the user, so these events are the only
//! record of what happened. The sink is injectable: production code logs through
//! `tracing`, tests collect events in memory.

use std::sync::Mutex;

use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// No identifier was given, so nothing was fetched.
    LookupSkipped,
    FetchStarted { quotation_id: String },
    QuotationFound { quotation_id: String, item_count: usize },
    QuotationMissing { quotation_id: String },
    FetchFailed { quotation_id: String, cause: String },
    ListFailed { cause: String },
    /// A record in the collection could not be decoded and was left out of a listing.
    RecordSkipped { quotation_id: Option<String>, cause: String },
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: DiagnosticEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::LookupSkipped => info!("No quotation id given, skipping fetch"),
            DiagnosticEvent::FetchStarted { quotation_id } => {
                info!("Fetching quotation with id: {}", quotation_id)
            }
            DiagnosticEvent::QuotationFound { quotation_id, item_count } => {
                info!("Found quotation {} with {} items", quotation_id, item_count)
            }
            DiagnosticEvent::QuotationMissing { quotation_id } => {
                warn!("No quotation found for id: {}", quotation_id)
            }
            DiagnosticEvent::FetchFailed { quotation_id, cause } => {
                error!("Error fetching quotation {}: {}", quotation_id, cause)
            }
            DiagnosticEvent::ListFailed { cause } => error!("Error listing quotations: {}", cause),
            DiagnosticEvent::RecordSkipped { quotation_id, cause } => {
                warn!("Skipping quotation {:?}: {}", quotation_id, cause)
            }
        }
    }
}

/// Keeps every event in order of arrival.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, event: DiagnosticEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
