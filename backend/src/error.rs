//! Errors raised while talking to the quotation search API.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum QuotationApiError {
    #[error("quotation search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("quotation search returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not decode quotation search response: {0}")]
    Decode(#[from] serde_json::Error),
}
