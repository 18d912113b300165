//! Endpoint for listing every quotation.

use common::quotation::QuotationSummary;

use crate::diagnostics::DiagnosticEvent;

use super::client::get_quotation_client;

pub async fn list_quotations() -> anyhow::Result<Vec<QuotationSummary>> {
    let client = get_quotation_client()?;
    match client.list_summaries().await {
        Ok(summaries) => Ok(summaries),
        Err(e) => {
            client.record(DiagnosticEvent::ListFailed { cause: e.to_string() });
            Err(e.into())
        }
    }
}
