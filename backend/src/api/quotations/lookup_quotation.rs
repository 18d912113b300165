//! Endpoint for looking up one quotation by id.

use common::view_state::QuotationLookup;
use tracing::error;

use super::client::get_quotation_client;

pub async fn lookup_quotation(quotation_id: Option<String>) -> QuotationLookup {
    let client = match get_quotation_client() {
        Ok(client) => client,
        Err(e) => {
            error!("Quotation client is misconfigured: {:#}", e);
            return QuotationLookup::FetchFailed(format!("{e:#}"));
        }
    };
    client.lookup(quotation_id.as_deref()).await
}
