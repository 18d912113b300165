//! Client API calls for quotation endpoints.

use common::quotation::QuotationSummary;
use common::view_state::QuotationLookup;
use dioxus::prelude::*;


#[server]
pub async fn lookup_quotation(quotation_id: String) -> Result<QuotationLookup, ServerFnError> {
    Ok(backend::api::quotations::lookup_quotation(Some(quotation_id)).await)
}

#[server]
pub async fn list_quotations() -> Result<Vec<QuotationSummary>, ServerFnError> {
    let x = backend::api::quotations::list_quotations().await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}
