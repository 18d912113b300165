//! Quotation view: fetches one quotation and renders it as a printable document.

mod bill_to_section;
mod line_items_table;
mod totals_section;

use common::document::{DOCUMENT_TITLE, QuotationDocument, THANK_YOU_NOTE, VALIDITY_NOTE, VENDOR_NAME};
use common::view_state::{QuotationLookup, QuotationViewState, ResolvedLookup};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::api::quotation_api::lookup_quotation;
use crate::components::action_bar::{ActionBar, BackButton};
use crate::components::suspend_boundary::{LoadingIndicator, QuotationNotFound};

use bill_to_section::BillToSection;
use line_items_table::LineItemsTable;
use totals_section::TotalsSection;


/// Loads the quotation for `quotation_id` and shows loading, not found, or the document.
///
/// Changing `quotation_id` drops the pending lookup. Until the lookup for the new
/// identifier finishes, the view shows the loading indicator.
#[component]
pub fn QuotationViewer(quotation_id: ReadSignal<String>, shared: bool) -> Element {
    let lookup = use_resource(move || {
        let quotation_id = quotation_id();
        async move {
            let lookup = match QuotationLookup::without_fetch(&quotation_id) {
                Some(lookup) => lookup,
                None => match lookup_quotation(quotation_id.clone()).await {
                    Ok(lookup) => lookup,
                    Err(e) => {
                        error!("Error fetching quotation {}: {}", quotation_id, e);
                        QuotationLookup::FetchFailed(e.to_string())
                    }
                },
            };
            ResolvedLookup { quotation_id, lookup }
        }
    });

    let pending = matches!(*lookup.state().read(), UseResourceState::Pending);
    let view_state = QuotationViewState::for_current(&quotation_id.read(), pending, lookup.read().as_ref());
    let model = match view_state {
        QuotationViewState::Loading => return rsx! { LoadingIndicator {} },
        QuotationViewState::NotFound => return rsx! { QuotationNotFound {} },
        QuotationViewState::Loaded(model) => model,
    };
    let quotation = QuotationDocument::build(&model, &quotation_id.read());

    rsx! {
        div {
            class: "quotation-page",
            ActionBar { quotation_id, model, show_share: !shared }
            PrintableQuotation { quotation, show_back: !shared }
        }
    }
}

/// The part of the page that ends up on paper.
#[component]
fn PrintableQuotation(quotation: QuotationDocument, show_back: bool) -> Element {
    rsx! {
        div {
            class: "print-content",
            if show_back {
                BackButton {}
            }
            DocumentHeader {}
            BillToSection {
                bill_to: quotation.bill_to.clone(),
                date: quotation.date.clone(),
                quote_number: quotation.quote_number.clone(),
            }
            LineItemsTable { rows: quotation.rows.clone() }
            TotalsSection {
                subtotal: quotation.subtotal.clone(),
                tax: quotation.tax.clone(),
                grand_total: quotation.grand_total.clone(),
            }
            DocumentFooter {}
        }
    }
}

#[component]
fn DocumentHeader() -> Element {
    rsx! {
        div {
            class: "document-header",
            h1 { "{DOCUMENT_TITLE}" }
            p { "{VENDOR_NAME}" }
            hr {}
        }
    }
}

#[component]
fn DocumentFooter() -> Element {
    rsx! {
        div {
            class: "document-footer",
            p { class: "thank-you", "{THANK_YOU_NOTE}" }
            p { "{VALIDITY_NOTE}" }
        }
    }
}
