use dioxus::prelude::*;

use crate::components::quotation_document::QuotationViewer;


/// Page opened from a shared link: the same document with only the print action.
#[component]
pub fn SharedQuotationPage(id: String) -> Element {
    rsx! {
        Title { "Computer Shop - Shared Quotation" }
        QuotationViewer { quotation_id: id, shared: true }
    }
}
