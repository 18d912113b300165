use dioxus::prelude::*;

use crate::components::quotation_document::QuotationViewer;


/// Printable quotation with share, print and back actions.
#[component]
pub fn ViewPdfPage(id: String) -> Element {
    rsx! {
        Title { "Computer Shop - Quotation" }
        QuotationViewer { quotation_id: id, shared: false }
    }
}
