use dioxus::prelude::*;

use crate::pages::not_found_page::PageNotFound;
use crate::pages::quotation_list_page::QuotationListPage;
use crate::pages::shared_quotation_page::SharedQuotationPage;
use crate::pages::view_pdf_page::ViewPdfPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::QuotationListPage {})]
    #[route("/quotation-list")]
    QuotationListPage {},


    #[route("/view-pdf/:id")]
    ViewPdfPage { id: String },


    // target of the WhatsApp share link
    #[route("/shared-quotation/:id")]
    SharedQuotationPage { id: String },


    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
