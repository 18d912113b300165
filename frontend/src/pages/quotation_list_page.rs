use common::document::format_quote_date;
use common::money::format_rupees;
use common::quotation::QuotationSummary;
use dioxus::prelude::*;

use crate::api::quotation_api::list_quotations;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;


/// Every quotation, in the order the API returns them.
#[component]
pub fn QuotationListPage() -> Element {
    rsx! {
        Title { "Computer Shop - Quotations" }
        div {
            class: "list-page",
            h1 { "Quotations" }
            SuspendWrapper {
                QuotationTable {}
            }
        }
    }
}

#[component]
fn QuotationTable() -> Element {
    let mut summaries_resource = use_resource(list_quotations);
    let summaries = match summaries_resource.suspend()?.cloned() {
        Ok(summaries) => summaries,
        Err(e) => return rsx! {
            ComponentErrorDisplay {
                error_txt: format!("{e}"),
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| summaries_resource.restart(),
                    "Try Again"
                }
            }
        },
    };
    if summaries.is_empty() {
        return rsx! {
            p { class: "muted-text", "No quotations yet." }
        };
    }
    rsx! {
        table {
            class: "quotation-list",
            thead {
                tr {
                    th { class: "align-left", "Quote #" }
                    th { class: "align-left", "Customer" }
                    th { class: "align-left", "Date" }
                    th { class: "align-center", "Items" }
                    th { class: "align-right", "Total" }
                    th {}
                }
            }
            tbody {
                for summary in summaries {
                    QuotationListRow { key: "{summary.id}", summary: summary.clone() }
                }
            }
        }
    }
}

#[component]
fn QuotationListRow(summary: QuotationSummary) -> Element {
    let date = format_quote_date(summary.created_at.as_deref());
    let total = format_rupees(summary.total_amount);
    rsx! {
        tr {
            td { "{summary.quote_number}" }
            td { "{summary.customer_name}" }
            td { "{date}" }
            td { class: "align-center", "{summary.item_count}" }
            td { class: "align-right", "{total}" }
            td {
                class: "align-right",
                Link {
                    to: Route::ViewPdfPage { id: summary.id.clone() },
                    "View"
                }
            }
        }
    }
}
