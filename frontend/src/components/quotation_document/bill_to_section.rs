use common::document::BillTo;
use dioxus::prelude::*;

#[component]
pub fn BillToSection(bill_to: BillTo, date: String, quote_number: String) -> Element {
    rsx! {
        div {
            class: "bill-to-grid",
            div {
                h3 { "Bill To:" }
                div {
                    class: "detail-lines",
                    p { class: "customer-name", "{bill_to.name}" }
                    p { "{bill_to.email}" }
                    p { "{bill_to.phone}" }
                    p { "{bill_to.address}" }
                }
            }
            div {
                class: "quote-details",
                h3 { "Quote Details:" }
                div {
                    class: "detail-lines",
                    p { span { class: "label", "Date:" } " {date}" }
                    p { span { class: "label", "Quote #:" } " {quote_number}" }
                }
            }
        }
    }
}
