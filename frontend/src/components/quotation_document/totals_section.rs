use common::document::TAX_LABEL;
use dioxus::prelude::*;

/// Subtotal, zero tax and grand total.
#[component]
pub fn TotalsSection(subtotal: String, tax: String, grand_total: String) -> Element {
    rsx! {
        div {
            class: "totals-wrapper",
            div {
                class: "totals",
                div {
                    class: "totals-row",
                    span { "Subtotal:" }
                    span { "{subtotal}" }
                }
                div {
                    class: "totals-row",
                    span { "{TAX_LABEL}" }
                    span { "{tax}" }
                }
                div {
                    class: "totals-row grand-total",
                    span { "TOTAL:" }
                    span { "{grand_total}" }
                }
            }
        }
    }
}
