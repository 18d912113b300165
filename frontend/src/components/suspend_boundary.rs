use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // shown while any child resource is still pending
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator {}
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "centered-screen",
            div { class: "spinner", role: "status", aria_label: "Loading" }
        }
    }
}

#[component]
pub fn QuotationNotFound() -> Element {
    rsx! {
        div {
            class: "centered-screen",
            p { class: "muted-text", "Quotation not found" }
        }
    }
}
