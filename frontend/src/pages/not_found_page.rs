use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Computer Shop - Page Not Found" }
        div {
            class: "centered-screen column",
            p { class: "muted-text", "Nothing lives at /{path}" }
            Link { to: Route::QuotationListPage {}, "Go to quotations" }
        }
    }
}
