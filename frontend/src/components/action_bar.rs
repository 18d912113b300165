//! Share, print and back actions of the quotation view.

use common::display_model::DisplayModel;
use common::share::share_link;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::{md_action_icons::MdPrint, md_navigation_icons::MdArrowBack, md_social_icons::MdShare};

use crate::browser::{current_origin, open_in_new_tab, print_document};
use crate::routes::Route;

/// Floating share/print buttons, hidden when printing.
#[component]
pub fn ActionBar(quotation_id: ReadSignal<String>, model: ReadSignal<DisplayModel>, show_share: bool) -> Element {
    let do_share = use_callback(move |_: ()| {
        let Some(origin) = current_origin() else {
            warn!("No window origin, cannot build share link");
            return;
        };
        let quotation_id = quotation_id();
        let link = share_link(&origin, &quotation_id, &model.read());
        info!("Sharing quotation {} via WhatsApp", quotation_id);
        open_in_new_tab(&link);
    });

    rsx! {
        div {
            class: "no-print action-bar",
            if show_share {
                button {
                    class: "btn btn-whatsapp",
                    onclick: move |_| do_share.call(()),
                    Icon { icon: MdShare, class: "btn-icon" }
                    span { class: "btn-label", "WhatsApp" }
                }
            }
            button {
                class: "btn btn-print",
                onclick: move |_| print_document(),
                Icon { icon: MdPrint, class: "btn-icon" }
                span { class: "btn-label", "Print" }
            }
        }
    }
}

#[component]
pub fn BackButton() -> Element {
    rsx! {
        button {
            class: "no-print btn btn-back",
            onclick: move |_| {
                navigator().push(Route::QuotationListPage {});
            },
            Icon { icon: MdArrowBack, class: "btn-icon" }
            span { class: "btn-label", "Back" }
        }
    }
}
