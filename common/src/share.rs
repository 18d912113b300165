//! WhatsApp share link for a quotation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::display_model::DisplayModel;
use crate::money::format_rupees_plain;

pub const SHARE_PROVIDER_URL: &str = "https://wa.me/";
pub const SHARE_HEADLINE: &str = "Computer Shop Quotation";
pub const SHARED_QUOTATION_PATH: &str = "/shared-quotation";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as `encodeURIComponent` does.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Public URL of the shared quotation page, e.g. `https://shop.example/shared-quotation/abc123`.
pub fn shared_quotation_url(origin: &str, identifier: &str) -> String {
    format!("{origin}{SHARED_QUOTATION_PATH}/{identifier}")
}

pub fn share_message(customer_name: &str, total_amount: f64, shareable_url: &str) -> String {
    format!(
        "{SHARE_HEADLINE}\n\nCustomer: {customer_name}\nTotal: {}\n\nView PDF: {shareable_url}",
        format_rupees_plain(total_amount)
    )
}

/// Link that opens WhatsApp with the share message pre-filled in `text`.
///
/// Spaces are written as `%20`, never `+`.
pub fn share_link(origin: &str, identifier: &str, model: &DisplayModel) -> String {
    let shareable_url = shared_quotation_url(origin, identifier);
    let message = share_message(&model.customer().name, model.total_amount(), &shareable_url);
    format!("{SHARE_PROVIDER_URL}?text={}", utf8_percent_encode(&message, URI_COMPONENT))
}
