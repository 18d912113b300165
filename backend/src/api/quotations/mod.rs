//! Quotation API functions and module exports.

mod client;
pub use client::{QuotationClient, get_quotation_client};

mod lookup_quotation;
pub use lookup_quotation::lookup_quotation;

mod list_quotations;
pub use list_quotations::list_quotations;
