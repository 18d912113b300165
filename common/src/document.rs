//! Printable quotation document, derived from a [`DisplayModel`].
//!
//! Everything the view shows is computed here as text so the page components
//! only lay it out.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::display_model::DisplayModel;
use crate::money::{format_rupee_rate, format_rupees};

pub const DOCUMENT_TITLE: &str = "QUOTATION";
pub const VENDOR_NAME: &str = "Computer Shop";
pub const THANK_YOU_NOTE: &str = "Thank you for your business!";
pub const VALIDITY_NOTE: &str = "This quotation is valid for 30 days from the date of issue.";
pub const TAX_LABEL: &str = "Tax (0%):";
pub const QUOTE_NUMBER_PREFIX: &str = "QT-";
pub const INVALID_DATE: &str = "Invalid Date";

const QUOTE_NUMBER_SUFFIX_LEN: usize = 6;
const DESCRIPTION_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationDocument {
    pub bill_to: BillTo,
    pub date: String,
    pub quote_number: String,
    pub rows: Vec<DocumentRow>,
    pub subtotal: String,
    pub tax: String,
    pub grand_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillTo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRow {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
    pub striped: bool,
}

impl QuotationDocument {
    /// Builds the document with dates shown in the viewer's local time zone.
    pub fn build(model: &DisplayModel, identifier: &str) -> Self {
        Self::build_in_timezone(model, identifier, &Local)
    }

    pub fn build_in_timezone<Tz>(model: &DisplayModel, identifier: &str, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let customer = model.customer();
        let rows = model
            .products()
            .iter()
            .enumerate()
            .map(|(index, product)| DocumentRow {
                name: product.name.clone(),
                description: visible_description(&product.description).map(str::to_string),
                category: Some(product.category.clone()).filter(|c| !c.is_empty()),
                quantity: format_quantity(product.order_quantity),
                unit_price: format_rupee_rate(product.selling_rate),
                line_total: format_rupees(line_total(product.selling_rate, product.order_quantity)),
                striped: index % 2 == 0,
            })
            .collect();
        // subtotal is the recorded total, not the sum of the rows
        let total = format_rupees(model.total_amount());

        Self {
            bill_to: BillTo {
                name: customer.name.clone(),
                email: customer.email.clone(),
                phone: customer.phone.clone(),
                address: customer.address.clone(),
            },
            date: format_quote_date_in(model.created_at(), tz),
            quote_number: quote_number(identifier),
            rows,
            subtotal: total.clone(),
            tax: format_rupees(0.0),
            grand_total: total,
        }
    }
}

/// Unrounded line total; rounding happens once, when the product is formatted.
pub fn line_total(selling_rate: f64, order_quantity: f64) -> f64 {
    selling_rate * order_quantity
}

/// `"QT-"` followed by the last six characters of the identifier.
pub fn quote_number(identifier: &str) -> String {
    let len = identifier.chars().count();
    let suffix: String = identifier
        .chars()
        .skip(len.saturating_sub(QUOTE_NUMBER_SUFFIX_LEN))
        .collect();
    format!("{QUOTE_NUMBER_PREFIX}{suffix}")
}

/// Description sub-line, if it carries anything worth showing.
pub fn visible_description(description: &str) -> Option<&str> {
    if description.trim().is_empty() || description == DESCRIPTION_PLACEHOLDER {
        None
    } else {
        Some(description)
    }
}

pub fn format_quantity(quantity: f64) -> String {
    if quantity == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    quantity.to_string()
}

/// `D/M/YYYY` in the viewer's local time zone.
pub fn format_quote_date(created_at: Option<&str>) -> String {
    format_quote_date_in(created_at, &Local)
}

pub fn format_quote_date_in<Tz>(created_at: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match created_at.and_then(|raw| parse_timestamp(raw, tz)) {
        Some(instant) => instant.with_timezone(tz).format("%-d/%-m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

// Offsets in the string win; date-only values are UTC midnight and
// date-times without an offset are wall-clock time in `tz`.
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}
