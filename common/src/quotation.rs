//! Quotation records as returned by the quotation search API.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::document::quote_number;

/// Envelope of the quotation search endpoint: `{ "data": [ ... ] }`.
///
/// Records are kept generic so callers can decide how strictly each one is decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationSearchResponse<T> {
    pub data: Option<Vec<T>>,
}

/// One quotation as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub customer_email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub customer_phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub address: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<QuotationItem>>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Populated product document. Unpopulated references (plain ids) decode as `None`.
    #[serde(default, deserialize_with = "deserialize_populated_product")]
    pub product: Option<ProductRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

/// Row of the quotation list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationSummary {
    pub id: String,
    pub quote_number: String,
    pub customer_name: String,
    pub created_at: Option<String>,
    pub total_amount: f64,
    pub item_count: usize,
}

impl From<&QuotationRecord> for QuotationSummary {
    fn from(record: &QuotationRecord) -> Self {
        Self {
            id: record.id.clone(),
            quote_number: quote_number(&record.id),
            customer_name: record.customer_name.clone().unwrap_or_default(),
            created_at: record.created_at.clone(),
            total_amount: record.total_amount.unwrap_or(0.0),
            item_count: record.items.as_ref().map(|items| items.len()).unwrap_or(0),
        }
    }
}

/// Treats empty strings like missing values.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// phone numbers are sometimes stored as JSON numbers
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseText {
        Text(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
    }

    let value = Option::<LooseText>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LooseText::Text(s) => s,
        LooseText::Integer(i) => i.to_string(),
        LooseText::Float(f) => f.to_string(),
        LooseText::Bool(b) => b.to_string(),
    }))
}

fn deserialize_populated_product<'de, D>(deserializer: D) -> Result<Option<ProductRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ProductField {
        Populated(ProductRef),
        Other(IgnoredAny),
    }

    let value = Option::<ProductField>::deserialize(deserializer)?;
    Ok(match value {
        Some(ProductField::Populated(product)) => Some(product),
        Some(ProductField::Other(_)) | None => None,
    })
}
