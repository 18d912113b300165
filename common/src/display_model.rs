//! Render-ready shape of a quotation.

use serde::{Deserialize, Serialize};

use crate::quotation::{QuotationItem, QuotationRecord, non_empty};

pub const ADDRESS_PLACEHOLDER: &str = "Address not provided";
pub const PRODUCT_NAME_PLACEHOLDER: &str = "Product";
pub const CATEGORY_PLACEHOLDER: &str = "No Category";

/// Normalized quotation, built once from a [`QuotationRecord`].
///
/// There is no mutating API: a new lookup always produces a new model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayModel {
    customer: CustomerInfo,
    products: Vec<ProductLine>,
    total_amount: f64,
    created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub name: String,
    pub order_quantity: f64,
    pub selling_rate: f64,
    pub description: String,
    pub category: String,
}

impl DisplayModel {
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn products(&self) -> &[ProductLine] {
        &self.products
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl From<&QuotationRecord> for DisplayModel {
    fn from(record: &QuotationRecord) -> Self {
        let customer = CustomerInfo {
            name: record.customer_name.clone().unwrap_or_default(),
            email: record.customer_email.clone().unwrap_or_default(),
            phone: record.customer_phone.clone().unwrap_or_default(),
            address: non_empty(record.address.as_deref())
                .unwrap_or(ADDRESS_PLACEHOLDER)
                .to_string(),
        };
        let products = record
            .items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ProductLine::from)
            .collect();
        // zero and missing are the same thing upstream
        let total_amount = record.total_amount.filter(|t| !t.is_nan()).unwrap_or(0.0);

        Self {
            customer,
            products,
            total_amount,
            created_at: record.created_at.clone(),
        }
    }
}

impl From<QuotationRecord> for DisplayModel {
    fn from(record: QuotationRecord) -> Self {
        Self::from(&record)
    }
}

impl From<&QuotationItem> for ProductLine {
    fn from(item: &QuotationItem) -> Self {
        let product = item.product.clone().unwrap_or_default();
        let name = non_empty(item.name.as_deref())
            .or(non_empty(product.name.as_deref()))
            .unwrap_or(PRODUCT_NAME_PLACEHOLDER)
            .to_string();

        Self {
            name,
            order_quantity: item.quantity.unwrap_or(0.0),
            selling_rate: item.price.unwrap_or(0.0),
            description: product.description.unwrap_or_default(),
            category: non_empty(product.brand.as_deref())
                .unwrap_or(CATEGORY_PLACEHOLDER)
                .to_string(),
        }
    }
}
