//! Quotation API configuration.

use anyhow::Context;
use reqwest::Url;

pub const SEARCH_URL_ENV: &str = "QUOTATION_SEARCH_URL";
pub const DEFAULT_SEARCH_URL: &str =
    "https://computer-shop-backend-five.vercel.app/api/orders/quotations/search";

#[derive(Debug, Clone, PartialEq)]
pub struct QuotationApiConfig {
    /// Endpoint returning the whole quotation collection as `{ "data": [...] }`.
    pub search_url: Url,
}

impl QuotationApiConfig {
    pub fn new(search_url: &str) -> anyhow::Result<Self> {
        let search_url = Url::parse(search_url)
            .with_context(|| format!("invalid quotation search URL: {search_url}"))?;
        Ok(Self { search_url })
    }

    /// Reads `QUOTATION_SEARCH_URL`, falling back to the production endpoint.
    pub fn from_env() -> anyhow::Result<Self> {
        let search_url = std::env::var(SEARCH_URL_ENV).unwrap_or(DEFAULT_SEARCH_URL.to_string());
        Self::new(&search_url)
    }
}
