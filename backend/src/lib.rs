//! Server-side access to the quotation search API.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
