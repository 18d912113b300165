//! API functions called from the frontend server functions.

pub mod quotations;
