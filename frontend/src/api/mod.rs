pub mod quotation_api;
