pub mod action_bar;
pub mod error_boundary;
pub mod quotation_document;
pub mod suspend_boundary;
