//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod quotation;
pub mod display_model;
pub mod money;
pub mod document;
pub mod share;
pub mod view_state;
