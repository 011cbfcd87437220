//! Shared domain types and boundary normalization rules for the derby
//! sponsor hub.
//!
//! Everything here is pure and synchronous; the db and api crates build
//! on top of it.

pub mod company;
pub mod error;
pub mod sponsorship;
pub mod types;
