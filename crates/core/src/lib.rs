//! `invoicelens-core` — shared building blocks for the invoice query layer.
//!
//! This crate contains **pure** primitives (no IO, no HTTP): the error model used
//! when validating loaded records, and small value objects for lenient amount
//! parsing and normalized customer lookups.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::{Amount, CustomerKey, ValueObject};
