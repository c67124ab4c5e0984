//! Products domain module.
//!
//! This crate contains the catalog record model and the field-level validation rules
//! applied to it, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod product;
pub mod validation;

pub use product::{Product, ProductId, Rating};
pub use validation::{
    ActualValue, Field, Rule, ValidationError, validate_product, validate_products,
};
