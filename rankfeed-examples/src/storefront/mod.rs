//! Storefront collaborator shapes.
//!
//! Plain data holders exchanged with the ordering side of the system.
//! They carry no behavior beyond field storage and field-for-field
//! conversion between the domain shape and the transfer shape.

pub mod types;

pub use types::{CreateOrderRequest, OrderLine, Product, ProductDto};
