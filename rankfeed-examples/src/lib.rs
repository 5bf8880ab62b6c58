//! Example pipelines and collaborator shapes for the `rankfeed` library.
//!
//! The `storefront` module holds the plain data shapes exchanged with the
//! ordering side of the system; the `roster_feed` example binary drains
//! the three streaming pipelines with logging enabled.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod storefront;
