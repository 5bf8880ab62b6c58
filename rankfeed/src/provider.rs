//! The roster data-provider port.
//!
//! This trait is the seam between the paced feed and whatever supplies
//! the data. Backends implement it; the feed stays backend-independent.

use crate::roster::Player;
use async_trait::async_trait;

/// Port for fetching the ordered roster backing a feed.
///
/// Implementations return the whole roster in emission order; the feed
/// adds pacing on top. Every fetch must hand out an independent copy so
/// that pipelines built over the same provider share no mutable state
/// and concurrent drains are safe by construction.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Returns the ordered roster, in emission order.
    async fn fetch(&self) -> Vec<Player>;
}
