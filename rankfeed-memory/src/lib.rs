//! In-memory roster provider for the `rankfeed` streaming library
//!
//! This crate provides an in-memory implementation of the `RosterProvider`
//! trait from the rankfeed crate, useful for tests and demos where no real
//! data backend exists. The default provider serves the fixed literal tour
//! roster.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use rankfeed::provider::RosterProvider;
use rankfeed::roster::{tour_top_five, Player};

/// Roster provider backed by an in-memory list.
///
/// Every fetch hands out an independent copy of the list, so feeds built
/// over the same provider never share mutable state and concurrent drains
/// are safe without locking.
#[derive(Debug, Clone)]
pub struct InMemoryRosterProvider {
    players: Vec<Player>,
}

impl InMemoryRosterProvider {
    /// Creates a provider serving `players` in the given order.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Creates a provider serving the fixed literal tour roster.
    pub fn tour() -> Self {
        Self::new(tour_top_five())
    }

    /// Returns the number of roster entries the provider serves.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether the provider serves an empty roster.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Default for InMemoryRosterProvider {
    fn default() -> Self {
        Self::tour()
    }
}

#[async_trait]
impl RosterProvider for InMemoryRosterProvider {
    async fn fetch(&self) -> Vec<Player> {
        self.players.clone()
    }
}
