//! The paced source stream over a roster provider.
//!
//! [`RosterFeed`] is the entry point of the pipeline. Every stream it
//! returns is lazy, finite and one-shot: the roster is fetched from the
//! provider when the stream is first polled, each element is yielded only
//! after its emit delay has elapsed, and a drained stream keeps signalling
//! end-of-stream without ever restarting.

use crate::provider::RosterProvider;
use crate::roster::Player;
use crate::stages;
use crate::types::{Country, PlayerName};
use futures::stream::{self, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Delay observed before every element the source yields.
///
/// Simulates per-element fetch latency. Delays never overlap, so draining
/// N elements takes about N times this value.
pub const EMIT_DELAY: Duration = Duration::from_millis(200);

/// A boxed, heap-pinned stream of players.
pub type PlayerStream = Pin<Box<dyn Stream<Item = Player> + Send>>;

/// A boxed, heap-pinned stream of projected player names.
pub type NameStream = Pin<Box<dyn Stream<Item = PlayerName> + Send>>;

/// Lazy, pull-driven feed over a roster provider.
///
/// The feed itself holds no roster data, only the provider and the pacing
/// configuration. Each call to [`players`](Self::players),
/// [`by_country`](Self::by_country) or [`names`](Self::names) builds an
/// independent pipeline instance, so two drains of the same feed yield
/// identical sequences without sharing any mutable state.
///
/// Dropping a partially-drained stream releases its pending delay timer;
/// abandoning a pipeline requires no teardown call beyond ceasing to poll.
#[derive(Debug)]
pub struct RosterFeed<P> {
    provider: Arc<P>,
    emit_delay: Duration,
}

impl<P> RosterFeed<P>
where
    P: RosterProvider + 'static,
{
    /// Creates a feed with the default [`EMIT_DELAY`] pacing.
    pub fn new(provider: P) -> Self {
        Self::with_emit_delay(provider, EMIT_DELAY)
    }

    /// Creates a feed with custom pacing.
    ///
    /// Intended for tests and demos that cannot afford real-time delays;
    /// production feeds keep the default.
    pub fn with_emit_delay(provider: P, emit_delay: Duration) -> Self {
        Self {
            provider: Arc::new(provider),
            emit_delay,
        }
    }

    /// Returns the full player sequence, in roster order.
    ///
    /// The roster is fetched when the returned stream is first polled, not
    /// here. The stream is fused: once exhausted it yields end-of-stream
    /// on every further poll, it never rewinds.
    pub fn players(&self) -> PlayerStream {
        let provider = Arc::clone(&self.provider);
        let emit_delay = self.emit_delay;
        let source = stream::once(async move {
            let roster = provider.fetch().await;
            tracing::debug!(players = roster.len(), "roster fetched");
            stream::iter(roster)
        })
        .flatten()
        .then(move |player| async move {
            tokio::time::sleep(emit_delay).await;
            tracing::debug!(id = %player.id, rank = %player.rank, "player emitted");
            player
        })
        .fuse();
        Box::pin(source)
    }

    /// Returns only the players from `country`, in roster order.
    ///
    /// Unmatched upstream elements are pulled and discarded on demand, so
    /// the consumer still pays their emit delays: one matched element may
    /// cost several upstream pulls.
    pub fn by_country(&self, country: Country) -> PlayerStream {
        Box::pin(stages::filter_by_country(self.players(), Some(country)))
    }

    /// Returns the name of each player, in roster order.
    ///
    /// A pure 1:1 projection; each pull costs exactly one upstream pull.
    pub fn names(&self) -> NameStream {
        Box::pin(stages::project_names(self.players()))
    }
}
