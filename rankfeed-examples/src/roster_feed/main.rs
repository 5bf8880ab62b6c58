//! Roster feed example application
//!
//! Drains the three pipelines the feed offers:
//! - the full paced player sequence
//! - the country-filtered sequence
//! - the name projection
//!
//! Run with `RUST_LOG=debug` to watch the per-element emission pacing.

use anyhow::Result;
use futures::StreamExt;
use rankfeed::{Country, RosterFeed};
use rankfeed_memory::InMemoryRosterProvider;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting roster feed example");

    let feed = RosterFeed::new(InMemoryRosterProvider::tour());

    info!("Draining the full roster, one element per emit delay");
    let mut players = feed.players();
    while let Some(player) = players.next().await {
        info!(
            rank = %player.rank,
            name = %player.name,
            country = %player.country,
            "player"
        );
    }

    info!("Draining the Spanish players only");
    let mut spaniards = feed.by_country(Country::new("Spain"));
    while let Some(player) = spaniards.next().await {
        info!(rank = %player.rank, name = %player.name, "match");
    }

    info!("Draining the name projection");
    let mut names = feed.names();
    while let Some(name) = names.next().await {
        info!(%name, "name");
    }

    info!("All pipelines drained");
    Ok(())
}
