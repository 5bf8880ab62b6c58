//! Composable transformation stages over a player stream.
//!
//! Each stage wraps its single upstream stream and pulls from it on
//! demand. Stages never buffer more than the element in flight and never
//! reorder: filtering drops elements, projection transforms them, both
//! preserve relative order. Composition is by wrapping, so a stage owns
//! its upstream and is dropped together with it.

use crate::roster::Player;
use crate::types::{Country, PlayerName};
use futures::future;
use futures::stream::{Stream, StreamExt};

/// Re-emits only the players whose country equals `country`, preserving
/// relative order.
///
/// A `None` key matches nothing: the returned stream drains its upstream
/// and ends empty rather than raising. The stream ends exactly when the
/// upstream is exhausted with no further matches.
pub fn filter_by_country<S>(
    players: S,
    country: Option<Country>,
) -> impl Stream<Item = Player> + Send
where
    S: Stream<Item = Player> + Send,
{
    players.filter(move |player| {
        future::ready(country.as_ref().is_some_and(|c| player.country == *c))
    })
}

/// Re-emits the display name of each player, one per upstream element,
/// in the same order.
pub fn project_names<S>(players: S) -> impl Stream<Item = PlayerName> + Send
where
    S: Stream<Item = Player> + Send,
{
    players.map(|player| player.name)
}
