//! The player entity record and the fixed literal roster.

use crate::errors::RosterResult;
use crate::types::{Country, PlayerId, PlayerName, Rank};
use serde::{Deserialize, Serialize};

/// A ranked roster entry.
///
/// Players are constructed by the generation step that produces them and
/// handed to the consumer by value; they are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identifier, unique within a single generation run.
    pub id: PlayerId,
    /// Non-empty display name.
    pub name: PlayerName,
    /// Standing on the tour, lower is better.
    pub rank: Rank,
    /// Exact-match key consumed by the country filter stage.
    pub country: Country,
}

impl Player {
    /// Creates a new player from already-validated parts.
    pub const fn new(id: PlayerId, name: PlayerName, rank: Rank, country: Country) -> Self {
        Self {
            id,
            name,
            rank,
            country,
        }
    }

    /// Parses a player from unvalidated parts.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`](crate::errors::RosterError) if the name is
    /// empty or the rank is not positive.
    pub fn parse(id: u64, name: &str, rank: u32, country: &str) -> RosterResult<Self> {
        Ok(Self {
            id: PlayerId::new(id),
            name: PlayerName::try_new(name)?,
            rank: Rank::try_new(rank)?,
            country: Country::new(country),
        })
    }
}

/// The fixed literal roster: the tour's top five, ordered by rank.
///
/// Stands in for a database. The source stream emits in exactly this
/// construction order, and downstream stages preserve it.
pub fn tour_top_five() -> Vec<Player> {
    [
        (1, "Carlos Alcaraz", 1, "Spain"),
        (2, "Novak Djokovic", 2, "Serbia"),
        (3, "Rafael Nadal", 3, "Spain"),
        (4, "Roger Federer", 4, "Switzerland"),
        (5, "Andy Murray", 5, "UK"),
    ]
    .into_iter()
    .map(|(id, name, rank, country)| {
        Player::parse(id, name, rank, country).expect("literal roster entries are always valid")
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_roster_is_ordered_by_rank() {
        let roster = tour_top_five();

        let ranks: Vec<u32> = roster.iter().map(|p| u32::from(p.rank)).collect();

        assert_eq!(ranks, vec![1, 2, 3, 4, 5], "roster must be in rank order");
    }

    #[test]
    fn literal_roster_ids_are_unique() {
        let roster = tour_top_five();

        let mut ids: Vec<u64> = roster.iter().map(|p| p.id.into_inner()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), roster.len(), "ids must be unique within a run");
    }

    #[test]
    fn literal_roster_countries_match_the_tour() {
        let roster = tour_top_five();

        let countries: Vec<&str> = roster.iter().map(|p| p.country.as_str()).collect();

        assert_eq!(
            countries,
            vec!["Spain", "Serbia", "Spain", "Switzerland", "UK"]
        );
    }

    #[test]
    fn parse_rejects_invalid_parts() {
        assert!(Player::parse(1, "", 1, "Spain").is_err(), "empty name");
        assert!(Player::parse(1, "Carlos Alcaraz", 0, "Spain").is_err(), "zero rank");
    }
}
