//! Core types for the `rankfeed` streaming library.
//!
//! All types that carry an invariant use smart constructors so that
//! validity is established at construction time, following the
//! "parse, don't validate" principle. Once a value exists, no further
//! checking is needed anywhere downstream.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a player within a single roster generation run.
///
/// Ids are assigned at construction and never change. Uniqueness is a
/// property of the roster that hands the ids out, not of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Creates a new player identifier from a raw integer.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's display name.
///
/// `PlayerName` values are guaranteed to be non-empty. Once constructed,
/// a `PlayerName` is always valid - no further validation needed.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct PlayerName(String);

/// A player's standing on the tour.
///
/// Ranks are positive integers; a lower value means a better standing.
/// Several players may share a rank - no uniqueness is enforced.
#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Into,
        Serialize,
        Deserialize
    )
)]
pub struct Rank(u32);

/// The country key a player is filtered by.
///
/// Deliberately free-form and unsanitized: the filter stage compares by
/// literal equality, so `"Spain"` and `"spain"` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
    /// Creates a country key; the string is stored exactly as given.
    pub fn new(country: impl Into<String>) -> Self {
        Self(country.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_name_rejects_empty_string() {
        // Given/When
        let result = PlayerName::try_new("");

        // Then
        assert!(result.is_err(), "PlayerName should reject empty string");
    }

    #[test]
    fn player_name_accepts_any_non_empty_string() {
        let result = PlayerName::try_new("Carlos Alcaraz");

        assert!(result.is_ok(), "PlayerName should accept non-empty string");
    }

    #[test]
    fn rank_rejects_zero() {
        // Given/When
        let result = Rank::try_new(0);

        // Then
        assert!(result.is_err(), "Rank should reject zero");
    }

    #[test]
    fn rank_accepts_one() {
        let rank = Rank::try_new(1).expect("rank 1 is the best possible standing");

        assert_eq!(u32::from(rank), 1);
    }

    #[test]
    fn country_comparison_is_literal() {
        // No trimming, no case folding.
        assert_ne!(Country::new("Spain"), Country::new("spain"));
        assert_ne!(Country::new("Spain"), Country::new(" Spain"));
        assert_eq!(Country::new("Spain"), Country::new("Spain"));
    }

    #[test]
    fn player_id_preserves_raw_value() {
        let id = PlayerId::new(42);

        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
