//! Error types for `rankfeed`.
//!
//! The streaming pipeline itself is total: streams carry plain elements,
//! never `Result`s, and draining them cannot fail. Errors only exist at
//! the construction boundary, where unvalidated input is parsed into the
//! domain types.

use crate::types::{PlayerNameError, RankError};
use thiserror::Error;

/// Errors produced when building roster entries from unvalidated parts.
#[derive(Debug, Clone, Error)]
pub enum RosterError {
    /// The display name failed validation (it was empty).
    #[error("invalid player name: {0}")]
    InvalidName(#[from] PlayerNameError),

    /// The rank failed validation (it was not positive).
    #[error("invalid rank: {0}")]
    InvalidRank(#[from] RankError),
}

/// Result type for roster construction operations.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlayerName, Rank};

    #[test]
    fn name_validation_errors_convert_into_roster_errors() {
        let error = PlayerName::try_new("").expect_err("empty name must be rejected");

        let roster_error = RosterError::from(error);

        assert!(matches!(roster_error, RosterError::InvalidName(_)));
    }

    #[test]
    fn rank_validation_errors_convert_into_roster_errors() {
        let error = Rank::try_new(0).expect_err("zero rank must be rejected");

        let roster_error = RosterError::from(error);

        assert!(matches!(roster_error, RosterError::InvalidRank(_)));
    }
}
