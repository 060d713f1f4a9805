//! Vote fact records and write confirmations.
//!
//! # Responsibility
//! - Define the persisted vote shape and the confirmation envelope the
//!   store returns from its write operation.
//! - Provide write-in text normalization shared by validation.
//!
//! # Invariants
//! - At most one vote exists per `(citizen_id, ballot_item_id)` pair; the
//!   store owns that uniqueness guarantee.
//! - `write_in` is meaningful only when `option_id == WRITE_IN_OPTION_ID`.
//! - Votes are created once by the store and never mutated by the core.

use crate::model::ballot::{BallotItemId, CitizenId, OptionId, WRITE_IN_OPTION_ID};
use serde::{Deserialize, Serialize};

/// Persisted vote fact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// Citizen who cast the vote.
    pub citizen_id: CitizenId,
    /// Ballot item the vote applies to.
    pub ballot_item_id: BallotItemId,
    /// Chosen option id, or `WRITE_IN_OPTION_ID` for a write-in.
    pub option_id: OptionId,
    /// Free-text value for write-in votes; `None` otherwise.
    pub write_in: Option<String>,
}

impl Vote {
    /// Returns whether this vote used the write-in sentinel.
    pub fn is_write_in(&self) -> bool {
        self.option_id == WRITE_IN_OPTION_ID
    }
}

/// Confirmation envelope returned by the store write operation.
///
/// Constructed by the store at write time and passed through `cast_vote`
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteConfirmation {
    /// The persisted vote as recorded by the store.
    pub vote: Vote,
    /// Whether the write was accepted.
    pub success: bool,
}

/// Returns whether a write-in value should be treated as missing.
///
/// Missing (`None`) and whitespace-only text are equivalent.
pub fn is_blank_write_in(write_in: Option<&str>) -> bool {
    write_in.map_or(true, |value| value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{is_blank_write_in, Vote};

    #[test]
    fn blank_write_in_covers_none_empty_and_whitespace() {
        assert!(is_blank_write_in(None));
        assert!(is_blank_write_in(Some("")));
        assert!(is_blank_write_in(Some("   \t\n")));
        assert!(!is_blank_write_in(Some("Chris Kuroda")));
    }

    #[test]
    fn write_in_flag_follows_sentinel() {
        let standard = Vote {
            citizen_id: 12345,
            ballot_item_id: 123,
            option_id: 1,
            write_in: None,
        };
        assert!(!standard.is_write_in());

        let write_in = Vote {
            option_id: 0,
            write_in: Some("Chris Kuroda".to_string()),
            ..standard
        };
        assert!(write_in.is_write_in());
    }
}
