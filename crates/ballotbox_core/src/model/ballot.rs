//! Ballot reference data: citizens, ballot items and their options.
//!
//! # Responsibility
//! - Define the read-only entities `cast_vote` validates against.
//! - Provide option-membership helpers used by choice validation.
//!
//! # Invariants
//! - `BallotItem::has_option` matches on option identity only, never on
//!   name or description.
//! - The write-in sentinel (`WRITE_IN_OPTION_ID`) is never reported as a
//!   configured option.

use serde::{Deserialize, Serialize};

/// Stable identifier for a citizen.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CitizenId = i64;

/// Stable identifier for a ballot item.
pub type BallotItemId = i64;

/// Identifier for an option within its parent ballot item.
pub type OptionId = i64;

/// Reserved option id meaning "write-in choice".
///
/// A configured option can never carry this id, so the sentinel and the
/// option-membership check can never both match one request.
pub const WRITE_IN_OPTION_ID: OptionId = 0;

/// Citizen record. Only the id is consumed by the voting core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    /// Stable citizen id used for lookups and vote uniqueness.
    pub citizen_id: CitizenId,
}

/// One selectable option on a ballot item. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotItemOption {
    /// Option id, unique within the parent ballot item.
    pub option_id: OptionId,
    /// Display name shown to voters.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
}

/// A single decision/contest a citizen may vote on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotItem {
    /// Stable ballot item id.
    pub ballot_item_id: BallotItemId,
    /// Configured options. Treated as a set for validation purposes.
    pub options: Vec<BallotItemOption>,
    /// Whether the write-in sentinel is a permitted choice.
    pub allows_write_in: bool,
}

impl BallotItem {
    /// Returns whether `option_id` names a configured option.
    ///
    /// # Contract
    /// - Matches option identity only; names and descriptions are ignored.
    /// - The write-in sentinel never matches, even if a row with id `0`
    ///   were present in persisted data.
    pub fn has_option(&self, option_id: OptionId) -> bool {
        if option_id == WRITE_IN_OPTION_ID {
            return false;
        }
        self.options
            .iter()
            .any(|option| option.option_id == option_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{BallotItem, BallotItemOption, WRITE_IN_OPTION_ID};

    fn ballot_with_options(ids: &[i64]) -> BallotItem {
        BallotItem {
            ballot_item_id: 123,
            options: ids
                .iter()
                .map(|id| BallotItemOption {
                    option_id: *id,
                    name: format!("option {id}"),
                    description: None,
                })
                .collect(),
            allows_write_in: false,
        }
    }

    #[test]
    fn has_option_matches_configured_ids_only() {
        let ballot = ballot_with_options(&[1, 2, 3, 4]);
        assert!(ballot.has_option(1));
        assert!(ballot.has_option(4));
        assert!(!ballot.has_option(7));
    }

    #[test]
    fn write_in_sentinel_is_never_a_configured_option() {
        let ballot = ballot_with_options(&[0, 1]);
        assert!(!ballot.has_option(WRITE_IN_OPTION_ID));
    }
}
