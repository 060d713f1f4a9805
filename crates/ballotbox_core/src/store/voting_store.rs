//! Voting store capability contract.
//!
//! # Responsibility
//! - Provide the five lookup/write operations `cast_vote` orchestrates.
//! - Define the error/result types store implementations report through.
//!
//! # Invariants
//! - Uniqueness of `(citizen_id, ballot_item_id)` is a store guarantee;
//!   implementations must enforce it (uniqueness constraint or
//!   transactional check-and-insert) under concurrent callers.
//! - Lookups are side-effect free; `add_vote` is the only write.

use crate::model::ballot::{BallotItem, BallotItemId, Citizen, CitizenId, OptionId};
use crate::model::vote::{Vote, VoteConfirmation};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failure reported by a concrete store.
///
/// The core propagates these unchanged; retry and recovery belong to the
/// caller or the store implementation itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backing system failure (connectivity, query error, ...).
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "store backend failure: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Capability interface for voting persistence.
///
/// Any concrete persistence technology satisfies the core by implementing
/// these five operations; no base type is required.
pub trait VotingStore {
    /// Looks up a citizen by id. `Ok(None)` means the citizen is unknown.
    fn get_citizen(&self, citizen_id: CitizenId) -> StoreResult<Option<Citizen>>;

    /// Looks up a ballot item by id, including its configured options.
    fn get_ballot_item(&self, ballot_item_id: BallotItemId) -> StoreResult<Option<BallotItem>>;

    /// Returns whether the citizen may vote on the ballot item.
    fn is_citizen_eligible(
        &self,
        citizen_id: CitizenId,
        ballot_item_id: BallotItemId,
    ) -> StoreResult<bool>;

    /// Returns the existing vote for the pair, if one was already cast.
    fn get_vote(
        &self,
        citizen_id: CitizenId,
        ballot_item_id: BallotItemId,
    ) -> StoreResult<Option<Vote>>;

    /// Persists one vote and returns the store-built confirmation.
    ///
    /// # Contract
    /// - Implementations own the uniqueness guarantee on
    ///   `(citizen_id, ballot_item_id)`; the service's check-then-write
    ///   sequence is not atomic and cannot provide it alone.
    /// - `write_in` is forwarded verbatim; the service has already
    ///   validated it against the ballot item's write-in policy.
    fn add_vote(
        &self,
        citizen_id: CitizenId,
        ballot_item_id: BallotItemId,
        option_id: OptionId,
        write_in: Option<&str>,
    ) -> StoreResult<VoteConfirmation>;
}
