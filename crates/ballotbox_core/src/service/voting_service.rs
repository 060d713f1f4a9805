//! Vote-casting use-case service.
//!
//! # Responsibility
//! - Run the fixed validation sequence for one vote attempt.
//! - Delegate the final write to the store and pass its confirmation
//!   through unmodified.
//!
//! # Invariants
//! - Validation short-circuits on the first violated rule; no store call
//!   beyond the failing step is made.
//! - Exactly one write (`add_vote`) occurs, and only after every check
//!   passes.
//! - The check-then-write sequence is not atomic; the store owns the
//!   `(citizen_id, ballot_item_id)` uniqueness guarantee under concurrency.

use crate::model::ballot::{BallotItemId, CitizenId, OptionId, WRITE_IN_OPTION_ID};
use crate::model::vote::{is_blank_write_in, VoteConfirmation};
use crate::store::voting_store::{StoreError, VotingStore};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Reason text for a write-in vote on a ballot item that forbids write-ins.
pub const REASON_WRITE_IN_UNAVAILABLE: &str =
    "write-in option is not available for that ballot item";
/// Reason text for a write-in vote with missing or blank text.
pub const REASON_WRITE_IN_BLANK: &str = "write-in value cannot be null or empty";
/// Reason text for an option id that is not configured on the ballot item.
pub const REASON_OPTION_UNKNOWN: &str = "that option is not valid";

/// Error taxonomy for vote casting.
///
/// One variant per rule kind so callers can branch on the violated rule;
/// none of these is recoverable by retrying with the same arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    /// Citizen or ballot item lookup came back absent. Carries the entity
    /// name (`"citizen"` or `"ballot item"`).
    RecordNotFound(&'static str),
    /// Citizen is not authorized for this ballot item.
    Ineligible,
    /// A vote already exists for this `(citizen, ballot item)` pair.
    AlreadyVoted,
    /// Malformed choice; carries the rejection reason.
    Invalid(&'static str),
    /// Store transport failure, propagated unchanged.
    Store(StoreError),
}

impl Display for VoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecordNotFound(entity) => write!(f, "could not find that {entity}"),
            Self::Ineligible => {
                write!(f, "that citizen is not eligible to vote on that ballot item")
            }
            Self::AlreadyVoted => {
                write!(f, "that citizen has already voted on that ballot item")
            }
            Self::Invalid(reason) => write!(f, "{reason}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for VoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for VoteError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl VoteError {
    /// Stable token used in `error_code=` log fields.
    fn code(&self) -> &'static str {
        match self {
            Self::RecordNotFound(_) => "record_not_found",
            Self::Ineligible => "ineligible_vote",
            Self::AlreadyVoted => "already_voted",
            Self::Invalid(_) => "invalid_vote",
            Self::Store(_) => "store_failure",
        }
    }
}

/// Request model for one vote attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastVoteRequest {
    /// Citizen casting the vote.
    pub citizen_id: CitizenId,
    /// Ballot item voted on.
    pub ballot_item_id: BallotItemId,
    /// Chosen option id, or `WRITE_IN_OPTION_ID` for a write-in.
    pub option_id: OptionId,
    /// Free-text write-in value; meaningful only with the sentinel.
    pub write_in: Option<String>,
}

/// Vote-casting service facade over store implementations.
pub struct VotingService<S: VotingStore> {
    store: S,
}

impl<S: VotingStore> VotingService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Casts one vote after running the full validation sequence.
    ///
    /// # Contract
    /// - Checks run in fixed order: citizen lookup, ballot item lookup,
    ///   eligibility, prior-vote, option validity.
    /// - The first violated rule aborts with its error kind; no later
    ///   store call happens.
    /// - On success the store confirmation is returned unmodified.
    ///
    /// # Side effects
    /// - Exactly one `add_vote` call on success; none on failure.
    /// - Emits `cast_vote` logging events with ids, duration and outcome.
    pub fn cast_vote(&self, request: &CastVoteRequest) -> Result<VoteConfirmation, VoteError> {
        let started_at = Instant::now();
        info!(
            "event=cast_vote module=service status=start citizen_id={} ballot_item_id={} option_id={}",
            request.citizen_id, request.ballot_item_id, request.option_id
        );

        match self.validate_and_commit(request) {
            Ok(confirmation) => {
                info!(
                    "event=cast_vote module=service status=ok citizen_id={} ballot_item_id={} option_id={} success={} duration_ms={}",
                    request.citizen_id,
                    request.ballot_item_id,
                    request.option_id,
                    confirmation.success,
                    started_at.elapsed().as_millis()
                );
                Ok(confirmation)
            }
            Err(err @ VoteError::Store(_)) => {
                error!(
                    "event=cast_vote module=service status=error citizen_id={} ballot_item_id={} duration_ms={} error_code={} error={}",
                    request.citizen_id,
                    request.ballot_item_id,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
            Err(err) => {
                warn!(
                    "event=cast_vote module=service status=rejected citizen_id={} ballot_item_id={} duration_ms={} error_code={} error={}",
                    request.citizen_id,
                    request.ballot_item_id,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn validate_and_commit(
        &self,
        request: &CastVoteRequest,
    ) -> Result<VoteConfirmation, VoteError> {
        if self.store.get_citizen(request.citizen_id)?.is_none() {
            return Err(VoteError::RecordNotFound("citizen"));
        }

        let ballot_item = self
            .store
            .get_ballot_item(request.ballot_item_id)?
            .ok_or(VoteError::RecordNotFound("ballot item"))?;

        if !self
            .store
            .is_citizen_eligible(request.citizen_id, request.ballot_item_id)?
        {
            return Err(VoteError::Ineligible);
        }

        if self
            .store
            .get_vote(request.citizen_id, request.ballot_item_id)?
            .is_some()
        {
            return Err(VoteError::AlreadyVoted);
        }

        if request.option_id == WRITE_IN_OPTION_ID {
            if !ballot_item.allows_write_in {
                return Err(VoteError::Invalid(REASON_WRITE_IN_UNAVAILABLE));
            }
            if is_blank_write_in(request.write_in.as_deref()) {
                return Err(VoteError::Invalid(REASON_WRITE_IN_BLANK));
            }
        } else if !ballot_item.has_option(request.option_id) {
            return Err(VoteError::Invalid(REASON_OPTION_UNKNOWN));
        }

        let confirmation = self.store.add_vote(
            request.citizen_id,
            request.ballot_item_id,
            request.option_id,
            request.write_in.as_deref(),
        )?;
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::{VoteError, REASON_OPTION_UNKNOWN};
    use crate::store::voting_store::StoreError;
    use std::error::Error;

    #[test]
    fn display_uses_entity_and_reason_payloads() {
        assert_eq!(
            VoteError::RecordNotFound("citizen").to_string(),
            "could not find that citizen"
        );
        assert_eq!(
            VoteError::RecordNotFound("ballot item").to_string(),
            "could not find that ballot item"
        );
        assert_eq!(
            VoteError::Invalid(REASON_OPTION_UNKNOWN).to_string(),
            "that option is not valid"
        );
    }

    #[test]
    fn store_failures_keep_their_source() {
        let err = VoteError::from(StoreError::Backend("connection reset".to_string()));
        assert_eq!(err, VoteError::Store(StoreError::Backend("connection reset".to_string())));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn rule_errors_have_no_source() {
        assert!(VoteError::AlreadyVoted.source().is_none());
        assert!(VoteError::Ineligible.source().is_none());
    }
}
