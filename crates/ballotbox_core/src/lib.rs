//! Core domain logic for Ballotbox vote casting.
//! This crate is the single source of truth for vote-casting business rules.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::ballot::{
    BallotItem, BallotItemId, BallotItemOption, Citizen, CitizenId, OptionId, WRITE_IN_OPTION_ID,
};
pub use model::vote::{is_blank_write_in, Vote, VoteConfirmation};
pub use service::voting_service::{CastVoteRequest, VoteError, VotingService};
pub use store::voting_store::{StoreError, StoreResult, VotingStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
