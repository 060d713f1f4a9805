//! Domain model for citizens, ballot items and votes.
//!
//! # Responsibility
//! - Define the canonical data structures consumed by the voting core.
//! - Keep ballot reference data and vote fact records in one shape shared
//!   with store implementations.
//!
//! # Invariants
//! - Every entity is identified by a stable integer id.
//! - Ballot reference data is immutable from the core's point of view.
//! - Option id `0` is reserved for the write-in sentinel and is never a
//!   configured option id.

pub mod ballot;
pub mod vote;
